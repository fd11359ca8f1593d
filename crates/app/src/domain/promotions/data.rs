//! Promotions Data

use jiff::Timestamp;

use crate::domain::promotions::records::PromotionRecord;

/// A candidate promotion as submitted by a caller, before validation.
///
/// Every field is optional so the validation rule set can report missing
/// fields with field-level messages instead of failing at deserialization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromotionDraft {
    pub name: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub budget: Option<f64>,
    pub expected_sales_impact: Option<f64>,
}

/// A promotion that has passed the validation rule set.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPromotion {
    pub name: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub budget: f64,
    pub expected_sales_impact: Option<f64>,
}

/// Partial update over a stored promotion. `None` leaves the stored value
/// unchanged; the identifier is never part of a patch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromotionPatch {
    pub name: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub budget: Option<f64>,
    pub expected_sales_impact: Option<f64>,
}

impl PromotionPatch {
    /// Merges the patch over an existing record into a draft for
    /// re-validation, so a one-field update is checked against the full
    /// merged state.
    #[must_use]
    pub fn apply_to(&self, existing: &PromotionRecord) -> PromotionDraft {
        PromotionDraft {
            name: Some(self.name.clone().unwrap_or_else(|| existing.name.clone())),
            start_date: Some(self.start_date.unwrap_or(existing.start_date)),
            end_date: Some(self.end_date.unwrap_or(existing.end_date)),
            budget: Some(self.budget.unwrap_or(existing.budget)),
            expected_sales_impact: self.expected_sales_impact.or(existing.expected_sales_impact),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::promotions::records::PromotionUuid;

    use super::*;

    fn existing() -> TestResult<PromotionRecord> {
        Ok(PromotionRecord {
            uuid: PromotionUuid::new(),
            name: "Spring Sale".to_owned(),
            start_date: "2026-03-01T00:00:00Z".parse()?,
            end_date: "2026-03-31T00:00:00Z".parse()?,
            budget: 5_000.0,
            expected_sales_impact: Some(12_000.0),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        })
    }

    #[test]
    fn empty_patch_reproduces_existing_fields() -> TestResult {
        let record = existing()?;

        let draft = PromotionPatch::default().apply_to(&record);

        assert_eq!(draft.name.as_deref(), Some("Spring Sale"));
        assert_eq!(draft.start_date, Some(record.start_date));
        assert_eq!(draft.end_date, Some(record.end_date));
        assert_eq!(draft.budget, Some(5_000.0));
        assert_eq!(draft.expected_sales_impact, Some(12_000.0));

        Ok(())
    }

    #[test]
    fn patched_fields_override_existing_ones() -> TestResult {
        let record = existing()?;

        let patch = PromotionPatch {
            budget: Some(7_500.0),
            ..PromotionPatch::default()
        };

        let draft = patch.apply_to(&record);

        assert_eq!(draft.budget, Some(7_500.0));
        assert_eq!(draft.name.as_deref(), Some("Spring Sale"));
        assert_eq!(draft.start_date, Some(record.start_date));

        Ok(())
    }

    #[test]
    fn absent_sales_impact_keeps_stored_value() -> TestResult {
        let record = existing()?;

        let draft = PromotionPatch::default().apply_to(&record);

        assert_eq!(draft.expected_sales_impact, Some(12_000.0));

        Ok(())
    }

    #[test]
    fn patched_end_date_is_merged_for_revalidation() -> TestResult {
        let record = existing()?;

        let patch = PromotionPatch {
            end_date: Some("2026-02-01T00:00:00Z".parse()?),
            ..PromotionPatch::default()
        };

        let draft = patch.apply_to(&record);

        // The merged draft now carries the stored start date and the patched
        // end date, which the rule set will reject.
        assert!(draft.end_date < draft.start_date);

        Ok(())
    }
}
