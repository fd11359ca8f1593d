//! Promotion validation rule set.
//!
//! The same rules back the create and update paths: callers assemble a
//! [`PromotionDraft`] (for updates, by merging a patch over the stored
//! record) and the gateway re-validates it here regardless of what the HTTP
//! layer already checked. All rules run; nothing short-circuits, so one
//! request can report several field errors at once.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::promotions::data::{NewPromotion, PromotionDraft};

/// A single failed field check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    /// Wire-facing field name, e.g. `"startDate"`.
    pub field: &'static str,
    pub message: &'static str,
}

/// The set of field errors produced by one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// The message for a field, for inline form display.
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;

        for error in &self.errors {
            if !first {
                write!(f, ", ")?;
            }

            write!(f, "{}: {}", error.field, error.message)?;
            first = false;
        }

        Ok(())
    }
}

impl Error for ValidationErrors {}

/// Checks a candidate promotion against the full rule set.
///
/// Returns the validated promotion, or every field error found.
///
/// # Errors
///
/// Returns [`ValidationErrors`] listing each failed field check.
pub fn validate(draft: &PromotionDraft) -> Result<NewPromotion, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let has_name = draft
        .name
        .as_deref()
        .is_some_and(|name| !name.trim().is_empty());

    if !has_name {
        errors.push("name", "Promotion name is required");
    }

    if draft.start_date.is_none() {
        errors.push("startDate", "Start date is required");
    }

    match (draft.start_date, draft.end_date) {
        (_, None) => errors.push("endDate", "End date is required"),
        (Some(start), Some(end)) if end < start => {
            errors.push("endDate", "End date must be after start date");
        }
        _ => {}
    }

    match draft.budget {
        None => errors.push("budget", "Budget is required"),
        Some(budget) if !budget.is_finite() || budget <= 0.0 => {
            errors.push("budget", "Budget must be a positive number");
        }
        _ => {}
    }

    if let Some(impact) = draft.expected_sales_impact {
        if !impact.is_finite() || impact < 0.0 {
            errors.push(
                "expectedSalesImpact",
                "Expected sales impact must be a non-negative number",
            );
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    match (&draft.name, draft.start_date, draft.end_date, draft.budget) {
        (Some(name), Some(start_date), Some(end_date), Some(budget)) => Ok(NewPromotion {
            name: name.clone(),
            start_date,
            end_date,
            budget,
            expected_sales_impact: draft.expected_sales_impact,
        }),
        _ => Err(errors),
    }
}
