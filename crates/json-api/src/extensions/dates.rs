//! Date field parsing helpers.

use jiff::Timestamp;

use crate::errors::ApiError;

/// Parses an optional ISO-8601 date-time field from a request body, keeping
/// the field name in the error so the client can surface it inline.
pub(crate) trait DateFieldExt {
    fn into_date_field(self, field: &'static str) -> Result<Option<Timestamp>, ApiError>;
}

impl DateFieldExt for Option<String> {
    fn into_date_field(self, field: &'static str) -> Result<Option<Timestamp>, ApiError> {
        self.map(|value| value.parse::<Timestamp>())
            .transpose()
            .map_err(|_source| {
                ApiError::validation(format!("{field}: must be an ISO-8601 date-time"))
            })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn absent_field_parses_to_none() -> TestResult {
        let parsed = None.into_date_field("startDate")?;

        assert_eq!(parsed, None);

        Ok(())
    }

    #[test]
    fn valid_timestamp_parses() -> TestResult {
        let parsed = Some("2026-06-01T00:00:00Z".to_owned()).into_date_field("startDate")?;

        assert_eq!(parsed, Some("2026-06-01T00:00:00Z".parse()?));

        Ok(())
    }

    #[test]
    fn malformed_timestamp_names_the_field() {
        let result = Some("not-a-date".to_owned()).into_date_field("endDate");

        let error = result.unwrap_err();

        assert!(error.body().error.starts_with("endDate"));
    }
}
