//! Promotion Errors

use tracing::error;

use promotrack_app::domain::promotions::PromotionsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: PromotionsServiceError) -> ApiError {
    match error {
        PromotionsServiceError::Validation(errors) => ApiError::validation(errors.to_string()),
        PromotionsServiceError::NotFound => ApiError::not_found("promotion not found"),
        PromotionsServiceError::Sql(source) => {
            error!("promotion storage failure: {source}");

            ApiError::server_error(source.to_string())
        }
    }
}
