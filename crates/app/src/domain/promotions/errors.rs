//! Promotions service errors.

use sqlx::Error;
use thiserror::Error;

use crate::domain::promotions::validate::ValidationErrors;

#[derive(Debug, Error)]
pub enum PromotionsServiceError {
    #[error("promotion not found")]
    NotFound,

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for PromotionsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}
