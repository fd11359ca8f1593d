//! Delete Promotion Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::ApiError,
    extensions::*,
    promotions::errors::into_api_error,
    state::State,
};

/// Promotion Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PromotionDeletedResponse {
    /// Confirmation message
    pub message: String,
}

/// Delete Promotion Handler
#[endpoint(
    tags("promotions"),
    summary = "Delete Promotion",
    responses(
        (status_code = StatusCode::OK, description = "Promotion deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Promotion not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    promotion: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<PromotionDeletedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let promotion = promotion.into_inner();

    state
        .promotions
        .delete_promotion(promotion.into())
        .await
        .map_err(into_api_error)?;

    tracing::info!(promotion = %promotion, "deleted promotion");

    Ok(Json(PromotionDeletedResponse {
        message: "Promotion deleted successfully".to_owned(),
    }))
}
