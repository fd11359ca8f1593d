//! Update Promotion Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use promotrack_app::domain::promotions::data::PromotionPatch;

use crate::{
    errors::ApiError,
    extensions::*,
    promotions::{errors::into_api_error, models::PromotionResponse},
    state::State,
};

/// Update Promotion Request
///
/// A partial update: absent fields leave the stored values unchanged. The
/// gateway re-validates the merged record, so moving `endDate` before the
/// stored `startDate` is rejected even though only one field was sent.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdatePromotionRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub expected_sales_impact: Option<f64>,
}

impl UpdatePromotionRequest {
    fn into_patch(self) -> Result<PromotionPatch, ApiError> {
        Ok(PromotionPatch {
            name: self.name,
            start_date: self.start_date.into_date_field("startDate")?,
            end_date: self.end_date.into_date_field("endDate")?,
            budget: self.budget,
            expected_sales_impact: self.expected_sales_impact,
        })
    }
}

/// Update Promotion Handler
#[endpoint(
    tags("promotions"),
    summary = "Update Promotion",
    responses(
        (status_code = StatusCode::OK, description = "Promotion updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Promotion not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation error"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    promotion: PathParam<Uuid>,
    json: JsonBody<UpdatePromotionRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PromotionResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let promotion = promotion.into_inner();
    let patch = json.into_inner().into_patch()?;

    let updated = state
        .promotions
        .update_promotion(promotion.into(), patch)
        .await
        .map_err(into_api_error)?;

    res.add_header(LOCATION, format!("/promotions/{promotion}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::OK);

    tracing::info!(promotion = %promotion, "updated promotion");

    Ok(Json(updated.into()))
}
