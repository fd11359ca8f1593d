//! Create Promotion Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use promotrack_app::domain::promotions::data::PromotionDraft;

use crate::{
    errors::ApiError,
    extensions::*,
    promotions::{errors::into_api_error, models::PromotionResponse},
    state::State,
};

/// Create Promotion Request
///
/// Every field is optional on the wire so the gateway can report missing
/// fields with field-level validation messages.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatePromotionRequest {
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

impl CreatePromotionRequest {
    fn into_draft(self) -> Result<PromotionDraft, ApiError> {
        Ok(PromotionDraft {
            name: self.name,
            start_date: self.start_date.into_date_field("startDate")?,
            end_date: self.end_date.into_date_field("endDate")?,
            budget: self.budget,
            expected_sales_impact: self.expected_sales_impact,
        })
    }
}

/// Create Promotion Handler
#[endpoint(
    tags("promotions"),
    summary = "Create Promotion",
    responses(
        (status_code = StatusCode::CREATED, description = "Promotion created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation error"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreatePromotionRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PromotionResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let draft = json.into_inner().into_draft()?;

    let created = state
        .promotions
        .create_promotion(draft)
        .await
        .map_err(into_api_error)?;

    res.add_header(LOCATION, format!("/promotions/{}", created.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(promotion = %created.uuid, "created promotion");

    Ok(Json(created.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use promotrack_app::domain::promotions::{
        MockPromotionsService, PromotionsServiceError, records::PromotionUuid, validate::validate,
    };

    use crate::{errors::ErrorBody, test_helpers::{make_promotion, promotions_service}};

    use super::*;

    fn make_service(promotions: MockPromotionsService) -> Service {
        promotions_service(promotions, Router::with_path("promotions").post(handler))
    }

    #[tokio::test]
    async fn test_create_promotion_success() -> TestResult {
        let uuid = PromotionUuid::new();
        let promotion = make_promotion(uuid);

        let expected = PromotionDraft {
            name: Some("Spring Sale".to_owned()),
            start_date: Some("2026-03-01T00:00:00Z".parse::<Timestamp>()?),
            end_date: Some("2026-03-31T00:00:00Z".parse::<Timestamp>()?),
            budget: Some(1_000.0),
            expected_sales_impact: Some(2_500.0),
        };

        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_create_promotion()
            .once()
            .withf(move |draft| *draft == expected)
            .return_once(move |_| Ok(promotion));

        promotions.expect_list_promotions().never();
        promotions.expect_update_promotion().never();
        promotions.expect_delete_promotion().never();

        let mut res = TestClient::post("http://example.com/promotions")
            .json(&json!({
                "name": "Spring Sale",
                "startDate": "2026-03-01T00:00:00Z",
                "endDate": "2026-03-31T00:00:00Z",
                "budget": 1000.0,
                "expectedSalesImpact": 2500.0,
            }))
            .send(&make_service(promotions))
            .await;

        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/promotions/{uuid}").as_str()));

        let body: PromotionResponse = res.take_json().await?;

        assert_eq!(body.id, uuid.into_uuid());
        assert_eq!(body.name, "Spring Sale");
        assert_eq!(body.budget, 1_000.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_promotion_validation_error_returns_400() -> TestResult {
        let errors = validate(&PromotionDraft::default()).unwrap_err();

        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_create_promotion()
            .once()
            .return_once(move |_| Err(PromotionsServiceError::Validation(errors)));

        promotions.expect_list_promotions().never();
        promotions.expect_update_promotion().never();
        promotions.expect_delete_promotion().never();

        let mut res = TestClient::post("http://example.com/promotions")
            .json(&json!({}))
            .send(&make_service(promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(body.message, "Validation error");
        assert!(body.error.contains("Promotion name is required"));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_promotion_malformed_date_rejected_before_service() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions.expect_create_promotion().never();
        promotions.expect_list_promotions().never();
        promotions.expect_update_promotion().never();
        promotions.expect_delete_promotion().never();

        let mut res = TestClient::post("http://example.com/promotions")
            .json(&json!({
                "name": "Bad Date",
                "startDate": "yesterday",
                "endDate": "2026-03-31T00:00:00Z",
                "budget": 100.0,
            }))
            .send(&make_service(promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: ErrorBody = res.take_json().await?;

        assert!(body.error.starts_with("startDate"));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_promotion_storage_error_returns_500() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_create_promotion()
            .once()
            .return_once(|_| Err(PromotionsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        promotions.expect_list_promotions().never();
        promotions.expect_update_promotion().never();
        promotions.expect_delete_promotion().never();

        let res = TestClient::post("http://example.com/promotions")
            .json(&json!({
                "name": "Spring Sale",
                "startDate": "2026-03-01T00:00:00Z",
                "endDate": "2026-03-31T00:00:00Z",
                "budget": 1000.0,
            }))
            .send(&make_service(promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
