//! Promotion Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    errors::ApiError,
    extensions::*,
    promotions::{errors::into_api_error, models::PromotionResponse},
    state::State,
};

/// Promotion Index Handler
///
/// Returns all promotions, newest first.
#[endpoint(tags("promotions"), summary = "List Promotions")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<PromotionResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let promotions = state
        .promotions
        .list_promotions()
        .await
        .map_err(into_api_error)?;

    Ok(Json(promotions.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use promotrack_app::domain::promotions::{
        MockPromotionsService, PromotionsServiceError, records::PromotionUuid,
    };

    use crate::{errors::ErrorBody, test_helpers::{make_promotion, promotions_service}};

    use super::*;

    fn make_service(promotions: MockPromotionsService) -> Service {
        promotions_service(promotions, Router::with_path("promotions").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_list_promotions()
            .once()
            .return_once(|| Ok(vec![]));

        promotions.expect_create_promotion().never();
        promotions.expect_update_promotion().never();
        promotions.expect_delete_promotion().never();

        let mut res = TestClient::get("http://example.com/promotions")
            .send(&make_service(promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Vec<PromotionResponse> = res.take_json().await?;

        assert!(body.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_preserves_service_ordering() -> TestResult {
        let newest = PromotionUuid::new();
        let oldest = PromotionUuid::new();

        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_list_promotions()
            .once()
            .return_once(move || Ok(vec![make_promotion(newest), make_promotion(oldest)]));

        promotions.expect_create_promotion().never();
        promotions.expect_update_promotion().never();
        promotions.expect_delete_promotion().never();

        let body: Vec<PromotionResponse> = TestClient::get("http://example.com/promotions")
            .send(&make_service(promotions))
            .await
            .take_json()
            .await?;

        let ids: Vec<_> = body.iter().map(|promotion| promotion.id).collect();

        assert_eq!(ids, vec![newest.into_uuid(), oldest.into_uuid()]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_error_returns_500() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_list_promotions()
            .once()
            .return_once(|| Err(PromotionsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        promotions.expect_create_promotion().never();
        promotions.expect_update_promotion().never();
        promotions.expect_delete_promotion().never();

        let mut res = TestClient::get("http://example.com/promotions")
            .send(&make_service(promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(body.message, "Server error");

        Ok(())
    }
}
