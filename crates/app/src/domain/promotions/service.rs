//! Promotions service.
//!
//! The persistence gateway: identifier generation, timestamp maintenance,
//! and authoritative validation all live behind [`PromotionsService`].

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::domain::promotions::{
    data::{PromotionDraft, PromotionPatch},
    errors::PromotionsServiceError,
    records::{PromotionRecord, PromotionUuid},
    repository::PgPromotionsRepository,
    validate::validate,
};

#[derive(Debug, Clone)]
pub struct PgPromotionsService {
    repository: PgPromotionsRepository,
}

impl PgPromotionsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgPromotionsRepository::new(pool),
        }
    }
}

#[async_trait]
impl PromotionsService for PgPromotionsService {
    async fn list_promotions(&self) -> Result<Vec<PromotionRecord>, PromotionsServiceError> {
        let promotions = self.repository.list_promotions().await?;

        Ok(promotions)
    }

    async fn create_promotion(
        &self,
        draft: PromotionDraft,
    ) -> Result<PromotionRecord, PromotionsServiceError> {
        let data = validate(&draft)?;

        let created = self
            .repository
            .create_promotion(PromotionUuid::new(), &data)
            .await?;

        Ok(created)
    }

    async fn update_promotion(
        &self,
        promotion: PromotionUuid,
        patch: PromotionPatch,
    ) -> Result<PromotionRecord, PromotionsServiceError> {
        let existing = self.repository.get_promotion(promotion).await?;

        // Re-validate the merged state so a one-field patch cannot break the
        // date-order invariant.
        let data = validate(&patch.apply_to(&existing))?;

        let updated = self.repository.update_promotion(promotion, &data).await?;

        Ok(updated)
    }

    async fn delete_promotion(
        &self,
        promotion: PromotionUuid,
    ) -> Result<(), PromotionsServiceError> {
        let rows_affected = self.repository.delete_promotion(promotion).await?;

        if rows_affected == 0 {
            return Err(PromotionsServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait PromotionsService: Send + Sync {
    /// Retrieves all promotions, newest first.
    async fn list_promotions(&self) -> Result<Vec<PromotionRecord>, PromotionsServiceError>;

    /// Validates and stores a new promotion, assigning its identifier.
    async fn create_promotion(
        &self,
        draft: PromotionDraft,
    ) -> Result<PromotionRecord, PromotionsServiceError>;

    /// Merges a partial update over the stored promotion, re-validates the
    /// result, and stores it.
    async fn update_promotion(
        &self,
        promotion: PromotionUuid,
        patch: PromotionPatch,
    ) -> Result<PromotionRecord, PromotionsServiceError>;

    /// Hard-deletes a promotion.
    async fn delete_promotion(&self, promotion: PromotionUuid)
    -> Result<(), PromotionsServiceError>;
}
