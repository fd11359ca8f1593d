//! Client-side data layer for the promotions dashboard.
//!
//! Mirrors the server's REST surface: [`api::PromotionsApi`] issues the four
//! HTTP calls, [`store::PromotionsStore`] caches the results, and
//! [`dashboard`] derives summary statistics, the date-range filter, and
//! column sorting from the cached list. [`PromotionsClient`] ties the three
//! together: each call reconciles the server response into a new store
//! value.
//!
//! Client-side form validation reuses
//! [`crate::domain::promotions::validate`]; the gateway re-validates
//! regardless.

pub mod api;
pub mod dashboard;
pub mod store;

use crate::client::{
    api::{ApiClientError, Promotion, PromotionPayload, PromotionsApi},
    store::{DateFilter, PromotionsStore},
};
use crate::domain::promotions::records::PromotionUuid;

/// Issues API calls and reconciles their results into the store.
#[derive(Debug)]
pub struct PromotionsClient {
    api: PromotionsApi,
    store: PromotionsStore,
}

impl PromotionsClient {
    #[must_use]
    pub fn new(api: PromotionsApi) -> Self {
        Self {
            api,
            store: PromotionsStore::new(),
        }
    }

    #[must_use]
    pub fn store(&self) -> &PromotionsStore {
        &self.store
    }

    /// Fetches the full list, replacing the cache.
    ///
    /// # Errors
    ///
    /// Returns the API error after recording the failure in the store.
    pub async fn refresh(&mut self) -> Result<(), ApiClientError> {
        self.store = self.store.fetch_pending();

        match self.api.fetch_promotions().await {
            Ok(promotions) => {
                self.store = self.store.fetch_fulfilled(promotions);

                Ok(())
            }
            Err(error) => {
                self.store = self.store.fetch_rejected(error.to_string());

                Err(error)
            }
        }
    }

    /// Creates a promotion and appends the server-returned record to the
    /// cache. Nothing is inserted before the server confirms.
    ///
    /// # Errors
    ///
    /// Returns the API error; the cache is left untouched on failure.
    pub async fn add(&mut self, payload: &PromotionPayload) -> Result<Promotion, ApiClientError> {
        let created = self.api.create_promotion(payload).await?;

        self.store = self.store.promotion_added(created.clone());

        Ok(created)
    }

    /// Updates a promotion and replaces the cached record by identifier.
    ///
    /// # Errors
    ///
    /// Returns the API error; the cache is left untouched on failure.
    pub async fn update(
        &mut self,
        promotion: PromotionUuid,
        payload: &PromotionPayload,
    ) -> Result<Promotion, ApiClientError> {
        let updated = self.api.update_promotion(promotion, payload).await?;

        self.store = self.store.promotion_updated(updated.clone());

        Ok(updated)
    }

    /// Deletes a promotion and removes the cached record by identifier.
    ///
    /// # Errors
    ///
    /// Returns the API error; the cache is left untouched on failure.
    pub async fn remove(&mut self, promotion: PromotionUuid) -> Result<(), ApiClientError> {
        self.api.delete_promotion(promotion).await?;

        self.store = self.store.promotion_deleted(promotion);

        Ok(())
    }

    /// Sets the date-range filter. Pure client-side state; does not trigger
    /// a re-fetch.
    pub fn set_date_filter(&mut self, filter: DateFilter) {
        self.store = self.store.with_date_filter(filter);
    }

    /// Clears the date-range filter.
    pub fn clear_date_filter(&mut self) {
        self.store = self.store.without_date_filter();
    }
}
