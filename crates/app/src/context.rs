//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database,
    domain::promotions::{PgPromotionsService, PromotionsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub promotions: Arc<dyn PromotionsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting to the database or applying
    /// migrations fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url).await.map_err(AppInitError::Database)?;

        database::run_migrations(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        Ok(Self {
            promotions: Arc::new(PgPromotionsService::new(pool)),
        })
    }
}
