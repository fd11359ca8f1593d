//! State

use std::sync::Arc;

use promotrack_app::{context::AppContext, domain::promotions::PromotionsService};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) promotions: Arc<dyn PromotionsService>,
}

impl State {
    #[must_use]
    pub(crate) fn new(promotions: Arc<dyn PromotionsService>) -> Self {
        Self { promotions }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app.promotions))
    }
}
