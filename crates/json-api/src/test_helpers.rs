//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use promotrack_app::domain::promotions::{
    MockPromotionsService,
    records::{PromotionRecord, PromotionUuid},
};

use crate::state::State;

pub(crate) fn make_promotion(uuid: PromotionUuid) -> PromotionRecord {
    PromotionRecord {
        uuid,
        name: "Spring Sale".to_owned(),
        start_date: Timestamp::UNIX_EPOCH,
        end_date: Timestamp::UNIX_EPOCH,
        budget: 1_000.0,
        expected_sales_impact: Some(2_500.0),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn state_with_promotions(promotions: MockPromotionsService) -> Arc<State> {
    Arc::new(State::new(Arc::new(promotions)))
}

pub(crate) fn promotions_service(promotions: MockPromotionsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_promotions(promotions)))
            .push(route),
    )
}
