//! Promotion wire models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use promotrack_app::domain::promotions::records::PromotionRecord;

/// A promotion as returned by every endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PromotionResponse {
    /// Server-assigned identifier
    pub id: Uuid,

    /// Promotion name
    pub name: String,

    /// ISO-8601 start of the promotion window
    pub start_date: String,

    /// ISO-8601 end of the promotion window
    pub end_date: String,

    /// Allocated budget
    pub budget: f64,

    /// Projected sales impact, if estimated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_sales_impact: Option<f64>,

    /// When the record was created
    pub created_at: String,

    /// When the record was last updated
    pub updated_at: String,
}

impl From<PromotionRecord> for PromotionResponse {
    fn from(promotion: PromotionRecord) -> Self {
        PromotionResponse {
            id: promotion.uuid.into(),
            name: promotion.name,
            start_date: promotion.start_date.to_string(),
            end_date: promotion.end_date.to_string(),
            budget: promotion.budget,
            expected_sales_impact: promotion.expected_sales_impact,
            created_at: promotion.created_at.to_string(),
            updated_at: promotion.updated_at.to_string(),
        }
    }
}
