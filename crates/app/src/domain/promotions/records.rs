//! Promotion Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Promotion identifier, assigned by the persistence gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromotionUuid(Uuid);

impl PromotionUuid {
    /// Generates a fresh identifier. V7 uuids keep ids roughly in creation
    /// order.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for PromotionUuid {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for PromotionUuid {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for PromotionUuid {
    fn from(value: Uuid) -> Self {
        Self::from_uuid(value)
    }
}

impl From<PromotionUuid> for Uuid {
    fn from(value: PromotionUuid) -> Self {
        value.into_uuid()
    }
}

/// Promotion Record
///
/// A stored promotion. `created_at` and `updated_at` are maintained by the
/// persistence layer; `end_date >= start_date` holds for every stored record.
#[derive(Debug, Clone, PartialEq)]
pub struct PromotionRecord {
    pub uuid: PromotionUuid,
    pub name: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub budget: f64,
    pub expected_sales_impact: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
