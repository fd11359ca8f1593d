//! Client-side promotions store.
//!
//! One cached list of records, a fetch status, and the current date-range
//! filter. Every operation returns a new store value instead of mutating in
//! place, keeping concurrent re-renders easy to reason about.

use jiff::Timestamp;

use crate::client::api::Promotion;
use crate::domain::promotions::records::PromotionUuid;

/// Lifecycle of the list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Date-range filter over the cached list. Both bounds unset means "no
/// filter"; a single unset bound defaults to the earliest/latest
/// representable instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateFilter {
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
}

impl DateFilter {
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }

    /// Whether a promotion passes the filter: its start falls in the filter
    /// range, or its end does, or its span fully contains the range.
    #[must_use]
    pub fn matches(&self, promotion: &Promotion) -> bool {
        if self.is_unset() {
            return true;
        }

        let filter_start = self.start_date.unwrap_or(Timestamp::MIN);
        let filter_end = self.end_date.unwrap_or(Timestamp::MAX);

        let start = promotion.start_date;
        let end = promotion.end_date;

        (start >= filter_start && start <= filter_end)
            || (end >= filter_start && end <= filter_end)
            || (start <= filter_start && end >= filter_end)
    }
}

/// The cached promotion list and its fetch/filter state.
#[derive(Debug, Clone, Default)]
pub struct PromotionsStore {
    items: Vec<Promotion>,
    status: FetchStatus,
    error: Option<String>,
    filter: DateFilter,
}

impl PromotionsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn items(&self) -> &[Promotion] {
        &self.items
    }

    #[must_use]
    pub fn status(&self) -> FetchStatus {
        self.status
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn filter(&self) -> DateFilter {
        self.filter
    }

    /// The cached records that pass the current filter, in cache order.
    #[must_use]
    pub fn filtered_items(&self) -> Vec<&Promotion> {
        self.items
            .iter()
            .filter(|promotion| self.filter.matches(promotion))
            .collect()
    }

    /// A fetch is in flight.
    #[must_use]
    pub fn fetch_pending(&self) -> Self {
        Self {
            items: self.items.clone(),
            status: FetchStatus::Loading,
            error: None,
            filter: self.filter,
        }
    }

    /// The fetch succeeded: the cache is replaced wholesale.
    #[must_use]
    pub fn fetch_fulfilled(&self, items: Vec<Promotion>) -> Self {
        Self {
            items,
            status: FetchStatus::Succeeded,
            error: None,
            filter: self.filter,
        }
    }

    /// The fetch failed: the cache is kept, the error recorded.
    #[must_use]
    pub fn fetch_rejected(&self, error: impl Into<String>) -> Self {
        Self {
            items: self.items.clone(),
            status: FetchStatus::Failed,
            error: Some(error.into()),
            filter: self.filter,
        }
    }

    /// Appends a server-confirmed record.
    #[must_use]
    pub fn promotion_added(&self, promotion: Promotion) -> Self {
        let mut items = self.items.clone();

        items.push(promotion);

        Self {
            items,
            status: self.status,
            error: self.error.clone(),
            filter: self.filter,
        }
    }

    /// Replaces the cached record with the same identifier. No-op when the
    /// record is not cached.
    #[must_use]
    pub fn promotion_updated(&self, promotion: Promotion) -> Self {
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == promotion.id {
                    promotion.clone()
                } else {
                    item.clone()
                }
            })
            .collect();

        Self {
            items,
            status: self.status,
            error: self.error.clone(),
            filter: self.filter,
        }
    }

    /// Removes the cached record with the given identifier.
    #[must_use]
    pub fn promotion_deleted(&self, promotion: PromotionUuid) -> Self {
        let items = self
            .items
            .iter()
            .filter(|item| item.id != promotion)
            .cloned()
            .collect();

        Self {
            items,
            status: self.status,
            error: self.error.clone(),
            filter: self.filter,
        }
    }

    /// Replaces the date filter. Filtering never touches the cached list.
    #[must_use]
    pub fn with_date_filter(&self, filter: DateFilter) -> Self {
        Self {
            items: self.items.clone(),
            status: self.status,
            error: self.error.clone(),
            filter,
        }
    }

    /// Clears the date filter.
    #[must_use]
    pub fn without_date_filter(&self) -> Self {
        self.with_date_filter(DateFilter::default())
    }
}
