//! Dashboard computations.
//!
//! Pure functions over the cached list: summary aggregates and column
//! sorting. Recomputed on every render; nothing here holds state.

use std::cmp::Ordering;

use crate::client::api::Promotion;

/// The three summary cards.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_promotions: usize,
    pub total_budget: f64,
    /// Mean of `expected_sales_impact` over the records that define it.
    /// Records without a value are excluded from numerator and denominator.
    pub average_sales_impact: f64,
}

impl DashboardSummary {
    #[must_use]
    pub fn compute(promotions: &[Promotion]) -> Self {
        let total_budget = promotions.iter().map(|promotion| promotion.budget).sum();

        let impacts: Vec<f64> = promotions
            .iter()
            .filter_map(|promotion| promotion.expected_sales_impact)
            .collect();

        let average_sales_impact = if impacts.is_empty() {
            0.0
        } else {
            #[expect(
                clippy::cast_precision_loss,
                reason = "promotion counts stay far below 2^52"
            )]
            let count = impacts.len() as f64;

            impacts.iter().sum::<f64>() / count
        };

        Self {
            total_promotions: promotions.len(),
            total_budget,
            average_sales_impact,
        }
    }
}

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    StartDate,
    EndDate,
    Budget,
    ExpectedSalesImpact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Returns a sorted copy; the input list (the cache) is never mutated.
/// Records without a sales impact sort before records with one.
#[must_use]
pub fn sorted_by(
    promotions: &[Promotion],
    column: SortColumn,
    direction: SortDirection,
) -> Vec<Promotion> {
    let mut sorted = promotions.to_vec();

    sorted.sort_by(|a, b| {
        let ordering = match column {
            SortColumn::Name => a.name.cmp(&b.name),
            SortColumn::StartDate => a.start_date.cmp(&b.start_date),
            SortColumn::EndDate => a.end_date.cmp(&b.end_date),
            SortColumn::Budget => a.budget.total_cmp(&b.budget),
            SortColumn::ExpectedSalesImpact => {
                match (a.expected_sales_impact, b.expected_sales_impact) {
                    (Some(left), Some(right)) => left.total_cmp(&right),
                    (Some(_), None) => Ordering::Greater,
                    (None, Some(_)) => Ordering::Less,
                    (None, None) => Ordering::Equal,
                }
            }
        };

        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    sorted
}
