use std::collections::BTreeMap;

use super::filter::{FilterSelection, FilteredView, filter};
use super::model::SalesDataset;

// ---------------------------------------------------------------------------
// Aggregate result
// ---------------------------------------------------------------------------

/// Summary statistics and grouped sums for one filtered view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateResult {
    /// Sum of `total` over the view; 0 when empty.
    pub total: f64,
    /// Mean rating; `None` when the view is empty.
    pub mean_rating: Option<f64>,
    /// Mean transaction value rounded to cents; `None` when the view is empty.
    pub mean_total: Option<f64>,
    /// Sales per product line, ascending by summed total.
    pub by_product_line: Vec<(String, f64)>,
    /// Sales per hour of day, ascending by hour. Hours without sales are absent.
    pub by_hour: Vec<(u8, f64)>,
    /// Number of transactions in the view.
    pub transactions: usize,
}

/// Compute the dashboard figures for `view`.
pub fn aggregate(view: &FilteredView<'_>) -> AggregateResult {
    let mut total = 0.0;
    let mut rating_sum = 0.0;
    let mut per_line: BTreeMap<&str, f64> = BTreeMap::new();
    let mut per_hour: BTreeMap<u8, f64> = BTreeMap::new();

    for rec in view.records() {
        total += rec.total;
        rating_sum += rec.rating;
        *per_line.entry(rec.product_line.as_str()).or_default() += rec.total;
        *per_hour.entry(rec.hour).or_default() += rec.total;
    }

    let transactions = view.len();
    let (mean_rating, mean_total) = if transactions == 0 {
        (None, None)
    } else {
        let n = transactions as f64;
        (Some(rating_sum / n), Some(round_to(total / n, 2)))
    };

    // Stable sort keeps the name order from the BTreeMap for equal sums.
    let mut by_product_line: Vec<(String, f64)> = per_line
        .into_iter()
        .map(|(line, sum)| (line.to_string(), sum))
        .collect();
    by_product_line.sort_by(|a, b| a.1.total_cmp(&b.1));

    AggregateResult {
        total,
        mean_rating,
        mean_total,
        by_product_line,
        by_hour: per_hour.into_iter().collect(),
        transactions,
    }
}

/// Filter then aggregate. Holds no state between calls.
pub fn recompute(dataset: &SalesDataset, selection: &FilterSelection) -> AggregateResult {
    aggregate(&filter(dataset, selection))
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
