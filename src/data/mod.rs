/// Data layer: records, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  supermarkt_sales.xlsx / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  sheet window → SalesDataset  (memoized by cache)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ SalesDataset  │  Vec<SalesRecord>, distinct values per dimension
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterSelection → FilteredView (record indices)
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  totals, means, grouped sums → charts
///   └───────────┘
/// ```

pub mod aggregate;
pub mod cache;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
