/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, derived scalars
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  query    │  filter/aggregate → chart builder inputs
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod query;
