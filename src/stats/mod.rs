//! Stats module - dataset summaries

mod summary;

pub use summary::{describe, ColumnSummary, StatsCalculator};
