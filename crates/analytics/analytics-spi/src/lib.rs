//! Analytics Service Provider Interface
//!
//! Defines the record model, derived view types, error types and the
//! contracts implemented by forecasting methods and dataset sources.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{ForecastMethod, MetricSource, RecordSource};
pub use error::{AnalyticsError, Result};
pub use model::{
    AnomalyPoint, ForecastPoint, Metric, MonthlyTotal, OverviewStats, Record, RegionFilter,
    RegionSummary, RegionTotals,
};
