//! Analytics Core
//!
//! Implementations of the analytics engine: aggregation, ranking, anomaly
//! classification, forecasting, and the view builder that composes them.
//! Every function is a pure transform of its inputs.

pub mod aggregator;
pub mod classifier;
pub mod forecaster;
pub mod query;
pub mod ranker;
pub mod views;

// Re-export SPI types for implementations
pub use analytics_spi::{
    AnalyticsError, AnomalyPoint, ForecastMethod, ForecastPoint, Metric, MetricSource,
    MonthlyTotal, OverviewStats, Record, RegionFilter, RegionSummary, RegionTotals, Result,
};

// Re-export main entry points
pub use aggregator::{aggregate, group_by_period_totals};
pub use classifier::{anomaly_count, classify, is_anomalous, top_by_bio_ratio, top_by_demo_ratio};
pub use forecaster::{forecast, LinearTrend, TrailingMean};
pub use query::{overview_stats, region_totals};
pub use ranker::top_n;
pub use views::{build_views, build_views_with, AnalyticsViews};
