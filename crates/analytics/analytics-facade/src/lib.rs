//! Analytics Facade
//!
//! Unified re-exports for the analytics engine.
//!
//! This facade provides a single entry point to all analytics functionality:
//! - Record model, view types, `ForecastMethod` and `RecordSource` from SPI
//! - Domain constants and `ViewConfig` from API
//! - Aggregation, ranking, classification, forecasting and `build_views` from Core

// Re-export everything from SPI
pub use analytics_spi::*;

// Re-export everything from API
pub use analytics_api::*;

// Re-export everything from Core
pub use analytics_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use analytics_api::{ViewConfig, ViewConfigBuilder};
    pub use analytics_core::{
        aggregate, build_views, build_views_with, classify, forecast, group_by_period_totals,
        overview_stats, region_totals, top_n, AnalyticsViews,
    };
    pub use analytics_spi::{
        AnalyticsError, AnomalyPoint, ForecastMethod, ForecastPoint, Metric, MetricSource,
        MonthlyTotal, OverviewStats, Record, RecordSource, RegionFilter, RegionSummary,
        RegionTotals, Result,
    };
}
