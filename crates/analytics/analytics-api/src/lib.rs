//! Analytics API
//!
//! Domain constants and view configuration for the analytics engine.
//!
//! This crate provides:
//! - The fixed anomaly thresholds and forecast window
//! - `ViewConfig` and its builder, the caller-supplied parameters of a view build
//! - Re-exports from SPI for convenience

pub mod config;
pub mod constants;

// Re-export SPI types
pub use analytics_spi::{
    AnalyticsError, AnomalyPoint, ForecastMethod, ForecastPoint, Metric, MetricSource,
    MonthlyTotal, OverviewStats, Record, RecordSource, RegionFilter, RegionSummary, RegionTotals,
    Result,
};

pub use config::{ViewConfig, ViewConfigBuilder};
pub use constants::{
    BIO_PER_ENROL_THRESHOLD, DEFAULT_HORIZON, DEFAULT_TOP_N, DEMO_PER_ENROL_THRESHOLD,
    MIN_FORECAST_HISTORY, MOVING_AVERAGE_WINDOW,
};
