//! Contract definitions for the analytics engine.
//!
//! This module contains trait definitions that providers must implement.

mod forecast_method;
mod metric_source;
mod record_source;

pub use forecast_method::ForecastMethod;
pub use metric_source::MetricSource;
pub use record_source::RecordSource;
