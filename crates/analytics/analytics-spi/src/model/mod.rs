//! Data models for the analytics engine.
//!
//! Raw input records and the derived views computed from them.

mod anomaly_point;
mod forecast_point;
mod metric;
mod monthly_total;
mod overview;
mod record;
mod region_summary;

pub use anomaly_point::AnomalyPoint;
pub use forecast_point::ForecastPoint;
pub use metric::Metric;
pub use monthly_total::MonthlyTotal;
pub use overview::{OverviewStats, RegionFilter, RegionTotals};
pub use record::Record;
pub use region_summary::RegionSummary;
