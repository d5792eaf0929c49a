//! Forecast output for one future period.

use serde::{Deserialize, Serialize};

/// Predictions from both forecasting methods for a single future period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Label of the future period, `"Forecast +1"`, `"Forecast +2"`, ...
    pub period_label: String,
    /// Least-squares trend prediction, floored at zero.
    pub linear_regression: f64,
    /// Trailing moving-average prediction.
    pub moving_average: f64,
}

impl ForecastPoint {
    /// Create a point for the 1-based future `offset`.
    pub fn at_offset(offset: usize, linear_regression: f64, moving_average: f64) -> Self {
        Self {
            period_label: format!("Forecast +{}", offset),
            linear_regression,
            moving_average,
        }
    }
}
