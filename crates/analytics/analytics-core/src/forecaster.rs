//! Short-horizon forecasting of the monthly enrolment total.
//!
//! Two independent methods run over the same history:
//!
//! - [`LinearTrend`]: ordinary least squares fit of `y = intercept + slope * t`
//!   where `t` is the zero-based position in the series.
//! - [`TrailingMean`]: mean of the last [`MOVING_AVERAGE_WINDOW`] values,
//!   repeated for every future period.
//!
//! Neither method feeds the other; [`forecast`] pairs their predictions per
//! future period so they can be compared.

use analytics_api::{MIN_FORECAST_HISTORY, MOVING_AVERAGE_WINDOW};
use analytics_spi::{AnalyticsError, ForecastMethod, ForecastPoint, MonthlyTotal, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Linear Trend
// ============================================================================

/// Least-squares linear trend over the series position.
///
/// Predictions are floored at zero since the series counts enrolments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinearTrend {
    /// Y-intercept
    intercept: f64,
    /// Slope (change per month)
    slope: f64,
    /// Number of observations used in fitting
    n_observations: usize,
    fitted: bool,
}

impl LinearTrend {
    /// Create an unfitted trend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the slope (change per month)
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Get the intercept
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Unfloored trend value at series position `t`.
    pub fn value_at(&self, t: f64) -> Result<f64> {
        if !self.fitted {
            return Err(AnalyticsError::NotFitted);
        }
        Ok(self.intercept + self.slope * t)
    }
}

impl ForecastMethod for LinearTrend {
    fn name(&self) -> &'static str {
        "linear_regression"
    }

    fn fit(&mut self, history: &[f64]) -> Result<()> {
        if history.is_empty() {
            return Err(AnalyticsError::InsufficientHistory {
                required: 1,
                got: 0,
            });
        }

        let n = history.len() as f64;
        let sum_x: f64 = (0..history.len()).map(|i| i as f64).sum();
        let sum_y: f64 = history.iter().sum();
        let sum_x2: f64 = (0..history.len()).map(|i| (i * i) as f64).sum();
        let sum_xy: f64 = history.iter().enumerate().map(|(i, &y)| i as f64 * y).sum();

        // A single observation has no spread in x: treat it as no trend.
        let denominator = n * sum_x2 - sum_x * sum_x;
        self.slope = if denominator == 0.0 {
            0.0
        } else {
            (n * sum_xy - sum_x * sum_y) / denominator
        };
        self.intercept = (sum_y - self.slope * sum_x) / n;
        self.n_observations = history.len();
        self.fitted = true;
        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(AnalyticsError::NotFitted);
        }
        (1..=horizon)
            .map(|i| {
                let t = (self.n_observations + i - 1) as f64;
                self.value_at(t).map(|v| v.max(0.0))
            })
            .collect()
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

// ============================================================================
// Trailing Mean
// ============================================================================

/// Mean of the most recent values, held flat across the horizon.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrailingMean {
    level: f64,
    fitted: bool,
}

impl TrailingMean {
    /// Create an unfitted trailing mean.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fitted mean level.
    pub fn level(&self) -> f64 {
        self.level
    }
}

impl ForecastMethod for TrailingMean {
    fn name(&self) -> &'static str {
        "moving_average"
    }

    fn fit(&mut self, history: &[f64]) -> Result<()> {
        if history.len() < MOVING_AVERAGE_WINDOW {
            return Err(AnalyticsError::InsufficientHistory {
                required: MOVING_AVERAGE_WINDOW,
                got: history.len(),
            });
        }
        let window = &history[history.len() - MOVING_AVERAGE_WINDOW..];
        self.level = window.iter().sum::<f64>() / MOVING_AVERAGE_WINDOW as f64;
        self.fitted = true;
        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(AnalyticsError::NotFitted);
        }
        Ok(vec![self.level; horizon])
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

// ============================================================================
// Forecast
// ============================================================================

/// Forecast the next `horizon` months with both methods.
///
/// Returns an empty vector when the series has fewer than
/// [`MIN_FORECAST_HISTORY`] points; that is "no forecast", not an error.
///
/// # Errors
///
/// `MalformedSeries` if any total is negative or not finite.
///
/// # Panics
///
/// Panics if `horizon` is zero.
pub fn forecast(series: &[MonthlyTotal], horizon: usize) -> Result<Vec<ForecastPoint>> {
    assert!(horizon > 0, "forecast horizon must be positive");

    let history = validated_history(series)?;
    if history.len() < MIN_FORECAST_HISTORY {
        return Ok(Vec::new());
    }

    let mut linear = LinearTrend::new();
    linear.fit(&history)?;
    let mut moving = TrailingMean::new();
    moving.fit(&history)?;

    let linear_predictions = linear.predict(horizon)?;
    let moving_predictions = moving.predict(horizon)?;

    Ok(linear_predictions
        .into_iter()
        .zip(moving_predictions)
        .enumerate()
        .map(|(i, (lr, ma))| ForecastPoint::at_offset(i + 1, lr, ma))
        .collect())
}

fn validated_history(series: &[MonthlyTotal]) -> Result<Vec<f64>> {
    series
        .iter()
        .map(|point| {
            let value = point.total_enrol;
            if !value.is_finite() {
                Err(AnalyticsError::MalformedSeries {
                    month: point.month.clone(),
                    reason: format!("total {} is not finite", value),
                })
            } else if value < 0.0 {
                Err(AnalyticsError::MalformedSeries {
                    month: point.month.clone(),
                    reason: format!("total {} is negative", value),
                })
            } else {
                Ok(value)
            }
        })
        .collect()
}
