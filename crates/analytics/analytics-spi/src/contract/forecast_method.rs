//! Forecast method trait definition.

use crate::error::Result;

/// A point-forecasting method over an ordered series of totals.
///
/// Implementations treat the zero-based position of each value as its time
/// index, so every method agrees on where the series ends.
pub trait ForecastMethod: Send + Sync {
    /// Short identifier of the method.
    fn name(&self) -> &'static str;

    /// Fit the method to the historical series.
    ///
    /// Fails with `InsufficientHistory` when the series is shorter than the
    /// method needs; the method is then left unfitted.
    fn fit(&mut self, history: &[f64]) -> Result<()>;

    /// Predict the next `horizon` values following the fitted history.
    fn predict(&self, horizon: usize) -> Result<Vec<f64>>;

    /// Check if the method has been fitted.
    fn is_fitted(&self) -> bool;
}
