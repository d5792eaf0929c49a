//! Analytics error types.

use thiserror::Error;

/// Errors raised by the analytics engine.
///
/// `MalformedRecord`, `MalformedSeries`, `CountOverflow` and
/// `PeriodOverflow` describe bad input data and are reported by
/// [`AnalyticsError::is_data_shape`]. The remaining variants signal misuse
/// of the API by the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    /// A record failed validation at the aggregation boundary.
    #[error("Malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    /// A monthly series point cannot be used for forecasting.
    #[error("Malformed series point '{month}': {reason}")]
    MalformedSeries { month: String, reason: String },

    /// Summing counts for a region exceeded the representable range.
    #[error("Count overflow while aggregating region '{region}'")]
    CountOverflow { region: String },

    /// Summing enrolments for a period exceeded the representable range.
    #[error("Count overflow while totalling period '{period}'")]
    PeriodOverflow { period: String },

    /// Metric selector text did not name a summary field.
    #[error("Unknown metric '{0}'")]
    UnknownMetric(String),

    /// Invalid configuration value.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A forecast method was asked to predict before fitting.
    #[error("Forecast method must be fitted before prediction")]
    NotFitted,

    /// A forecast method was fitted on too short a history.
    #[error("Insufficient history: need at least {required} values, got {got}")]
    InsufficientHistory { required: usize, got: usize },
}

impl AnalyticsError {
    /// Returns `true` for errors caused by the shape of the input dataset.
    pub fn is_data_shape(&self) -> bool {
        matches!(
            self,
            AnalyticsError::MalformedRecord { .. }
                | AnalyticsError::MalformedSeries { .. }
                | AnalyticsError::CountOverflow { .. }
                | AnalyticsError::PeriodOverflow { .. }
        )
    }
}

/// Result type for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;
