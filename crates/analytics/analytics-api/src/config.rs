//! View build configuration.

use analytics_spi::{AnalyticsError, Metric, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HORIZON, DEFAULT_TOP_N};

/// Caller-supplied parameters for building the analytics views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Metrics to produce a top-N ranking for.
    pub metrics: Vec<Metric>,
    /// Number of regions kept in each ranking.
    pub top_n: usize,
    /// Number of future months to forecast.
    pub horizon: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            metrics: vec![
                Metric::TotalEnrolments,
                Metric::TotalDemographicUpdates,
                Metric::TotalBiometricUpdates,
            ],
            top_n: DEFAULT_TOP_N,
            horizon: DEFAULT_HORIZON,
        }
    }
}

impl ViewConfig {
    /// Create a new view configuration.
    pub fn new(metrics: Vec<Metric>, top_n: usize, horizon: usize) -> Self {
        Self {
            metrics,
            top_n,
            horizon,
        }
    }

    /// Start building a configuration from the defaults.
    pub fn builder() -> ViewConfigBuilder {
        ViewConfigBuilder::new()
    }

    /// Check the parameters before they reach the engine.
    pub fn validate(&self) -> Result<()> {
        if self.metrics.is_empty() {
            return Err(AnalyticsError::InvalidParameter {
                name: "metrics".to_string(),
                reason: "at least one metric is required".to_string(),
            });
        }
        if self.top_n == 0 {
            return Err(AnalyticsError::InvalidParameter {
                name: "top_n".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if self.horizon == 0 {
            return Err(AnalyticsError::InvalidParameter {
                name: "horizon".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for ViewConfig.
#[derive(Debug, Default)]
pub struct ViewConfigBuilder {
    metrics: Option<Vec<Metric>>,
    top_n: Option<usize>,
    horizon: Option<usize>,
}

impl ViewConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the ranking metrics.
    pub fn metrics(mut self, metrics: Vec<Metric>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Add one ranking metric. Duplicates are ignored.
    pub fn metric(mut self, metric: Metric) -> Self {
        let metrics = self.metrics.get_or_insert_with(Vec::new);
        if !metrics.contains(&metric) {
            metrics.push(metric);
        }
        self
    }

    /// Set the ranking size.
    pub fn top_n(mut self, top_n: usize) -> Self {
        self.top_n = Some(top_n);
        self
    }

    /// Set the forecast horizon.
    pub fn horizon(mut self, horizon: usize) -> Self {
        self.horizon = Some(horizon);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<ViewConfig> {
        let defaults = ViewConfig::default();
        let config = ViewConfig {
            metrics: self.metrics.unwrap_or(defaults.metrics),
            top_n: self.top_n.unwrap_or(defaults.top_n),
            horizon: self.horizon.unwrap_or(defaults.horizon),
        };
        config.validate()?;
        Ok(config)
    }
}
