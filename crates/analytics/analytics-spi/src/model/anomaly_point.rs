//! Region summary labelled with the anomaly rule outcome.

use serde::{Deserialize, Serialize};

use super::RegionSummary;

/// A [`RegionSummary`] together with its anomaly label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyPoint {
    #[serde(flatten)]
    pub summary: RegionSummary,
    pub is_anomaly: bool,
}

impl AnomalyPoint {
    /// Create a new anomaly point.
    pub fn new(summary: RegionSummary, is_anomaly: bool) -> Self {
        Self {
            summary,
            is_anomaly,
        }
    }

    /// Region name of the underlying summary.
    pub fn region(&self) -> &str {
        &self.summary.region
    }
}
