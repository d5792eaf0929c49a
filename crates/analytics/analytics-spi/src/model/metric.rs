//! Metric selector over the numeric fields of a region summary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;

/// Numeric field of a [`RegionSummary`](super::RegionSummary) used for
/// ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    TotalEnrolments,
    TotalDemographicUpdates,
    TotalBiometricUpdates,
    DemoPerEnrol,
    BioPerEnrol,
}

impl Metric {
    /// Every metric, in declaration order.
    pub const ALL: [Metric; 5] = [
        Metric::TotalEnrolments,
        Metric::TotalDemographicUpdates,
        Metric::TotalBiometricUpdates,
        Metric::DemoPerEnrol,
        Metric::BioPerEnrol,
    ];

    /// Summary field name this metric reads.
    pub fn field_name(&self) -> &'static str {
        match self {
            Metric::TotalEnrolments => "total_enrolments",
            Metric::TotalDemographicUpdates => "total_demographic_updates",
            Metric::TotalBiometricUpdates => "total_biometric_updates",
            Metric::DemoPerEnrol => "demo_per_enrol",
            Metric::BioPerEnrol => "bio_per_enrol",
        }
    }

    /// Whether the metric is a count total rather than a ratio.
    pub fn is_total(&self) -> bool {
        matches!(
            self,
            Metric::TotalEnrolments | Metric::TotalDemographicUpdates | Metric::TotalBiometricUpdates
        )
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for Metric {
    type Err = AnalyticsError;

    /// Accepts summary field names and the short names used by the
    /// dashboard API (`total_enrol`, `total_demo_updates`,
    /// `total_bio_updates`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "total_enrolments" | "total_enrol" => Ok(Metric::TotalEnrolments),
            "total_demographic_updates" | "total_demo_updates" => {
                Ok(Metric::TotalDemographicUpdates)
            }
            "total_biometric_updates" | "total_bio_updates" => Ok(Metric::TotalBiometricUpdates),
            "demo_per_enrol" => Ok(Metric::DemoPerEnrol),
            "bio_per_enrol" => Ok(Metric::BioPerEnrol),
            _ => Err(AnalyticsError::UnknownMetric(s.to_string())),
        }
    }
}
