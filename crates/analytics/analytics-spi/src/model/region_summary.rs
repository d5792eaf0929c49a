//! Per-region aggregate totals and update ratios.

use serde::{Deserialize, Serialize};

/// Totals for one region across every period, with update-per-enrolment
/// ratios.
///
/// Ratios are `0.0` when the region has no enrolments, so they are always
/// finite and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub region: String,
    pub total_enrolments: u64,
    pub total_demographic_updates: u64,
    pub total_biometric_updates: u64,
    /// `total_demographic_updates / total_enrolments`.
    pub demo_per_enrol: f64,
    /// `total_biometric_updates / total_enrolments`.
    pub bio_per_enrol: f64,
}

impl RegionSummary {
    /// Build a summary from totals, deriving both ratios.
    pub fn from_totals(
        region: impl Into<String>,
        total_enrolments: u64,
        total_demographic_updates: u64,
        total_biometric_updates: u64,
    ) -> Self {
        Self {
            region: region.into(),
            total_enrolments,
            total_demographic_updates,
            total_biometric_updates,
            demo_per_enrol: ratio(total_demographic_updates, total_enrolments),
            bio_per_enrol: ratio(total_biometric_updates, total_enrolments),
        }
    }
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratios_derived_from_totals() {
        let summary = RegionSummary::from_totals("BIHAR", 100, 2_500, 400);
        assert_eq!(summary.demo_per_enrol, 25.0);
        assert_eq!(summary.bio_per_enrol, 4.0);
    }

    #[test]
    fn test_zero_enrolments_yield_zero_ratios() {
        let summary = RegionSummary::from_totals("LADAKH", 0, 90, 12);
        assert_eq!(summary.demo_per_enrol, 0.0);
        assert_eq!(summary.bio_per_enrol, 0.0);
        assert!(summary.demo_per_enrol.is_finite());
    }
}
