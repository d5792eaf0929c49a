//! Dataset-wide totals and the region filter used by dashboard queries.

use serde::{Deserialize, Serialize};

/// Grand totals over every region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewStats {
    pub total_regions: usize,
    pub total_enrolments: u64,
    pub total_demographic_updates: u64,
    pub total_biometric_updates: u64,
}

/// Count totals for a filtered selection of regions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionTotals {
    pub total_enrolments: u64,
    pub total_demographic_updates: u64,
    pub total_biometric_updates: u64,
}

/// Selection of one region, or of all of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionFilter {
    All,
    Region(String),
}

impl RegionFilter {
    /// Parse a selector value. `"ALL"` in any case selects every region;
    /// anything else names a single region.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("all") {
            RegionFilter::All
        } else {
            RegionFilter::Region(value.to_string())
        }
    }
}

impl Default for RegionFilter {
    fn default() -> Self {
        RegionFilter::All
    }
}
