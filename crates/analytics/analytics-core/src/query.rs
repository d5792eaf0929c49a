//! Dashboard queries over already-computed region summaries.

use std::collections::BTreeMap;

use analytics_spi::{OverviewStats, RegionFilter, RegionSummary, RegionTotals};

/// Region count and grand totals across every summary.
///
/// Totals saturate rather than wrap; they are display figures.
pub fn overview_stats(summaries: &BTreeMap<String, RegionSummary>) -> OverviewStats {
    let totals = sum_totals(summaries.values());
    OverviewStats {
        total_regions: summaries.len(),
        total_enrolments: totals.total_enrolments,
        total_demographic_updates: totals.total_demographic_updates,
        total_biometric_updates: totals.total_biometric_updates,
    }
}

/// Totals for the selected region, or for every region under
/// [`RegionFilter::All`]. An unknown region yields zero totals.
pub fn region_totals(
    summaries: &BTreeMap<String, RegionSummary>,
    filter: &RegionFilter,
) -> RegionTotals {
    match filter {
        RegionFilter::All => sum_totals(summaries.values()),
        RegionFilter::Region(name) => summaries
            .get(name)
            .map(|s| RegionTotals {
                total_enrolments: s.total_enrolments,
                total_demographic_updates: s.total_demographic_updates,
                total_biometric_updates: s.total_biometric_updates,
            })
            .unwrap_or_default(),
    }
}

fn sum_totals<'a>(summaries: impl Iterator<Item = &'a RegionSummary>) -> RegionTotals {
    summaries.fold(RegionTotals::default(), |acc, s| RegionTotals {
        total_enrolments: acc.total_enrolments.saturating_add(s.total_enrolments),
        total_demographic_updates: acc
            .total_demographic_updates
            .saturating_add(s.total_demographic_updates),
        total_biometric_updates: acc
            .total_biometric_updates
            .saturating_add(s.total_biometric_updates),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summaries() -> BTreeMap<String, RegionSummary> {
        [
            RegionSummary::from_totals("GOA", 10, 20, 30),
            RegionSummary::from_totals("PUNJAB", 100, 200, 300),
        ]
        .into_iter()
        .map(|s| (s.region.clone(), s))
        .collect()
    }

    #[test]
    fn test_overview_stats() {
        let stats = overview_stats(&summaries());
        assert_eq!(
            stats,
            OverviewStats {
                total_regions: 2,
                total_enrolments: 110,
                total_demographic_updates: 220,
                total_biometric_updates: 330,
            }
        );
    }

    #[test]
    fn test_overview_of_empty_dataset() {
        assert_eq!(overview_stats(&BTreeMap::new()), OverviewStats::default());
    }

    #[test]
    fn test_all_filter_sums_regions() {
        let totals = region_totals(&summaries(), &RegionFilter::All);
        assert_eq!(totals.total_enrolments, 110);
        assert_eq!(totals.total_biometric_updates, 330);
    }

    #[test]
    fn test_single_region_filter() {
        let totals = region_totals(&summaries(), &RegionFilter::parse("GOA"));
        assert_eq!(
            totals,
            RegionTotals {
                total_enrolments: 10,
                total_demographic_updates: 20,
                total_biometric_updates: 30,
            }
        );
    }

    #[test]
    fn test_unknown_region_gives_zero_totals() {
        let totals = region_totals(&summaries(), &RegionFilter::parse("ATLANTIS"));
        assert_eq!(totals, RegionTotals::default());
    }
}
