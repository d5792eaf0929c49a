//! Reduction of raw records into per-region and per-month totals.

use std::collections::{BTreeMap, HashMap};

use analytics_spi::{AnalyticsError, MonthlyTotal, Record, RegionSummary, Result};

#[derive(Debug, Default, Clone, Copy)]
struct Totals {
    enrolments: u64,
    demographic_updates: u64,
    biometric_updates: u64,
}

impl Totals {
    fn add(&mut self, record: &Record) -> Result<()> {
        let overflow = || AnalyticsError::CountOverflow {
            region: record.region.clone(),
        };
        self.enrolments = self
            .enrolments
            .checked_add(record.enrolments)
            .ok_or_else(overflow)?;
        self.demographic_updates = self
            .demographic_updates
            .checked_add(record.demographic_updates)
            .ok_or_else(overflow)?;
        self.biometric_updates = self
            .biometric_updates
            .checked_add(record.biometric_updates)
            .ok_or_else(overflow)?;
        Ok(())
    }
}

/// Sum every record's counts per region and derive the update ratios.
///
/// Regions are keyed by name, so the mapping iterates in a stable order
/// regardless of the input order. Empty input yields an empty mapping.
///
/// # Errors
///
/// `MalformedRecord` for a record with a blank region or period, and
/// `CountOverflow` when a region's total no longer fits in a `u64`.
pub fn aggregate(records: &[Record]) -> Result<BTreeMap<String, RegionSummary>> {
    let mut totals: BTreeMap<&str, Totals> = BTreeMap::new();

    for (index, record) in records.iter().enumerate() {
        record.validate(index)?;
        totals.entry(record.region.as_str()).or_default().add(record)?;
    }

    let summaries = totals
        .into_iter()
        .map(|(region, t)| {
            if t.enrolments == 0 {
                tracing::debug!(region, "region has no enrolments, ratios set to 0");
            }
            let summary = RegionSummary::from_totals(
                region,
                t.enrolments,
                t.demographic_updates,
                t.biometric_updates,
            );
            (region.to_string(), summary)
        })
        .collect();

    Ok(summaries)
}

/// Total enrolments per period, in the order each period first appears in
/// the input. Periods are opaque keys and are never re-sorted.
///
/// # Errors
///
/// `MalformedRecord` for a record with a blank region or period, and
/// `PeriodOverflow` when a month's total no longer fits in a `u64`.
pub fn group_by_period_totals(records: &[Record]) -> Result<Vec<MonthlyTotal>> {
    let mut order: Vec<(&str, u64)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for (index, record) in records.iter().enumerate() {
        record.validate(index)?;
        let slot = *positions.entry(record.period.as_str()).or_insert_with(|| {
            order.push((record.period.as_str(), 0));
            order.len() - 1
        });
        let total = &mut order[slot].1;
        *total = total
            .checked_add(record.enrolments)
            .ok_or_else(|| AnalyticsError::PeriodOverflow {
                period: record.period.clone(),
            })?;
    }

    Ok(order
        .into_iter()
        .map(|(month, total)| MonthlyTotal::new(month, total as f64))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<Record> {
        vec![
            Record::new("KERALA", "2025-01", 100, 500, 900),
            Record::new("BIHAR", "2025-01", 400, 800, 1_200),
            Record::new("KERALA", "2025-02", 100, 1_500, 300),
            Record::new("BIHAR", "2025-02", 600, 200, 800),
        ]
    }

    #[test]
    fn test_empty_input_gives_empty_mapping() {
        let summaries = aggregate(&[]).unwrap();
        assert!(summaries.is_empty());
    }

    #[test]
    fn test_totals_summed_per_region() {
        let summaries = aggregate(&sample_records()).unwrap();
        assert_eq!(summaries.len(), 2);

        let kerala = &summaries["KERALA"];
        assert_eq!(kerala.total_enrolments, 200);
        assert_eq!(kerala.total_demographic_updates, 2_000);
        assert_eq!(kerala.total_biometric_updates, 1_200);
        assert_eq!(kerala.demo_per_enrol, 10.0);
        assert_eq!(kerala.bio_per_enrol, 6.0);

        let bihar = &summaries["BIHAR"];
        assert_eq!(bihar.total_enrolments, 1_000);
        assert_eq!(bihar.demo_per_enrol, 1.0);
        assert_eq!(bihar.bio_per_enrol, 2.0);
    }

    #[test]
    fn test_order_does_not_affect_result() {
        let records = sample_records();
        let mut reversed = records.clone();
        reversed.reverse();
        assert_eq!(aggregate(&records).unwrap(), aggregate(&reversed).unwrap());
    }

    #[test]
    fn test_zero_enrolment_region_has_zero_ratios() {
        let records = vec![Record::new("LAKSHADWEEP", "2025-01", 0, 35, 80)];
        let summaries = aggregate(&records).unwrap();
        let summary = &summaries["LAKSHADWEEP"];
        assert_eq!(summary.demo_per_enrol, 0.0);
        assert_eq!(summary.bio_per_enrol, 0.0);
    }

    #[test]
    fn test_malformed_record_rejected_with_index() {
        let mut records = sample_records();
        records.push(Record::new("", "2025-03", 1, 1, 1));
        let err = aggregate(&records).unwrap_err();
        assert!(matches!(err, AnalyticsError::MalformedRecord { index: 4, .. }));
    }

    #[test]
    fn test_overflow_rejected() {
        let records = vec![
            Record::new("GOA", "2025-01", u64::MAX, 0, 0),
            Record::new("GOA", "2025-02", 1, 0, 0),
        ];
        assert_eq!(
            aggregate(&records),
            Err(AnalyticsError::CountOverflow {
                region: "GOA".to_string()
            })
        );
    }

    #[test]
    fn test_monthly_totals_keep_first_appearance_order() {
        let records = vec![
            Record::new("GOA", "2025-03", 5, 0, 0),
            Record::new("GOA", "2025-01", 7, 0, 0),
            Record::new("BIHAR", "2025-03", 10, 0, 0),
            Record::new("BIHAR", "2025-02", 1, 0, 0),
        ];
        let monthly = group_by_period_totals(&records).unwrap();
        assert_eq!(
            monthly,
            vec![
                MonthlyTotal::new("2025-03", 15.0),
                MonthlyTotal::new("2025-01", 7.0),
                MonthlyTotal::new("2025-02", 1.0),
            ]
        );
    }

    #[test]
    fn test_monthly_overflow_names_period() {
        let records = vec![
            Record::new("GOA", "2025-01", u64::MAX, 0, 0),
            Record::new("BIHAR", "2025-01", 1, 0, 0),
        ];
        assert_eq!(
            group_by_period_totals(&records),
            Err(AnalyticsError::PeriodOverflow {
                period: "2025-01".to_string()
            })
        );
    }

    #[test]
    fn test_monthly_totals_reject_blank_period() {
        let records = vec![Record::new("GOA", " ", 5, 0, 0)];
        assert!(group_by_period_totals(&records).unwrap_err().is_data_shape());
    }
}
