//! Top-N ranking by a selected metric.

use analytics_spi::{Metric, MetricSource};

/// Return the `n` items with the largest `metric`, in descending order.
///
/// The sort is stable: items with equal values keep their input order.
/// Fewer than `n` items are returned as-is, sorted, without padding.
///
/// # Panics
///
/// Panics if `n` is zero; asking for an empty ranking is a caller bug.
pub fn top_n<T>(items: &[T], metric: Metric, n: usize) -> Vec<T>
where
    T: MetricSource + Clone,
{
    assert!(n > 0, "top_n requires a positive n");

    let mut ranked: Vec<&T> = items.iter().collect();
    ranked.sort_by(|a, b| b.metric_value(metric).total_cmp(&a.metric_value(metric)));
    ranked.into_iter().take(n).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics_spi::RegionSummary;

    fn summaries() -> Vec<RegionSummary> {
        vec![
            RegionSummary::from_totals("A", 300, 0, 0),
            RegionSummary::from_totals("B", 900, 0, 0),
            RegionSummary::from_totals("C", 300, 0, 0),
            RegionSummary::from_totals("D", 500, 0, 0),
        ]
    }

    fn regions(items: &[RegionSummary]) -> Vec<&str> {
        items.iter().map(|s| s.region.as_str()).collect()
    }

    #[test]
    fn test_descending_and_truncated() {
        let top = top_n(&summaries(), Metric::TotalEnrolments, 2);
        assert_eq!(regions(&top), vec!["B", "D"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let top = top_n(&summaries(), Metric::TotalEnrolments, 4);
        assert_eq!(regions(&top), vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn test_n_larger_than_input_returns_all() {
        let top = top_n(&summaries(), Metric::TotalEnrolments, 50);
        assert_eq!(top.len(), 4);
    }

    #[test]
    fn test_empty_input() {
        let top = top_n::<RegionSummary>(&[], Metric::BioPerEnrol, 5);
        assert!(top.is_empty());
    }

    #[test]
    #[should_panic(expected = "positive n")]
    fn test_zero_n_panics() {
        top_n(&summaries(), Metric::TotalEnrolments, 0);
    }
}
