//! Composition of every analytics view from one record set.

use std::collections::BTreeMap;

use analytics_api::ViewConfig;
use analytics_spi::{
    AnomalyPoint, ForecastPoint, Metric, MonthlyTotal, OverviewStats, Record, RegionSummary,
    Result,
};
use serde::{Deserialize, Serialize};

use crate::aggregator::{aggregate, group_by_period_totals};
use crate::classifier::{anomaly_count, classify};
use crate::forecaster::forecast;
use crate::query::overview_stats;
use crate::ranker::top_n;

/// Every view derived from a record set in a single build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsViews {
    /// Per-region totals and ratios, keyed by region.
    pub summaries: BTreeMap<String, RegionSummary>,
    /// Top-N ranking for each requested metric.
    pub ranked: BTreeMap<Metric, Vec<RegionSummary>>,
    /// Anomaly label for every region, in summary order.
    pub anomalies: Vec<AnomalyPoint>,
    /// Monthly enrolment totals the forecast was computed from.
    pub monthly: Vec<MonthlyTotal>,
    /// Forecast points; empty when the history is too short.
    pub forecast: Vec<ForecastPoint>,
    /// Dataset-wide totals.
    pub overview: OverviewStats,
}

impl AnalyticsViews {
    /// Ranking for `metric`, if it was requested.
    pub fn ranking(&self, metric: Metric) -> Option<&[RegionSummary]> {
        self.ranked.get(&metric).map(Vec::as_slice)
    }

    /// Whether enough history was available to forecast.
    pub fn has_forecast(&self) -> bool {
        !self.forecast.is_empty()
    }
}

/// Build every view with the default configuration.
pub fn build_views(records: &[Record]) -> Result<AnalyticsViews> {
    build_views_with(records, &ViewConfig::default())
}

/// Build every view with caller-supplied ranking and forecast parameters.
///
/// The build is all-or-nothing: the first data error aborts it and no
/// partial views are returned.
///
/// # Panics
///
/// Panics if `config.top_n` or `config.horizon` is zero. Use
/// [`ViewConfig::validate`] or the builder to check untrusted parameters.
pub fn build_views_with(records: &[Record], config: &ViewConfig) -> Result<AnalyticsViews> {
    let summaries = aggregate(records)?;
    let monthly = group_by_period_totals(records)?;

    let values: Vec<RegionSummary> = summaries.values().cloned().collect();
    let ranked = config
        .metrics
        .iter()
        .map(|&metric| (metric, top_n(&values, metric, config.top_n)))
        .collect();
    let anomalies = classify(&values);
    let forecast = forecast(&monthly, config.horizon)?;
    let overview = overview_stats(&summaries);

    tracing::debug!(
        records = records.len(),
        regions = summaries.len(),
        months = monthly.len(),
        anomalies = anomaly_count(&anomalies),
        "analytics views built"
    );
    if forecast.is_empty() {
        tracing::info!(
            months = monthly.len(),
            "not enough monthly history to forecast"
        );
    }

    Ok(AnalyticsViews {
        summaries,
        ranked,
        anomalies,
        monthly,
        forecast,
        overview,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset_builds_empty_views() {
        let views = build_views(&[]).unwrap();
        assert!(views.summaries.is_empty());
        assert!(views.anomalies.is_empty());
        assert!(views.monthly.is_empty());
        assert!(!views.has_forecast());
        assert_eq!(views.overview, OverviewStats::default());
        assert_eq!(views.ranking(Metric::TotalEnrolments), Some(&[][..]));
    }

    #[test]
    fn test_unrequested_metric_has_no_ranking() {
        let views = build_views(&[Record::new("GOA", "2025-01", 1, 1, 1)]).unwrap();
        assert!(views.ranking(Metric::BioPerEnrol).is_none());
    }

    #[test]
    fn test_malformed_record_aborts_build() {
        let records = vec![
            Record::new("GOA", "2025-01", 1, 1, 1),
            Record::new("GOA", "", 1, 1, 1),
        ];
        assert!(build_views(&records).unwrap_err().is_data_shape());
    }
}
