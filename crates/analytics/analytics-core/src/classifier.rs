//! Anomaly classification of region summaries.
//!
//! A region is anomalous when it records unusually many updates per
//! enrolment: more than [`DEMO_PER_ENROL_THRESHOLD`] demographic updates or
//! more than [`BIO_PER_ENROL_THRESHOLD`] biometric updates. Both comparisons
//! are strict, so a ratio sitting exactly on a threshold is normal.

use analytics_api::{BIO_PER_ENROL_THRESHOLD, DEMO_PER_ENROL_THRESHOLD};
use analytics_spi::{AnomalyPoint, Metric, RegionSummary};

use crate::ranker::top_n;

/// Apply the threshold rule to a pair of ratios.
pub fn is_anomalous(demo_per_enrol: f64, bio_per_enrol: f64) -> bool {
    demo_per_enrol > DEMO_PER_ENROL_THRESHOLD || bio_per_enrol > BIO_PER_ENROL_THRESHOLD
}

/// Label every summary, preserving input order.
pub fn classify(summaries: &[RegionSummary]) -> Vec<AnomalyPoint> {
    summaries
        .iter()
        .map(|s| AnomalyPoint::new(s.clone(), is_anomalous(s.demo_per_enrol, s.bio_per_enrol)))
        .collect()
}

/// Number of points flagged as anomalous.
pub fn anomaly_count(points: &[AnomalyPoint]) -> usize {
    points.iter().filter(|p| p.is_anomaly).count()
}

/// The `n` points with the highest demographic-update ratio.
pub fn top_by_demo_ratio(points: &[AnomalyPoint], n: usize) -> Vec<AnomalyPoint> {
    top_n(points, Metric::DemoPerEnrol, n)
}

/// The `n` points with the highest biometric-update ratio.
pub fn top_by_bio_ratio(points: &[AnomalyPoint], n: usize) -> Vec<AnomalyPoint> {
    top_n(points, Metric::BioPerEnrol, n)
}
