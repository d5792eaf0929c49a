//! Metric lookup trait used by ranking.

use crate::model::{AnomalyPoint, Metric, RegionSummary};

/// Anything that exposes the numeric summary fields selectable by [`Metric`].
pub trait MetricSource {
    /// Value of `metric` for this item.
    fn metric_value(&self, metric: Metric) -> f64;
}

impl MetricSource for RegionSummary {
    fn metric_value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::TotalEnrolments => self.total_enrolments as f64,
            Metric::TotalDemographicUpdates => self.total_demographic_updates as f64,
            Metric::TotalBiometricUpdates => self.total_biometric_updates as f64,
            Metric::DemoPerEnrol => self.demo_per_enrol,
            Metric::BioPerEnrol => self.bio_per_enrol,
        }
    }
}

impl MetricSource for AnomalyPoint {
    fn metric_value(&self, metric: Metric) -> f64 {
        self.summary.metric_value(metric)
    }
}

impl<T: MetricSource + ?Sized> MetricSource for &T {
    fn metric_value(&self, metric: Metric) -> f64 {
        (**self).metric_value(metric)
    }
}
