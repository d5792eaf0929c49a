//! Fixed domain constants.
//!
//! The anomaly thresholds and the moving-average window are part of the
//! domain rules and are not configurable. `DEFAULT_HORIZON` and
//! `DEFAULT_TOP_N` only seed [`ViewConfig`](crate::ViewConfig).

/// A region is anomalous when demographic updates per enrolment exceed this.
pub const DEMO_PER_ENROL_THRESHOLD: f64 = 20.0;

/// A region is anomalous when biometric updates per enrolment exceed this.
pub const BIO_PER_ENROL_THRESHOLD: f64 = 30.0;

/// Number of trailing months averaged by the moving-average forecast.
pub const MOVING_AVERAGE_WINDOW: usize = 3;

/// Shortest monthly series that produces a forecast.
pub const MIN_FORECAST_HISTORY: usize = 3;

/// Number of future months forecast by default.
pub const DEFAULT_HORIZON: usize = 3;

/// Number of regions kept in a ranking by default.
pub const DEFAULT_TOP_N: usize = 10;
