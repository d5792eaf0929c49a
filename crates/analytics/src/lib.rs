//! # analytics
//!
//! Analytics engine for regional enrolment and update-transaction counts.
//! Turns a flat record set into per-region ratios, anomaly labels, top-N
//! rankings and a two-method forecast of the monthly enrolment total.

pub use analytics_facade::*;
