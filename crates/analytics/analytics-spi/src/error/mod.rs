//! Error types for the analytics engine.
//!
//! This module contains error types and the Result alias.

mod analytics_error;

pub use analytics_error::{AnalyticsError, Result};
