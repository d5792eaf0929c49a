//! Monthly enrolment total, the input unit of the forecaster.

use serde::{Deserialize, Serialize};

/// Total enrolments across all regions for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    pub month: String,
    pub total_enrol: f64,
}

impl MonthlyTotal {
    pub fn new(month: impl Into<String>, total_enrol: f64) -> Self {
        Self {
            month: month.into(),
            total_enrol,
        }
    }
}
