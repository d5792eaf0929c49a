//! Raw per-region, per-period input record.

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};

/// One row of the input dataset: enrolment and update counts reported by a
/// region for a single month.
///
/// Counts are unsigned, so negative or non-numeric values are rejected when
/// the record is deserialized. `validate` covers the remaining shape rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Region (state) name.
    pub region: String,
    /// Month key, e.g. `"2025-03"`.
    pub period: String,
    /// New enrolments in the period.
    pub enrolments: u64,
    /// Demographic update transactions in the period.
    pub demographic_updates: u64,
    /// Biometric update transactions in the period.
    pub biometric_updates: u64,
}

impl Record {
    /// Create a new record.
    pub fn new(
        region: impl Into<String>,
        period: impl Into<String>,
        enrolments: u64,
        demographic_updates: u64,
        biometric_updates: u64,
    ) -> Self {
        Self {
            region: region.into(),
            period: period.into(),
            enrolments,
            demographic_updates,
            biometric_updates,
        }
    }

    /// Check the record's shape. `index` is its position in the input and is
    /// only used for error reporting.
    pub fn validate(&self, index: usize) -> Result<()> {
        if self.region.trim().is_empty() {
            return Err(AnalyticsError::MalformedRecord {
                index,
                reason: "region is empty".to_string(),
            });
        }
        if self.period.trim().is_empty() {
            return Err(AnalyticsError::MalformedRecord {
                index,
                reason: format!("period is empty for region '{}'", self.region),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_record() {
        let record = Record::new("KERALA", "2025-03", 120, 40, 15);
        assert!(record.validate(0).is_ok());
    }

    #[test]
    fn test_blank_region_rejected() {
        let record = Record::new("   ", "2025-03", 1, 1, 1);
        assert_eq!(
            record.validate(7),
            Err(AnalyticsError::MalformedRecord {
                index: 7,
                reason: "region is empty".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_period_rejected() {
        let record = Record::new("GOA", "", 1, 1, 1);
        let err = record.validate(2).unwrap_err();
        assert!(err.is_data_shape());
        assert!(err.to_string().contains("GOA"));
    }

    #[test]
    fn test_deserialize_rejects_negative_count() {
        let json = r#"{"region":"GOA","period":"2025-01","enrolments":-3,
                       "demographic_updates":0,"biometric_updates":0}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_missing_count() {
        let json = r#"{"region":"GOA","period":"2025-01","enrolments":3,
                       "demographic_updates":0}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }
}
