//! Record loading from CSV and JSON files.
//!
//! Region names are cleaned on the way in: trimmed, upper-cased, inner
//! whitespace collapsed, `&` spelled as `AND`, and known misspellings or
//! renamed states mapped to their canonical name. Rows that resolve to
//! `UNKNOWN` are dropped before they reach the engine.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use analytics::{Record, RecordSource};
use serde::Deserialize;
use thiserror::Error;

/// Region placeholder for rows that cannot be attributed to a state.
pub const UNKNOWN_REGION: &str = "UNKNOWN";

/// Canonical names for misspelled, renamed or merged regions, keyed by the
/// cleaned spelling.
const REGION_ALIASES: &[(&str, &str)] = &[
    ("WESTBENGAL", "WEST BENGAL"),
    ("WEST BANGAL", "WEST BENGAL"),
    ("WEST BENGLI", "WEST BENGAL"),
    ("CHHATISGARH", "CHHATTISGARH"),
    ("UTTARANCHAL", "UTTARAKHAND"),
    ("ORISSA", "ODISHA"),
    ("TAMILNADU", "TAMIL NADU"),
    ("PONDICHERRY", "PUDUCHERRY"),
    ("DADRA AND NAGAR HAVELI", "DADRA AND NAGAR HAVELI AND DAMAN AND DIU"),
    ("DAMAN AND DIU", "DADRA AND NAGAR HAVELI AND DAMAN AND DIU"),
    (
        "THE DADRA AND NAGAR HAVELI AND DAMAN AND DIU",
        "DADRA AND NAGAR HAVELI AND DAMAN AND DIU",
    ),
    ("BALANAGAR", "TELANGANA"),
    ("DARBHANGA", "BIHAR"),
    ("MADANAPALLE", "ANDHRA PRADESH"),
    ("NAGPUR", "MAHARASHTRA"),
    ("RAJA ANNAMALAI PURAM", "TAMIL NADU"),
    ("PUTTENAHALLI", "KARNATAKA"),
    ("100000", UNKNOWN_REGION),
];

/// Errors raised while reading a record file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid CSV row: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported file extension '{0}', expected .csv or .json")]
    UnsupportedFormat(String),
}

/// File formats understood by [`FileSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
    Json,
}

impl Format {
    /// Detect the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => Ok(Format::Csv),
            "json" => Ok(Format::Json),
            other => Err(LoadError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// One input row before region cleaning. Accepts the dashboard's column
/// names (`state`, `month`, `total_enrol`, ...) as aliases.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(alias = "state")]
    region: String,
    #[serde(alias = "month")]
    period: String,
    #[serde(alias = "total_enrol")]
    enrolments: u64,
    #[serde(alias = "total_demo_updates")]
    demographic_updates: u64,
    #[serde(alias = "total_bio_updates")]
    biometric_updates: u64,
}

/// Record file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> Result<BufReader<File>, LoadError> {
        File::open(&self.path)
            .map(BufReader::new)
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

impl RecordSource for FileSource {
    type Error = LoadError;

    fn records(&self) -> Result<Vec<Record>, LoadError> {
        let format = Format::from_path(&self.path)?;
        let reader = self.open()?;
        let rows = match format {
            Format::Csv => read_csv(reader)?,
            Format::Json => read_json(reader)?,
        };

        let total = rows.len();
        let records = clean_rows(rows);
        let dropped = total - records.len();
        if dropped > 0 {
            tracing::warn!(dropped, "dropped rows with unknown region");
        }
        tracing::info!(records = records.len(), path = %self.path.display(), "records loaded");
        Ok(records)
    }
}

fn read_csv<R: Read>(reader: R) -> Result<Vec<RawRow>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();
    for row in csv_reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

fn read_json<R: Read>(reader: R) -> Result<Vec<RawRow>, LoadError> {
    Ok(serde_json::from_reader(reader)?)
}

fn clean_rows(rows: Vec<RawRow>) -> Vec<Record> {
    rows.into_iter()
        .filter_map(|row| {
            let region = normalize_region(&row.region);
            if region == UNKNOWN_REGION {
                return None;
            }
            Some(Record::new(
                region,
                row.period.trim(),
                row.enrolments,
                row.demographic_updates,
                row.biometric_updates,
            ))
        })
        .collect()
}

/// Clean a region name and resolve it to its canonical spelling.
pub fn normalize_region(raw: &str) -> String {
    let cleaned = raw
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
        .replace('&', "AND");

    REGION_ALIASES
        .iter()
        .find(|(alias, _)| *alias == cleaned)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_normalize_region_cleans_spelling() {
        assert_eq!(normalize_region("  tamil   nadu "), "TAMIL NADU");
        assert_eq!(normalize_region("Jammu & Kashmir"), "JAMMU AND KASHMIR");
    }

    #[test]
    fn test_normalize_region_applies_aliases() {
        assert_eq!(normalize_region("Orissa"), "ODISHA");
        assert_eq!(normalize_region("westbengal"), "WEST BENGAL");
        assert_eq!(
            normalize_region("Daman & Diu"),
            "DADRA AND NAGAR HAVELI AND DAMAN AND DIU"
        );
        assert_eq!(normalize_region("100000"), UNKNOWN_REGION);
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a.CSV")).unwrap(), Format::Csv);
        assert_eq!(Format::from_path(Path::new("a.json")).unwrap(), Format::Json);
        assert!(matches!(
            Format::from_path(Path::new("a.xlsx")),
            Err(LoadError::UnsupportedFormat(ext)) if ext == "xlsx"
        ));
    }

    #[test]
    fn test_load_csv() {
        let file = write_file(
            ".csv",
            "region,period,enrolments,demographic_updates,biometric_updates\n\
             Orissa,2025-01,100,2000,500\n\
             100000,2025-01,5,5,5\n\
             kerala ,2025-02,40,80,120\n",
        );

        let records = FileSource::new(file.path()).records().unwrap();
        assert_eq!(
            records,
            vec![
                Record::new("ODISHA", "2025-01", 100, 2_000, 500),
                Record::new("KERALA", "2025-02", 40, 80, 120),
            ]
        );
    }

    #[test]
    fn test_load_csv_with_dashboard_columns() {
        let file = write_file(
            ".csv",
            "state,month,total_enrol,total_demo_updates,total_bio_updates\n\
             GOA,2025-03,7,8,9\n",
        );
        let records = FileSource::new(file.path()).records().unwrap();
        assert_eq!(records, vec![Record::new("GOA", "2025-03", 7, 8, 9)]);
    }

    #[test]
    fn test_load_csv_rejects_non_numeric_count() {
        let file = write_file(
            ".csv",
            "region,period,enrolments,demographic_updates,biometric_updates\n\
             GOA,2025-03,seven,8,9\n",
        );
        let err = FileSource::new(file.path()).records().unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn test_load_json() {
        let file = write_file(
            ".json",
            r#"[{"region": "Chhatisgarh", "period": "2025-01", "enrolments": 10,
                 "demographic_updates": 20, "biometric_updates": 30}]"#,
        );
        let records = FileSource::new(file.path()).records().unwrap();
        assert_eq!(records, vec![Record::new("CHHATTISGARH", "2025-01", 10, 20, 30)]);
    }

    #[test]
    fn test_load_json_rejects_negative_count() {
        let file = write_file(
            ".json",
            r#"[{"region": "GOA", "period": "2025-01", "enrolments": -1,
                 "demographic_updates": 0, "biometric_updates": 0}]"#,
        );
        let err = FileSource::new(file.path()).records().unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = FileSource::new("/nonexistent/records.csv").records().unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
