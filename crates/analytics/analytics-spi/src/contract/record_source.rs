//! Dataset source trait definition.

use crate::model::Record;

/// Supplies the flat record collection the engine computes over.
///
/// Transport, retries and caching belong to the implementor, which also
/// owns its error type.
pub trait RecordSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load every record of the dataset.
    fn records(&self) -> Result<Vec<Record>, Self::Error>;
}
