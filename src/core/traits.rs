//! Core trait definitions
//!
//! The to-do and contact commands only ever see a collection through this
//! trait, which keeps the file format out of the command logic.

use crate::utils::error::AppResult;

/// Whole-collection storage for an ordered sequence of records
///
/// Every call loads or replaces the complete sequence; there is no
/// incremental update and no state retained between calls.
pub trait RecordStore<T> {
    /// Load all records in stored order. An absent backing store yields an
    /// empty sequence.
    fn load(&self) -> AppResult<Vec<T>>;

    /// Replace the stored sequence with `records`
    fn save(&self, records: &[T]) -> AppResult<()>;
}
