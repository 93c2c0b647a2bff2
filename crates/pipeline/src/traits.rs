//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible admission rules to be applied to normalized records.

use catalog::{NormalizedRecord, SearchFilters};

/// Core trait for filtering records.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared by concurrent searches
/// - `admits` is a pure predicate; records are never modified
/// - `apply` takes ownership of the Vec and returns the admitted subset in
///   the original order
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Decide whether a single record passes this filter.
    fn admits(&self, record: &NormalizedRecord, filters: &SearchFilters) -> bool;

    /// Apply this filter to a set of records.
    fn apply(
        &self,
        records: Vec<NormalizedRecord>,
        filters: &SearchFilters,
    ) -> Vec<NormalizedRecord> {
        records
            .into_iter()
            .filter(|record| self.admits(record, filters))
            .collect()
    }
}
