//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern. A record is
//! admitted only if every filter admits it.

use crate::filters::{
    CaptionFilter, ContentTypeFilter, DurationCeilingFilter, ExamFilter, LevelFilter,
};
use crate::traits::Filter;
use catalog::{NormalizedRecord, SearchFilters};

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(DurationCeilingFilter)
///     .add_filter(CaptionFilter)
///     .add_filter(LevelFilter);
///
/// let admitted = pipeline.apply(records, &filters);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The full admission rule set: duration ceiling, captions, level,
    /// exam and content type.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(DurationCeilingFilter)
            .add_filter(CaptionFilter)
            .add_filter(LevelFilter)
            .add_filter(ExamFilter)
            .add_filter(ContentTypeFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the configured filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// True if every filter admits the record.
    pub fn admits(&self, record: &NormalizedRecord, filters: &SearchFilters) -> bool {
        self.filters.iter().all(|f| f.admits(record, filters))
    }

    /// Apply all filters in sequence to the records.
    ///
    /// ## Algorithm
    /// 1. Start with the input records
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return the admitted records in their original relative order
    pub fn apply(
        &self,
        records: Vec<NormalizedRecord>,
        filters: &SearchFilters,
    ) -> Vec<NormalizedRecord> {
        let mut current = records;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, filters);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::standard()
    }
}
