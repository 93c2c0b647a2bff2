//! Filter keeping only records at the requested difficulty level.

use crate::traits::Filter;
use catalog::{NormalizedRecord, SearchFilters};

/// Admits everything for `LevelPreference::Any`, otherwise exact level matches.
pub struct LevelFilter;

impl Filter for LevelFilter {
    fn name(&self) -> &str {
        "LevelFilter"
    }

    fn admits(&self, record: &NormalizedRecord, filters: &SearchFilters) -> bool {
        filters.level.matches(record.level)
    }
}
