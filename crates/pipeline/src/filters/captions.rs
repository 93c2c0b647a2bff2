//! Filter for the "must have captions" toggle.

use crate::traits::Filter;
use catalog::{NormalizedRecord, SearchFilters};

/// When captions are required, removes videos without them.
///
/// Playlists carry no caption flag and are not affected.
pub struct CaptionFilter;

impl Filter for CaptionFilter {
    fn name(&self) -> &str {
        "CaptionFilter"
    }

    fn admits(&self, record: &NormalizedRecord, filters: &SearchFilters) -> bool {
        if !filters.captions_required {
            return true;
        }
        record.has_captions().unwrap_or(true)
    }
}
