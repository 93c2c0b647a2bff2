//! Filter on content type, including the guidance/motivation toggle.

use crate::traits::Filter;
use catalog::{ContentType, NormalizedRecord, SearchFilters};

/// Keeps records whose content type is in the user's selection.
///
/// ## Algorithm
/// 1. Guidance/Motivation is rejected unless `show_guidance` is set, even
///    when the selection names it
/// 2. An empty selection admits every other type
pub struct ContentTypeFilter;

impl Filter for ContentTypeFilter {
    fn name(&self) -> &str {
        "ContentTypeFilter"
    }

    fn admits(&self, record: &NormalizedRecord, filters: &SearchFilters) -> bool {
        if record.content_type == ContentType::GuidanceMotivation && !filters.show_guidance {
            return false;
        }
        filters.prefers_content_type(record.content_type)
    }
}
