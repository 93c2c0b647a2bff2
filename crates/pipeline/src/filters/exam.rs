//! Filter keeping records aimed at at least one selected exam.

use crate::traits::Filter;
use catalog::{NormalizedRecord, SearchFilters};

/// Keeps records whose exam tags intersect the user's selection.
///
/// An empty selection admits everything, including untagged records.
pub struct ExamFilter;

impl Filter for ExamFilter {
    fn name(&self) -> &str {
        "ExamFilter"
    }

    fn admits(&self, record: &NormalizedRecord, filters: &SearchFilters) -> bool {
        filters.exams.is_empty() || filters.matched_exam_count(&record.exams) > 0
    }
}
