//! Filter enforcing the user's maximum video length.
//!
//! Playlists have no duration and always pass.

use crate::traits::Filter;
use catalog::{NormalizedRecord, SearchFilters};

/// Rejects videos longer than `SearchFilters::max_duration_minutes`.
///
/// ## Algorithm
/// Admit when `duration_minutes * 60 <= duration_ceiling_seconds`.
pub struct DurationCeilingFilter;

impl Filter for DurationCeilingFilter {
    fn name(&self) -> &str {
        "DurationCeilingFilter"
    }

    fn admits(&self, record: &NormalizedRecord, filters: &SearchFilters) -> bool {
        match record.duration_minutes() {
            Some(minutes) => {
                minutes.saturating_mul(60) <= filters.duration_ceiling_seconds()
            }
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{playlist_record, video_record};
    use catalog::{ContentType, RecordDetails};

    #[test]
    fn test_duration_ceiling_filter() {
        let filters = SearchFilters::new().with_max_duration_minutes(30);

        let records = vec![
            video_record("short", 10, true),
            video_record("exact", 30, true),
            video_record("long", 45, true),
        ];

        let filtered = DurationCeilingFilter.apply(records, &filters);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, "short");
        assert_eq!(filtered[1].id, "exact");
    }

    #[test]
    fn test_playlists_are_never_rejected_for_duration() {
        let filters = SearchFilters::new().with_max_duration_minutes(5);
        assert!(DurationCeilingFilter.admits(&playlist_record("PL1"), &filters));
    }

    #[test]
    fn test_over_ceiling_video_rejected_regardless_of_other_attributes() {
        let filters = SearchFilters::new().with_max_duration_minutes(20);
        let mut record = video_record("long", 21, true);
        record.details = RecordDetails::Video {
            duration_minutes: 21,
            has_captions: true,
            view_count: 10_000_000,
        };
        record.content_type = ContentType::FullCrashCourse;
        assert!(!DurationCeilingFilter.admits(&record, &filters));
    }
}
