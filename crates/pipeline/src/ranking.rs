//! Ranking of admitted records.
//!
//! Records are ordered by a composite key compared field by field; the
//! first difference decides. The sort is stable, so records with identical
//! keys keep their input (catalog relevance) order.
//!
//! ## Key, in priority order
//! 1. Full/Crash Course playlists first
//! 2. Preferred content type first (everything counts as preferred when no
//!    content type is selected)
//! 3. Videos with captions first (playlists count as uncaptioned)
//! 4. More matched preferred exams first
//! 5. Preferred level first ("Any" matches every level)
//! 6. Shorter duration first (playlists use a sentinel that sorts last)
//! 7. More views first (playlists count as 0 views)

use catalog::{ContentType, ItemKind, NormalizedRecord, SearchFilters};
use std::cmp::Reverse;
use tracing::debug;

/// Duration used for playlists on the duration component of the key
pub const PLAYLIST_DURATION_SENTINEL: u64 = u64::MAX;

/// Composite ranking key; the derived `Ord` compares fields top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankingKey {
    pub full_course_playlist: Reverse<bool>,
    pub preferred_content_type: Reverse<bool>,
    pub has_captions: Reverse<bool>,
    pub matched_exams: Reverse<usize>,
    pub preferred_level: Reverse<bool>,
    pub duration_minutes: u64,
    pub view_count: Reverse<u64>,
}

impl RankingKey {
    pub fn for_record(record: &NormalizedRecord, filters: &SearchFilters) -> Self {
        let full_course_playlist = record.kind() == ItemKind::Playlist
            && record.content_type == ContentType::FullCrashCourse;

        Self {
            full_course_playlist: Reverse(full_course_playlist),
            preferred_content_type: Reverse(filters.prefers_content_type(record.content_type)),
            has_captions: Reverse(record.has_captions().unwrap_or(false)),
            matched_exams: Reverse(filters.matched_exam_count(&record.exams)),
            preferred_level: Reverse(filters.level.matches(record.level)),
            duration_minutes: record
                .duration_minutes()
                .unwrap_or(PLAYLIST_DURATION_SENTINEL),
            view_count: Reverse(record.view_count()),
        }
    }
}

/// Order admitted records for display.
///
/// An empty input yields an empty output.
pub fn rank(mut records: Vec<NormalizedRecord>, filters: &SearchFilters) -> Vec<NormalizedRecord> {
    // sort_by_key is stable
    records.sort_by_key(|record| RankingKey::for_record(record, filters));
    debug!("Ranked {} records", records.len());
    records
}
