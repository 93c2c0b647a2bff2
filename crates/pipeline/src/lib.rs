//! Pipeline for filtering and ranking normalized study records.
//!
//! This crate provides:
//! - Filter trait and implementations for record admission
//! - FilterPipeline for composing filters
//! - Ranking by a fixed composite key
//!
//! ## Architecture
//! The pipeline processes normalized records in stages:
//! 1. Filters drop records that break a hard constraint (too long, no
//!    captions) or miss a preference (level, exam, content type)
//! 2. The ranking engine orders the survivors with a stable sort
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{rank, FilterPipeline};
//!
//! let pipeline = FilterPipeline::standard();
//! let admitted = pipeline.apply(records, &filters);
//! let ordered = rank(admitted, &filters);
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod ranking;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use ranking::{rank, RankingKey, PLAYLIST_DURATION_SENTINEL};

#[cfg(test)]
pub(crate) mod test_support {
    use catalog::{ContentType, Level, NormalizedRecord, RecordDetails};

    pub fn video_record(id: &str, duration_minutes: u64, has_captions: bool) -> NormalizedRecord {
        NormalizedRecord {
            id: id.to_string(),
            title: format!("Video {}", id),
            channel: "Test Channel".to_string(),
            published_date: "2024-01-01".to_string(),
            details: RecordDetails::Video {
                duration_minutes,
                has_captions,
                view_count: 0,
            },
            level: Level::Intermediate,
            exams: Vec::new(),
            content_type: ContentType::ConceptLecture,
            matched_text_excerpt: String::new(),
        }
    }

    pub fn playlist_record(id: &str) -> NormalizedRecord {
        NormalizedRecord {
            id: id.to_string(),
            title: format!("Playlist {}", id),
            channel: "Test Channel".to_string(),
            published_date: String::new(),
            details: RecordDetails::Playlist { item_count: 10 },
            level: Level::Intermediate,
            exams: Vec::new(),
            content_type: ContentType::ConceptLecture,
            matched_text_excerpt: String::new(),
        }
    }
}
