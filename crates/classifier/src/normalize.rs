//! Result normalization.
//!
//! Turns raw catalog items into `NormalizedRecord`s: runs the classifiers on
//! "title\ndescription", converts durations, and substitutes defaults for
//! anything the catalog left out.
//!
//! ## Defaults
//! - title -> "Untitled", channel -> "Unknown"
//! - view count / item count -> 0
//! - publish date -> "" (see `catalog::published_date`)
//! - malformed duration -> 0 seconds -> displayed as 1 minute

use crate::text_classifier::TextClassifier;
use catalog::{
    duration_minutes, parse_duration_seconds, published_date, NormalizedRecord, RawItem,
    RecordDetails,
};
use rayon::prelude::*;
use tracing::{debug, instrument};

pub const DEFAULT_EXCERPT_CHARS: usize = 200;
const UNTITLED: &str = "Untitled";
const UNKNOWN_CHANNEL: &str = "Unknown";

/// Builds NormalizedRecords from raw catalog items
#[derive(Debug, Clone)]
pub struct Normalizer {
    classifier: TextClassifier,
    excerpt_chars: usize,
}

impl Normalizer {
    pub fn new(classifier: TextClassifier) -> Self {
        Self {
            classifier,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
        }
    }

    /// Configure the excerpt length in characters (default: 200)
    pub fn with_excerpt_chars(mut self, chars: usize) -> Self {
        self.excerpt_chars = chars;
        self
    }

    pub fn classifier(&self) -> &TextClassifier {
        &self.classifier
    }

    /// Normalize a single item
    pub fn normalize(&self, item: &RawItem) -> NormalizedRecord {
        let (id, title, description, channel, published_at) = match item {
            RawItem::Video(v) => (&v.id, &v.title, &v.description, &v.channel, &v.published_at),
            RawItem::Playlist(p) => (&p.id, &p.title, &p.description, &p.channel, &p.published_at),
        };

        let text = format!(
            "{}\n{}",
            title.as_deref().unwrap_or_default(),
            description.as_deref().unwrap_or_default()
        );
        let classification = self.classifier.classify(&text);

        let details = match item {
            RawItem::Video(v) => {
                let seconds = v.duration.as_deref().map(parse_duration_seconds).unwrap_or(0);
                RecordDetails::Video {
                    duration_minutes: duration_minutes(seconds),
                    has_captions: v.has_captions,
                    view_count: v.view_count.unwrap_or(0),
                }
            }
            RawItem::Playlist(p) => RecordDetails::Playlist {
                item_count: p.item_count.unwrap_or(0),
            },
        };

        NormalizedRecord {
            id: id.clone(),
            title: non_blank_or(title.as_deref(), UNTITLED),
            channel: non_blank_or(channel.as_deref(), UNKNOWN_CHANNEL),
            published_date: published_date(published_at.as_deref()),
            details,
            level: classification.level,
            exams: classification.exams,
            content_type: classification.content_type,
            matched_text_excerpt: text.chars().take(self.excerpt_chars).collect(),
        }
    }

    /// Normalize a batch in parallel, preserving input order
    #[instrument(skip_all, fields(items = items.len()))]
    pub fn normalize_all(&self, items: &[RawItem]) -> Vec<NormalizedRecord> {
        let records: Vec<NormalizedRecord> =
            items.par_iter().map(|item| self.normalize(item)).collect();
        debug!("Normalized {} items", records.len());
        records
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(TextClassifier::new())
    }
}

fn non_blank_or(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}
