//! User-selected search constraints.
//!
//! `SearchFilters` is built once per search from the front end's inputs and
//! passed by reference to every filter and to the ranking engine.

use crate::types::{ContentType, Exam, ItemKind, Level};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Slider bounds offered by the front end, in minutes
pub const MIN_DURATION_MINUTES: u32 = 5;
pub const MAX_DURATION_MINUTES: u32 = 60;
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

/// Level constraint: either "Any" or one specific level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LevelPreference {
    #[default]
    Any,
    Only(Level),
}

impl LevelPreference {
    pub fn matches(&self, level: Level) -> bool {
        match self {
            LevelPreference::Any => true,
            LevelPreference::Only(wanted) => *wanted == level,
        }
    }
}

impl fmt::Display for LevelPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelPreference::Any => f.write_str("Any"),
            LevelPreference::Only(level) => write!(f, "{}", level),
        }
    }
}

/// Which kinds of items a search should fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResultKind {
    #[default]
    Videos,
    Playlists,
    Both,
}

impl ResultKind {
    /// Item kinds to fetch, videos before playlists
    pub fn kinds(&self) -> &'static [ItemKind] {
        match self {
            ResultKind::Videos => &[ItemKind::Video],
            ResultKind::Playlists => &[ItemKind::Playlist],
            ResultKind::Both => &[ItemKind::Video, ItemKind::Playlist],
        }
    }
}

/// Constraints and preferences for one search.
///
/// Empty `exams` / `content_types` sets mean "no preference".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub max_duration_minutes: u32,
    pub captions_required: bool,
    pub level: LevelPreference,
    pub exams: BTreeSet<Exam>,
    pub content_types: BTreeSet<ContentType>,
    /// Guidance/Motivation records are dropped unless this is set
    pub show_guidance: bool,
    pub result_kind: ResultKind,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self {
            max_duration_minutes: DEFAULT_DURATION_MINUTES,
            captions_required: false,
            level: LevelPreference::Any,
            exams: BTreeSet::new(),
            content_types: BTreeSet::new(),
            show_guidance: false,
            result_kind: ResultKind::Videos,
        }
    }

    pub fn with_max_duration_minutes(mut self, minutes: u32) -> Self {
        self.max_duration_minutes = minutes;
        self
    }

    pub fn with_captions_required(mut self, required: bool) -> Self {
        self.captions_required = required;
        self
    }

    pub fn with_level(mut self, level: LevelPreference) -> Self {
        self.level = level;
        self
    }

    pub fn with_exam(mut self, exam: Exam) -> Self {
        self.exams.insert(exam);
        self
    }

    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_types.insert(content_type);
        self
    }

    pub fn with_show_guidance(mut self, show: bool) -> Self {
        self.show_guidance = show;
        self
    }

    pub fn with_result_kind(mut self, kind: ResultKind) -> Self {
        self.result_kind = kind;
        self
    }

    pub fn duration_ceiling_seconds(&self) -> u64 {
        u64::from(self.max_duration_minutes) * 60
    }

    /// True when no content-type preference is set or `content_type` is in it
    pub fn prefers_content_type(&self, content_type: ContentType) -> bool {
        self.content_types.is_empty() || self.content_types.contains(&content_type)
    }

    /// Number of the record's exams that the user selected
    pub fn matched_exam_count(&self, exams: &[Exam]) -> usize {
        exams.iter().filter(|exam| self.exams.contains(exam)).count()
    }
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self::new()
    }
}
