//! Core domain types for study-video search.
//!
//! This module defines the data structures shared by every stage:
//! - Labels assigned by the classifiers (Level, Exam, ContentType)
//! - Raw items as returned by the video catalog (RawVideo, RawPlaylist)
//! - The NormalizedRecord produced for each raw item

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Labels
// =============================================================================

/// Difficulty level of a video or playlist.
///
/// Every normalized record carries exactly one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

/// Entrance exams a piece of content can be aimed at.
///
/// Tags are independent: one record may match several exams, or none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Exam {
    #[serde(rename = "NEET")]
    Neet,
    #[serde(rename = "JEE")]
    Jee,
    #[serde(rename = "GATE")]
    Gate,
    #[serde(rename = "IIT JAM")]
    IitJam,
    #[serde(rename = "CAT")]
    Cat,
}

impl Exam {
    pub const ALL: [Exam; 5] = [Exam::Neet, Exam::Jee, Exam::Gate, Exam::IitJam, Exam::Cat];

    pub fn as_str(&self) -> &'static str {
        match self {
            Exam::Neet => "NEET",
            Exam::Jee => "JEE",
            Exam::Gate => "GATE",
            Exam::IitJam => "IIT JAM",
            Exam::Cat => "CAT",
        }
    }
}

/// What kind of study material a record is.
///
/// Declaration order is the tie-break priority used by the content-type
/// classifier: earlier variants win ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "Concept Lecture")]
    ConceptLecture,
    #[serde(rename = "Question Practice/PYQ")]
    QuestionPractice,
    #[serde(rename = "Revision/Notes")]
    RevisionNotes,
    #[serde(rename = "Full/Crash Course")]
    FullCrashCourse,
    #[serde(rename = "Syllabus/Strategy")]
    SyllabusStrategy,
    #[serde(rename = "Guidance/Motivation")]
    GuidanceMotivation,
}

impl ContentType {
    /// All content types in tie-break priority order.
    pub const ALL: [ContentType; 6] = [
        ContentType::ConceptLecture,
        ContentType::QuestionPractice,
        ContentType::RevisionNotes,
        ContentType::FullCrashCourse,
        ContentType::SyllabusStrategy,
        ContentType::GuidanceMotivation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::ConceptLecture => "Concept Lecture",
            ContentType::QuestionPractice => "Question Practice/PYQ",
            ContentType::RevisionNotes => "Revision/Notes",
            ContentType::FullCrashCourse => "Full/Crash Course",
            ContentType::SyllabusStrategy => "Syllabus/Strategy",
            ContentType::GuidanceMotivation => "Guidance/Motivation",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Exam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Raw items (from the video catalog)
// =============================================================================

/// Whether an item is a single video or a playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemKind {
    Video,
    Playlist,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Video => "video",
            ItemKind::Playlist => "playlist",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A video as returned by the catalog's batch fetch.
///
/// Every field other than `id` may be missing upstream; normalization
/// substitutes defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawVideo {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub channel: Option<String>,
    /// RFC 3339 publish timestamp, e.g. "2023-05-01T12:00:00Z"
    pub published_at: Option<String>,
    /// ISO-8601 duration code, e.g. "PT12M30S"
    pub duration: Option<String>,
    pub has_captions: bool,
    pub view_count: Option<u64>,
}

/// A playlist as returned by the catalog's batch fetch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPlaylist {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub channel: Option<String>,
    pub published_at: Option<String>,
    pub item_count: Option<u64>,
}

/// One item of a search response: either a video or a playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawItem {
    Video(RawVideo),
    Playlist(RawPlaylist),
}

impl RawItem {
    pub fn kind(&self) -> ItemKind {
        match self {
            RawItem::Video(_) => ItemKind::Video,
            RawItem::Playlist(_) => ItemKind::Playlist,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            RawItem::Video(v) => &v.id,
            RawItem::Playlist(p) => &p.id,
        }
    }
}

impl From<RawVideo> for RawItem {
    fn from(video: RawVideo) -> Self {
        RawItem::Video(video)
    }
}

impl From<RawPlaylist> for RawItem {
    fn from(playlist: RawPlaylist) -> Self {
        RawItem::Playlist(playlist)
    }
}

// =============================================================================
// NormalizedRecord
// =============================================================================

/// Fields that only exist for one kind of item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordDetails {
    Video {
        /// Whole minutes, floor, never below 1
        duration_minutes: u64,
        has_captions: bool,
        view_count: u64,
    },
    Playlist {
        item_count: u64,
    },
}

/// Uniform view of a video or playlist after classification.
///
/// Records are built once per search and never mutated afterwards;
/// filtering and ranking only move them around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub id: String,
    pub title: String,
    pub channel: String,
    /// "YYYY-MM-DD", empty when the source timestamp is absent
    pub published_date: String,
    pub details: RecordDetails,
    pub level: Level,
    /// Matched exams in enumeration order
    pub exams: Vec<Exam>,
    pub content_type: ContentType,
    /// Leading characters of title + description, for display only
    pub matched_text_excerpt: String,
}

impl NormalizedRecord {
    pub fn kind(&self) -> ItemKind {
        match self.details {
            RecordDetails::Video { .. } => ItemKind::Video,
            RecordDetails::Playlist { .. } => ItemKind::Playlist,
        }
    }

    pub fn is_video(&self) -> bool {
        self.kind() == ItemKind::Video
    }

    /// Duration in minutes, `None` for playlists
    pub fn duration_minutes(&self) -> Option<u64> {
        match self.details {
            RecordDetails::Video { duration_minutes, .. } => Some(duration_minutes),
            RecordDetails::Playlist { .. } => None,
        }
    }

    /// Caption flag, `None` for playlists
    pub fn has_captions(&self) -> Option<bool> {
        match self.details {
            RecordDetails::Video { has_captions, .. } => Some(has_captions),
            RecordDetails::Playlist { .. } => None,
        }
    }

    /// View count; playlists report 0
    pub fn view_count(&self) -> u64 {
        match self.details {
            RecordDetails::Video { view_count, .. } => view_count,
            RecordDetails::Playlist { .. } => 0,
        }
    }

    /// Item count, `None` for videos
    pub fn item_count(&self) -> Option<u64> {
        match self.details {
            RecordDetails::Video { .. } => None,
            RecordDetails::Playlist { item_count } => Some(item_count),
        }
    }
}
