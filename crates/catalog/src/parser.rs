//! Parsing helpers for catalog data and user input.
//!
//! This module handles:
//! - ISO-8601 duration codes ("PT1H2M3S") into seconds
//! - RFC 3339 publish timestamps into display dates
//! - Label names typed by the user ("pyq", "iit-jam", "Beginner") into enums
//!
//! Duration and date parsing are total: malformed input degrades to a
//! default instead of an error.

use crate::error::{LabelError, Result};
use crate::preferences::{LevelPreference, ResultKind};
use crate::types::*;
use chrono::{DateTime, NaiveDate};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?$").expect("duration pattern is valid")
});

/// Parse an ISO-8601 duration code of the form `PT[nH][nM][nS]`.
///
/// Returns total whole seconds. Input that does not match the pattern
/// (including empty strings, day components and numeric overflow) yields 0.
pub fn parse_duration_seconds(code: &str) -> u64 {
    let Some(caps) = DURATION_RE.captures(code.trim()) else {
        return 0;
    };

    let component = |idx: usize| -> Option<u64> {
        match caps.get(idx) {
            Some(m) => m.as_str().parse::<u64>().ok(),
            None => Some(0),
        }
    };

    let total = (|| {
        let hours = component(1)?;
        let minutes = component(2)?;
        let seconds = component(3)?;
        hours
            .checked_mul(3600)?
            .checked_add(minutes.checked_mul(60)?)?
            .checked_add(seconds)
    })();

    total.unwrap_or(0)
}

/// Convert seconds to display minutes: floor, but never below 1
pub fn duration_minutes(seconds: u64) -> u64 {
    (seconds / 60).max(1)
}

/// Extract "YYYY-MM-DD" from a publish timestamp.
///
/// Absent or unusable timestamps give an empty string.
pub fn published_date(timestamp: Option<&str>) -> String {
    let Some(ts) = timestamp.map(str::trim).filter(|ts| !ts.is_empty()) else {
        return String::new();
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return dt.format("%Y-%m-%d").to_string();
    }

    // Fall back to the leading date part, e.g. "2023-05-01 12:00"
    ts.get(..10)
        .and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok())
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Lower-case and unify separators so "IIT-JAM", "iit_jam" and "iit jam" compare equal
fn normalize_label(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .replace(['-', '_'], " ")
}

impl FromStr for Level {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_label(s).as_str() {
            "beginner" => Ok(Level::Beginner),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            _ => Err(LabelError::unknown(
                "level",
                s,
                &["beginner", "intermediate", "advanced"],
            )),
        }
    }
}

impl FromStr for LevelPreference {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self> {
        if normalize_label(s) == "any" {
            return Ok(LevelPreference::Any);
        }
        s.parse::<Level>()
            .map(LevelPreference::Only)
            .map_err(|_| {
                LabelError::unknown(
                    "level",
                    s,
                    &["any", "beginner", "intermediate", "advanced"],
                )
            })
    }
}

impl FromStr for Exam {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_label(s).as_str() {
            "neet" => Ok(Exam::Neet),
            "jee" => Ok(Exam::Jee),
            "gate" => Ok(Exam::Gate),
            "iit jam" | "iitjam" | "jam" => Ok(Exam::IitJam),
            "cat" => Ok(Exam::Cat),
            _ => Err(LabelError::unknown(
                "exam",
                s,
                &["neet", "jee", "gate", "iit-jam", "cat"],
            )),
        }
    }
}

impl FromStr for ContentType {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_label(s).as_str() {
            "concept lecture" | "concept" | "lecture" => Ok(ContentType::ConceptLecture),
            "question practice/pyq" | "question practice" | "practice" | "pyq" => {
                Ok(ContentType::QuestionPractice)
            }
            "revision/notes" | "revision" | "notes" => Ok(ContentType::RevisionNotes),
            "full/crash course" | "full course" | "crash course" | "course" => {
                Ok(ContentType::FullCrashCourse)
            }
            "syllabus/strategy" | "syllabus" | "strategy" => Ok(ContentType::SyllabusStrategy),
            "guidance/motivation" | "guidance" | "motivation" => {
                Ok(ContentType::GuidanceMotivation)
            }
            _ => Err(LabelError::unknown(
                "content type",
                s,
                &["concept", "pyq", "revision", "crash-course", "strategy", "guidance"],
            )),
        }
    }
}

impl FromStr for ResultKind {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_label(s).as_str() {
            "videos" | "video" => Ok(ResultKind::Videos),
            "playlists" | "playlist" => Ok(ResultKind::Playlists),
            "both" | "all" => Ok(ResultKind::Both),
            _ => Err(LabelError::unknown(
                "result kind",
                s,
                &["videos", "playlists", "both"],
            )),
        }
    }
}
