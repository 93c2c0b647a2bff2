//! Content-type classification by keyword voting.
//!
//! ## Algorithm
//! 1. Score each content type by the number of its distinct keywords present
//!    in the lower-cased text (repeats of one keyword count once)
//! 2. Pick the highest score; ties go to the type earliest in
//!    `ContentType::ALL` (Concept Lecture, then Question Practice/PYQ, ...)
//! 3. A top score of 0 means Concept Lecture

use crate::keywords::{distinct_matches, KeywordTables};
use catalog::ContentType;

/// Per-type scores in priority order
pub(crate) fn content_type_scores(lowered: &str, tables: &KeywordTables) -> Vec<(ContentType, usize)> {
    ContentType::ALL
        .iter()
        .map(|ct| (*ct, distinct_matches(lowered, tables.content_type_keywords(*ct))))
        .collect()
}

/// Winning content type for already lower-cased text
pub(crate) fn content_type_for(lowered: &str, tables: &KeywordTables) -> ContentType {
    let mut best = (ContentType::ConceptLecture, 0usize);
    for (content_type, score) in content_type_scores(lowered, tables) {
        // Strictly greater keeps the earlier type on ties
        if score > best.1 {
            best = (content_type, score);
        }
    }
    best.0
}
