//! # Classifier Crate
//!
//! Heuristic labelling of study videos and playlists from their metadata text.
//!
//! ## Components
//!
//! ### Keyword tables
//! Static, enumerable keyword sets per category (`KeywordTables`). They are
//! plain data so they can be inspected, listed or replaced wholesale.
//!
//! ### Classifiers
//! - Level: Beginner / Intermediate / Advanced, first matching tier wins
//! - Exams: every exam whose keyword set matches (NEET, JEE, GATE, IIT JAM, CAT)
//! - Content type: keyword voting with a fixed tie-break order
//!
//! ### Normalizer
//! Maps raw catalog items to `NormalizedRecord`s by running the classifiers on
//! "title\ndescription" and filling defaults for missing fields.
//!
//! ## Example Usage
//!
//! ```ignore
//! use classifier::{Normalizer, TextClassifier};
//!
//! let classifier = TextClassifier::new();
//! let labels = classifier.classify("JEE Advanced crash course\nAll of mechanics");
//!
//! let normalizer = Normalizer::new(classifier);
//! let records = normalizer.normalize_all(&raw_items);
//! ```
//!
//! Matching is substring containment on lower-cased text, not word matching.

// Public modules
pub mod keywords;
pub mod level;
pub mod normalize;
pub mod text_classifier;

mod content_type;
mod exams;

// Re-export commonly used types
pub use keywords::KeywordTables;
pub use level::LevelFallback;
pub use normalize::{Normalizer, DEFAULT_EXCERPT_CHARS};
pub use text_classifier::{Classification, TextClassifier};

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{ContentType, Exam, Level};

    #[test]
    fn test_crash_course_with_theorem_is_beginner() {
        let classifier = TextClassifier::new();
        let result = classifier.classify("Crash Course on every theorem\nGroup theory");
        assert_eq!(result.level, Level::Beginner);
        assert_eq!(result.content_type, ContentType::FullCrashCourse);
    }

    #[test]
    fn test_exam_tags_are_subset_of_enumeration() {
        let classifier = TextClassifier::new();
        let exams = classifier.detect_exams("NEET JEE GATE exam IIT JAM CAT exam iim");
        assert!(exams.iter().all(|exam| Exam::ALL.contains(exam)));
        assert_eq!(exams.len(), Exam::ALL.len());
    }
}
