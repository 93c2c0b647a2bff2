//! TextClassifier bundles the keyword tables with the three classifiers.
//!
//! Every method is a pure function of its input text: the same text always
//! yields the same labels.

use crate::content_type::{content_type_for, content_type_scores};
use crate::exams::exams_for;
use crate::keywords::KeywordTables;
use crate::level::{level_for, LevelFallback};
use catalog::{ContentType, Exam, Level};
use std::sync::Arc;

/// All labels derived from one piece of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub level: Level,
    pub exams: Vec<Exam>,
    pub content_type: ContentType,
}

/// Classifies free text (title + description) into level, exams and content type
#[derive(Debug, Clone)]
pub struct TextClassifier {
    /// Shared read-only tables, cheap to clone across normalizer threads
    tables: Arc<KeywordTables>,
    level_fallback: LevelFallback,
}

impl TextClassifier {
    /// Create a classifier with the default keyword tables
    pub fn new() -> Self {
        Self {
            tables: Arc::new(KeywordTables::default()),
            level_fallback: LevelFallback::default(),
        }
    }

    /// Replace the keyword tables
    pub fn with_tables(mut self, tables: KeywordTables) -> Self {
        self.tables = Arc::new(tables);
        self
    }

    /// Configure what happens when no level keyword fires (default: Intermediate)
    pub fn with_level_fallback(mut self, fallback: LevelFallback) -> Self {
        self.level_fallback = fallback;
        self
    }

    pub fn tables(&self) -> &KeywordTables {
        &self.tables
    }

    pub fn level_fallback(&self) -> LevelFallback {
        self.level_fallback
    }

    pub fn classify_level(&self, text: &str) -> Level {
        level_for(&text.to_lowercase(), &self.tables, self.level_fallback)
    }

    pub fn detect_exams(&self, text: &str) -> Vec<Exam> {
        exams_for(&text.to_lowercase(), &self.tables)
    }

    pub fn classify_content_type(&self, text: &str) -> ContentType {
        content_type_for(&text.to_lowercase(), &self.tables)
    }

    /// Content-type vote counts in tie-break priority order
    pub fn content_type_scores(&self, text: &str) -> Vec<(ContentType, usize)> {
        content_type_scores(&text.to_lowercase(), &self.tables)
    }

    /// Run all three classifiers, lower-casing the text once
    pub fn classify(&self, text: &str) -> Classification {
        let lowered = text.to_lowercase();
        Classification {
            level: level_for(&lowered, &self.tables, self.level_fallback),
            exams: exams_for(&lowered, &self.tables),
            content_type: content_type_for(&lowered, &self.tables),
        }
    }
}

impl Default for TextClassifier {
    fn default() -> Self {
        Self::new()
    }
}
