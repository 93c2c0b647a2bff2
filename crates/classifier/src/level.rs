//! Difficulty level classification.
//!
//! ## Algorithm
//! First match wins, on lower-cased text:
//! 1. Any beginner keyword -> Beginner
//! 2. Any advanced keyword -> Advanced
//! 3. Any intermediate keyword -> Intermediate
//! 4. Otherwise the configured `LevelFallback` decides

use crate::keywords::{contains_any, total_occurrences, KeywordTables};
use catalog::{Level, LabelError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What to do when no level keyword fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LevelFallback {
    /// Always Intermediate
    #[default]
    Intermediate,
    /// Compare theory vs practical keyword occurrences:
    /// theory ahead by 2 or more -> Advanced, practical >= 2 -> Beginner,
    /// otherwise Intermediate
    KeywordBalance,
}

impl fmt::Display for LevelFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelFallback::Intermediate => f.write_str("intermediate"),
            LevelFallback::KeywordBalance => f.write_str("keyword-balance"),
        }
    }
}

impl FromStr for LevelFallback {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "intermediate" => Ok(LevelFallback::Intermediate),
            "keyword-balance" | "balance" => Ok(LevelFallback::KeywordBalance),
            _ => Err(LabelError::UnknownLabel {
                field: "level fallback",
                value: s.to_string(),
                expected: "intermediate, keyword-balance".to_string(),
            }),
        }
    }
}

/// Classify already lower-cased text
pub(crate) fn level_for(lowered: &str, tables: &KeywordTables, fallback: LevelFallback) -> Level {
    if contains_any(lowered, &tables.beginner) {
        return Level::Beginner;
    }
    if contains_any(lowered, &tables.advanced) {
        return Level::Advanced;
    }
    if contains_any(lowered, &tables.intermediate) {
        return Level::Intermediate;
    }

    match fallback {
        LevelFallback::Intermediate => Level::Intermediate,
        LevelFallback::KeywordBalance => {
            let theory = total_occurrences(lowered, &tables.theory);
            let practical = total_occurrences(lowered, &tables.practical);
            if theory >= practical + 2 {
                Level::Advanced
            } else if practical >= 2 {
                Level::Beginner
            } else {
                Level::Intermediate
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Level {
        level_for(&text.to_lowercase(), &KeywordTables::default(), LevelFallback::Intermediate)
    }

    fn classify_balanced(text: &str) -> Level {
        level_for(&text.to_lowercase(), &KeywordTables::default(), LevelFallback::KeywordBalance)
    }

    #[test]
    fn test_beginner_keywords() {
        assert_eq!(classify("Linear Algebra Basics"), Level::Beginner);
        assert_eq!(classify("A Beginner's Guide to Vectors"), Level::Beginner);
        assert_eq!(classify("Python from SCRATCH"), Level::Beginner);
    }

    #[test]
    fn test_beginner_check_precedes_advanced() {
        assert_eq!(classify("Crash course: every theorem you need"), Level::Beginner);
    }

    #[test]
    fn test_advanced_keywords() {
        assert_eq!(classify("Proof of the spectral theorem"), Level::Advanced);
        assert_eq!(classify("Measure Theory lecture 3"), Level::Advanced);
    }

    #[test]
    fn test_intermediate_keywords() {
        assert_eq!(classify("An in-depth look at eigenvalues"), Level::Intermediate);
    }

    #[test]
    fn test_substring_matching_is_not_word_matching() {
        assert_eq!(classify("Waterproof phone review"), Level::Advanced);
    }

    #[test]
    fn test_default_is_intermediate() {
        assert_eq!(classify("Eigenvalues visualized"), Level::Intermediate);
        assert_eq!(classify(""), Level::Intermediate);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let text = "Matrix multiplication tricks";
        let first = classify(text);
        for _ in 0..10 {
            assert_eq!(classify(text), first);
        }
    }

    #[test]
    fn test_keyword_balance_fallback() {
        assert_eq!(
            classify_balanced("Axiom, lemma and abstract structures"),
            Level::Advanced
        );
        assert_eq!(
            classify_balanced("Worked example and a tutorial"),
            Level::Beginner
        );
        assert_eq!(classify_balanced("Lemma with one example"), Level::Intermediate);
        // Keyword tiers still win over the fallback
        assert_eq!(classify_balanced("Intro: lemma lemma lemma"), Level::Beginner);
    }

    #[test]
    fn test_parse_level_fallback() {
        assert_eq!(
            "keyword-balance".parse::<LevelFallback>().unwrap(),
            LevelFallback::KeywordBalance
        );
        assert_eq!(
            "Intermediate".parse::<LevelFallback>().unwrap(),
            LevelFallback::Intermediate
        );
        assert!("smart".parse::<LevelFallback>().is_err());
    }
}
