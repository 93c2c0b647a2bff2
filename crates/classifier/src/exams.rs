//! Exam affinity detection.
//!
//! Each exam has its own keyword set; a text is tagged with every exam
//! whose set has at least one substring match. Tags are not exclusive.

use crate::keywords::{contains_any, KeywordTables};
use catalog::Exam;

/// Exams matched by already lower-cased text, in enumeration order
pub(crate) fn exams_for(lowered: &str, tables: &KeywordTables) -> Vec<Exam> {
    tables
        .exams
        .iter()
        .filter(|(_, keywords)| contains_any(lowered, keywords))
        .map(|(exam, _)| *exam)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> Vec<Exam> {
        exams_for(&text.to_lowercase(), &KeywordTables::default())
    }

    #[test]
    fn test_jee_advanced_contains_jee() {
        assert!(detect("JEE Advanced 2024 rotational motion").contains(&Exam::Jee));
    }

    #[test]
    fn test_no_exam_keywords() {
        assert!(detect("Linear algebra for everyone").is_empty());
        assert!(detect("").is_empty());
    }

    #[test]
    fn test_multiple_exams() {
        let exams = detect("Physics for NEET and JEE Main aspirants");
        assert_eq!(exams, vec![Exam::Neet, Exam::Jee]);
    }

    #[test]
    fn test_all_exams() {
        let exams = detect("NEET, JEE, GATE exam, IIT JAM and CAT exam: one plan for all");
        assert_eq!(exams, Exam::ALL.to_vec());
    }

    #[test]
    fn test_gate_and_cat_branch_forms() {
        assert_eq!(detect("GATE CS 2025 Full Course"), vec![Exam::Gate]);
        assert_eq!(
            detect("GATE Mechanical Engineering: thermodynamics"),
            vec![Exam::Gate]
        );
        assert_eq!(detect("CAT quant shortcuts"), vec![Exam::Cat]);
    }

    #[test]
    fn test_bare_gate_and_cat_inside_words_do_not_match() {
        assert!(detect("Aggregate measures and their applications in education").is_empty());
    }

    #[test]
    fn test_custom_tables() {
        let mut tables = KeywordTables::default();
        tables.exams.insert(Exam::Gate, vec!["gate".to_string()]);
        let exams = exams_for("navigate the aggregate", &tables);
        assert_eq!(exams, vec![Exam::Gate]);
    }
}
