//! Keyword tables driving every classifier.
//!
//! The tables are plain data: `KeywordTables::default()` builds them from the
//! constants below, and callers may clone and edit them before handing them
//! to a `TextClassifier`. All keywords are lower-case; matching is substring
//! containment against lower-cased text, so "proof" also fires inside
//! "waterproof".

use catalog::{ContentType, Exam};
use std::collections::BTreeMap;

pub const BEGINNER_KEYWORDS: &[&str] = &[
    "beginner",
    "intro",
    "basics",
    "crash course",
    "from scratch",
    "getting started",
    "for dummies",
    "fundamentals",
    "made easy",
    "101",
];

pub const ADVANCED_KEYWORDS: &[&str] = &[
    "advanced",
    "proof",
    "theorem",
    "derivation",
    "rigorous",
    "measure theory",
    "research",
    "graduate level",
    "olympiad",
];

pub const INTERMEDIATE_KEYWORDS: &[&str] = &[
    "intermediate",
    "in-depth",
    "in depth",
    "comprehensive",
    "deep dive",
    "detailed",
];

/// Used only by the keyword-balance level fallback
pub const THEORY_KEYWORDS: &[&str] = &[
    "theory",
    "theorem",
    "lemma",
    "axiom",
    "abstract",
    "formal",
    "derive",
];

/// Used only by the keyword-balance level fallback
pub const PRACTICAL_KEYWORDS: &[&str] = &[
    "example",
    "practice",
    "solved",
    "exercise",
    "application",
    "tutorial",
    "hands-on",
    "step by step",
];

/// Bare "gate" and "cat" are left out: they occur inside "aggregate",
/// "navigate", "application" and "education".
pub const EXAM_KEYWORDS: &[(Exam, &[&str])] = &[
    (
        Exam::Neet,
        &["neet", "aiims", "medical entrance", "ncert biology"],
    ),
    (
        Exam::Jee,
        &["jee", "iit jee", "jee main", "jee advanced", "engineering entrance"],
    ),
    (
        Exam::Gate,
        &[
            "gate exam", "gate 20", "gate cs", "gate ece", "gate ee", "gate mechanical",
            "gate civil", "gate preparation", "gate pyq", "gate syllabus",
        ],
    ),
    (
        Exam::IitJam,
        &["iit jam", "iit-jam", "iitjam", "jam exam", "jam 20"],
    ),
    (
        Exam::Cat,
        &[
            "cat exam", "cat 20", "cat preparation", "cat quant", "cat mock", "iim",
            "quantitative aptitude", "varc", "dilr",
        ],
    ),
];

pub const CONTENT_TYPE_KEYWORDS: &[(ContentType, &[&str])] = &[
    (
        ContentType::ConceptLecture,
        &["lecture", "concept", "explained", "explanation", "understanding", "what is", "lesson"],
    ),
    (
        ContentType::QuestionPractice,
        &["pyq", "previous year", "question", "practice", "problems", "mcq", "solved", "mock test"],
    ),
    (
        ContentType::RevisionNotes,
        &["revision", "revise", "notes", "summary", "recap", "formula sheet", "one shot", "cheat sheet"],
    ),
    (
        ContentType::FullCrashCourse,
        &["full course", "complete course", "crash course", "full syllabus", "marathon", "all lectures", "bootcamp"],
    ),
    (
        ContentType::SyllabusStrategy,
        &["syllabus", "strategy", "roadmap", "study plan", "how to prepare", "booklist", "book list", "timetable"],
    ),
    (
        ContentType::GuidanceMotivation,
        &["motivation", "motivational", "guidance", "success story", "topper", "mindset", "career advice", "counselling"],
    ),
];

/// Every keyword set the classifiers consult.
///
/// Exam and content-type maps are keyed by label; iteration follows the
/// label's declaration order, which is also the content-type tie-break order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTables {
    pub beginner: Vec<String>,
    pub advanced: Vec<String>,
    pub intermediate: Vec<String>,
    pub theory: Vec<String>,
    pub practical: Vec<String>,
    pub exams: BTreeMap<Exam, Vec<String>>,
    pub content_types: BTreeMap<ContentType, Vec<String>>,
}

fn owned(keywords: &[&str]) -> Vec<String> {
    keywords.iter().map(|k| k.to_string()).collect()
}

impl KeywordTables {
    /// Tables with no keywords at all; every classifier falls back to its default
    pub fn empty() -> Self {
        Self {
            beginner: Vec::new(),
            advanced: Vec::new(),
            intermediate: Vec::new(),
            theory: Vec::new(),
            practical: Vec::new(),
            exams: Exam::ALL.iter().map(|exam| (*exam, Vec::new())).collect(),
            content_types: ContentType::ALL.iter().map(|ct| (*ct, Vec::new())).collect(),
        }
    }

    /// Keywords for one exam (empty if the table has no entry)
    pub fn exam_keywords(&self, exam: Exam) -> &[String] {
        self.exams.get(&exam).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Keywords for one content type (empty if the table has no entry)
    pub fn content_type_keywords(&self, content_type: ContentType) -> &[String] {
        self.content_types
            .get(&content_type)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self {
            beginner: owned(BEGINNER_KEYWORDS),
            advanced: owned(ADVANCED_KEYWORDS),
            intermediate: owned(INTERMEDIATE_KEYWORDS),
            theory: owned(THEORY_KEYWORDS),
            practical: owned(PRACTICAL_KEYWORDS),
            exams: EXAM_KEYWORDS
                .iter()
                .map(|(exam, keywords)| (*exam, owned(keywords)))
                .collect(),
            content_types: CONTENT_TYPE_KEYWORDS
                .iter()
                .map(|(ct, keywords)| (*ct, owned(keywords)))
                .collect(),
        }
    }
}

/// True if any keyword occurs in `lowered`; empty keywords never match
pub(crate) fn contains_any(lowered: &str, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|k| !k.is_empty() && lowered.contains(k.as_str()))
}

/// Number of distinct non-empty keywords that occur in `lowered`
pub(crate) fn distinct_matches(lowered: &str, keywords: &[String]) -> usize {
    keywords
        .iter()
        .filter(|k| !k.is_empty() && lowered.contains(k.as_str()))
        .count()
}

/// Total occurrences of all keywords in `lowered`
pub(crate) fn total_occurrences(lowered: &str, keywords: &[String]) -> usize {
    keywords
        .iter()
        .filter(|k| !k.is_empty())
        .map(|k| lowered.matches(k.as_str()).count())
        .sum()
}
