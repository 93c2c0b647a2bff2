//! Error types for the catalog crate.
//!
//! Classification and normalization never fail, so the only fallible
//! operations here are the ones that turn user-supplied text (CLI flags,
//! config values) into labels.

use thiserror::Error;

/// Errors that can occur while parsing labels from user input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    /// The text does not name any known label of this kind
    #[error("Unknown {field}: '{value}' (expected one of: {expected})")]
    UnknownLabel {
        field: &'static str,
        value: String,
        expected: String,
    },
}

impl LabelError {
    pub(crate) fn unknown(field: &'static str, value: &str, expected: &[&str]) -> Self {
        LabelError::UnknownLabel {
            field,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, LabelError>;
