//! # Catalog Crate
//!
//! Shared domain types for searching study videos on a public video catalog.
//!
//! ## Main Components
//!
//! - **types**: Labels (Level, Exam, ContentType), raw catalog items and the
//!   NormalizedRecord every later stage works on
//! - **preferences**: SearchFilters, the user's constraints for one search
//! - **parser**: Duration codes, publish dates and label names
//! - **error**: Error types for label parsing
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{parse_duration_seconds, Exam, LevelPreference, SearchFilters};
//!
//! assert_eq!(parse_duration_seconds("PT1H2M3S"), 3723);
//!
//! let filters = SearchFilters::new()
//!     .with_max_duration_minutes(20)
//!     .with_level("beginner".parse::<LevelPreference>()?)
//!     .with_exam(Exam::Jee);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod preferences;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{LabelError, Result};
pub use parser::{duration_minutes, parse_duration_seconds, published_date};
pub use preferences::{
    LevelPreference,
    ResultKind,
    SearchFilters,
    DEFAULT_DURATION_MINUTES,
    MAX_DURATION_MINUTES,
    MIN_DURATION_MINUTES,
};
pub use types::{
    // Labels
    ContentType,
    Exam,
    Level,
    // Catalog items
    ItemKind,
    RawItem,
    RawPlaylist,
    RawVideo,
    // Normalized output
    NormalizedRecord,
    RecordDetails,
};
