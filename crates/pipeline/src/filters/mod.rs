//! Filter implementations for the record pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod captions;
pub mod content_type;
pub mod duration_ceiling;
pub mod exam;
pub mod level;

// Re-export for convenience
pub use captions::CaptionFilter;
pub use content_type::ContentTypeFilter;
pub use duration_ceiling::DurationCeilingFilter;
pub use exam::ExamFilter;
pub use level::LevelFilter;
