//! Search service for study videos.
//!
//! This crate contains the orchestrator that takes a query and the user's
//! filters through fetch, classification, filtering and ranking, plus the
//! configuration, cache and error types it needs.

pub mod cache;
pub mod config;
pub mod error;
pub mod orchestrator;

pub use cache::{CacheKey, Clock, NoopCache, ResultCache, SystemClock, TtlCache};
pub use config::{SearchConfig, DEFAULT_BASE_URL, DEFAULT_CACHE_TTL, DEFAULT_MAX_RESULTS};
pub use error::SearchError;
pub use orchestrator::{display_url, DisplayableResult, SearchOrchestrator, SearchOutcome};
