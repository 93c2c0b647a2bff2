//! Explicit configuration handed to the orchestrator.

use classifier::{LevelFallback, DEFAULT_EXCERPT_CHARS};
use std::time::Duration;
use youtube_client::{ApiKey, DEFAULT_TIMEOUT, MAX_PAGE_SIZE};

pub use youtube_client::DEFAULT_BASE_URL;

pub const DEFAULT_MAX_RESULTS: u32 = 25;
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Everything a search needs besides the query and the user's filters.
///
/// ## Usage
/// ```ignore
/// let config = SearchConfig::default()
///     .with_api_key(std::env::var("YOUTUBE_API_KEY").unwrap_or_default())
///     .with_max_results(40);
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// `None` when no usable credential was supplied
    pub api_key: Option<ApiKey>,
    pub base_url: String,
    pub request_timeout: Duration,
    pub max_results: u32,
    pub cache_ttl: Duration,
    pub excerpt_chars: usize,
    pub level_fallback: LevelFallback,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            max_results: DEFAULT_MAX_RESULTS,
            cache_ttl: DEFAULT_CACHE_TTL,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
            level_fallback: LevelFallback::default(),
        }
    }
}

impl SearchConfig {
    /// Blank keys are treated as missing
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = ApiKey::new(key);
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn with_excerpt_chars(mut self, chars: usize) -> Self {
        self.excerpt_chars = chars;
        self
    }

    pub fn with_level_fallback(mut self, fallback: LevelFallback) -> Self {
        self.level_fallback = fallback;
        self
    }

    /// Page size actually requested, within 1..=50
    pub fn effective_max_results(&self) -> u32 {
        self.max_results.clamp(1, MAX_PAGE_SIZE)
    }
}
