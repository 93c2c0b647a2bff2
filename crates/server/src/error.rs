//! Errors surfaced by a search request.

use thiserror::Error;
use youtube_client::CatalogError;

pub const MISSING_API_KEY: &str =
    "YouTube API key is not configured. Set YOUTUBE_API_KEY or pass --api-key.";

/// Reasons a search request is aborted.
///
/// An empty result list is not an error; see `SearchOutcome::is_empty`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Missing or unusable configuration, detected before any fetch
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Search query is empty")]
    EmptyQuery,

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The result-processing task died
    #[error("Result processing failed: {0}")]
    Processing(String),
}

impl SearchError {
    pub fn missing_api_key() -> Self {
        SearchError::Configuration(MISSING_API_KEY.to_string())
    }

    /// Message shown to the user
    pub fn user_message(&self) -> String {
        match self {
            SearchError::Configuration(message) => message.clone(),
            SearchError::EmptyQuery => "Enter a topic to search for.".to_string(),
            SearchError::Catalog(CatalogError::Transport { .. }) => {
                "Network error: could not reach YouTube. Check your connection and try again."
                    .to_string()
            }
            SearchError::Catalog(CatalogError::Upstream { status, detail }) => {
                format!("YouTube API error (HTTP {}): {}", status, detail)
            }
            SearchError::Processing(_) => {
                "Something went wrong while processing the results.".to_string()
            }
        }
    }
}
