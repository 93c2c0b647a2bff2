//! Errors returned by the video catalog collaborator.

use thiserror::Error;

/// Errors that can occur when talking to the video catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog could not be reached (DNS, connect, TLS, timeout)
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The catalog answered with a non-success status or an unusable body
    #[error("Catalog API returned status {status}: {detail}")]
    Upstream { status: u16, detail: String },
}

impl CatalogError {
    pub fn transport(message: impl Into<String>) -> Self {
        CatalogError::Transport {
            message: message.into(),
        }
    }

    pub fn upstream(status: u16, detail: impl Into<String>) -> Self {
        CatalogError::Upstream {
            status,
            detail: detail.into(),
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return CatalogError::transport("request timed out");
        }
        // The request URL carries the API key as a query parameter
        CatalogError::transport(err.without_url().to_string())
    }
}
