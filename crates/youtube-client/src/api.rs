//! The read operations the search pipeline needs from a video catalog.

use crate::error::CatalogError;
use async_trait::async_trait;
use catalog::{ItemKind, RawPlaylist, RawVideo};
use std::fmt;

/// API credential for the video catalog.
///
/// `Debug` is redacted so the key never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns `None` for a missing or blank key
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            None
        } else {
            Some(ApiKey(key))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Idempotent read operations against the video catalog.
///
/// Implemented by `YouTubeClient` for the real service and by stubs in tests.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Identifiers of the items matching `query`, in relevance order
    async fn search_ids(
        &self,
        api_key: &ApiKey,
        query: &str,
        kind: ItemKind,
        max_results: u32,
    ) -> Result<Vec<String>, CatalogError>;

    /// Full video records for the given ids (order not guaranteed)
    async fn fetch_videos(
        &self,
        api_key: &ApiKey,
        ids: &[String],
    ) -> Result<Vec<RawVideo>, CatalogError>;

    /// Full playlist records for the given ids (order not guaranteed)
    async fn fetch_playlists(
        &self,
        api_key: &ApiKey,
        ids: &[String],
    ) -> Result<Vec<RawPlaylist>, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_is_rejected() {
        assert!(ApiKey::new("").is_none());
        assert!(ApiKey::new("   ").is_none());
        assert_eq!(ApiKey::new(" secret ").unwrap().expose(), "secret");
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = ApiKey::new("super-secret").unwrap();
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
    }
}
