//! reqwest-based client for the YouTube Data API v3.

use crate::api::{ApiKey, CatalogApi};
use crate::error::CatalogError;
use crate::wire::{error_detail, ListResponse, PlaylistResource, SearchResult, VideoResource};
use async_trait::async_trait;
use catalog::{ItemKind, RawPlaylist, RawVideo};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, instrument};

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
/// Largest page / id batch the API accepts
pub const MAX_PAGE_SIZE: u32 = 50;

/// Client for the YouTube Data API.
///
/// Each call is a single GET with a fixed timeout; there are no retries.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    http: reqwest::Client,
    base_url: String,
}

impl YouTubeClient {
    /// Build a client for `base_url` (e.g. "https://www.googleapis.com/youtube/v3").
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!("Creating catalog client for {} (timeout {:?})", base_url, timeout);

        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `endpoint` with `params` plus the key, decode a JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
        api_key: &ApiKey,
    ) -> Result<T, CatalogError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("key", api_key.expose())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(CatalogError::upstream(status.as_u16(), error_detail(&body)));
        }

        serde_json::from_str(&body).map_err(|err| {
            CatalogError::upstream(status.as_u16(), format!("unexpected response body: {}", err))
        })
    }
}

#[async_trait]
impl CatalogApi for YouTubeClient {
    #[instrument(skip(self, api_key))]
    async fn search_ids(
        &self,
        api_key: &ApiKey,
        query: &str,
        kind: ItemKind,
        max_results: u32,
    ) -> Result<Vec<String>, CatalogError> {
        let params = [
            ("part", "id".to_string()),
            ("type", kind.as_str().to_string()),
            ("q", query.to_string()),
            ("maxResults", max_results.clamp(1, MAX_PAGE_SIZE).to_string()),
        ];
        let response: ListResponse<SearchResult> = self.get_json("search", &params, api_key).await?;

        let ids: Vec<String> = response
            .items
            .into_iter()
            .filter_map(|item| match kind {
                ItemKind::Video => item.id.video_id,
                ItemKind::Playlist => item.id.playlist_id,
            })
            .collect();
        debug!("Search returned {} {} ids", ids.len(), kind);
        Ok(ids)
    }

    #[instrument(skip(self, api_key, ids), fields(count = ids.len()))]
    async fn fetch_videos(
        &self,
        api_key: &ApiKey,
        ids: &[String],
    ) -> Result<Vec<RawVideo>, CatalogError> {
        let mut videos = Vec::with_capacity(ids.len());
        for batch in ids.chunks(MAX_PAGE_SIZE as usize) {
            let params = [
                ("part", "snippet,contentDetails,statistics".to_string()),
                ("id", batch.join(",")),
                ("maxResults", MAX_PAGE_SIZE.to_string()),
            ];
            let response: ListResponse<VideoResource> =
                self.get_json("videos", &params, api_key).await?;
            videos.extend(response.items.into_iter().map(RawVideo::from));
        }
        debug!("Fetched {} videos", videos.len());
        Ok(videos)
    }

    #[instrument(skip(self, api_key, ids), fields(count = ids.len()))]
    async fn fetch_playlists(
        &self,
        api_key: &ApiKey,
        ids: &[String],
    ) -> Result<Vec<RawPlaylist>, CatalogError> {
        let mut playlists = Vec::with_capacity(ids.len());
        for batch in ids.chunks(MAX_PAGE_SIZE as usize) {
            let params = [
                ("part", "snippet,contentDetails".to_string()),
                ("id", batch.join(",")),
                ("maxResults", MAX_PAGE_SIZE.to_string()),
            ];
            let response: ListResponse<PlaylistResource> =
                self.get_json("playlists", &params, api_key).await?;
            playlists.extend(response.items.into_iter().map(RawPlaylist::from));
        }
        debug!("Fetched {} playlists", playlists.len());
        Ok(playlists)
    }
}
