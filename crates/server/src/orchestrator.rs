//! # Search Orchestrator
//!
//! Coordinates one search request end to end:
//! 1. Check the credential and the query
//! 2. Fetch raw items per requested kind (cache first, then the catalog)
//! 3. Normalize (classify) every item
//! 4. Apply the filter pipeline
//! 5. Rank the survivors
//! 6. Attach display URLs

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, instrument};

use catalog::{ItemKind, NormalizedRecord, RawItem, SearchFilters};
use classifier::{Normalizer, TextClassifier};
use pipeline::{rank, FilterPipeline};
use youtube_client::{ApiKey, CatalogApi, YouTubeClient};

use crate::cache::{CacheKey, ResultCache, TtlCache};
use crate::config::SearchConfig;
use crate::error::SearchError;

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";
const PLAYLIST_URL: &str = "https://www.youtube.com/playlist?list=";

/// Link a user can open for an item
pub fn display_url(kind: ItemKind, id: &str) -> String {
    match kind {
        ItemKind::Video => format!("{}{}", WATCH_URL, id),
        ItemKind::Playlist => format!("{}{}", PLAYLIST_URL, id),
    }
}

/// A ranked record ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayableResult {
    pub kind: ItemKind,
    pub url: String,
    #[serde(flatten)]
    pub record: NormalizedRecord,
}

impl From<NormalizedRecord> for DisplayableResult {
    fn from(record: NormalizedRecord) -> Self {
        Self {
            kind: record.kind(),
            url: display_url(record.kind(), &record.id),
            record,
        }
    }
}

/// Ranked results of one search; empty means "no matches, relax filters"
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub query: String,
    pub results: Vec<DisplayableResult>,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }
}

/// Main orchestrator for study-video searches
#[derive(Clone)]
pub struct SearchOrchestrator {
    api: Arc<dyn CatalogApi>,
    cache: Arc<dyn ResultCache>,
    config: SearchConfig,
    normalizer: Normalizer,
    filter_pipeline: Arc<FilterPipeline>,
}

impl SearchOrchestrator {
    /// Create an orchestrator over an explicit catalog and cache
    pub fn new(api: Arc<dyn CatalogApi>, cache: Arc<dyn ResultCache>, config: SearchConfig) -> Self {
        let classifier = TextClassifier::new().with_level_fallback(config.level_fallback);
        let normalizer = Normalizer::new(classifier).with_excerpt_chars(config.excerpt_chars);

        Self {
            api,
            cache,
            config,
            normalizer,
            filter_pipeline: Arc::new(FilterPipeline::standard()),
        }
    }

    /// Orchestrator backed by the YouTube Data API and an in-memory TTL cache
    pub fn from_config(config: SearchConfig) -> Result<Self, SearchError> {
        let client = YouTubeClient::new(config.base_url.clone(), config.request_timeout)?;
        let cache = TtlCache::new(config.cache_ttl);
        Ok(Self::new(Arc::new(client), Arc::new(cache), config))
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Main entry point: search, classify, filter and rank
    ///
    /// # Errors
    /// - `Configuration` when no credential is configured (nothing is fetched)
    /// - `EmptyQuery` for blank query text
    /// - `Catalog` when any catalog call fails; no partial results are returned
    #[instrument(skip(self, filters), fields(kind = ?filters.result_kind))]
    pub async fn search(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<SearchOutcome, SearchError> {
        let start_time = Instant::now();

        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(SearchError::missing_api_key)?;

        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let mut raw_items = Vec::new();
        for &kind in filters.result_kind.kinds() {
            raw_items.extend(self.fetch_kind(api_key, query, kind).await?);
        }
        info!("Fetched {} raw items", raw_items.len());

        let ranked = self.process(raw_items, filters).await?;
        info!(
            "Search for {:?} returned {} results in {:.2?}",
            query,
            ranked.len(),
            start_time.elapsed()
        );

        Ok(SearchOutcome {
            query: query.to_string(),
            results: ranked.into_iter().map(DisplayableResult::from).collect(),
        })
    }

    /// Raw items of one kind, in search order
    async fn fetch_kind(
        &self,
        api_key: &ApiKey,
        query: &str,
        kind: ItemKind,
    ) -> Result<Vec<RawItem>, SearchError> {
        let key = CacheKey::new(query, kind);
        if let Some(items) = self.cache.get(&key) {
            debug!("Cache hit for {} results ({} items)", kind, items.len());
            return Ok(items);
        }

        let ids = self
            .api
            .search_ids(api_key, query, kind, self.config.effective_max_results())
            .await?;

        let fetched: Vec<RawItem> = if ids.is_empty() {
            Vec::new()
        } else {
            match kind {
                ItemKind::Video => self
                    .api
                    .fetch_videos(api_key, &ids)
                    .await?
                    .into_iter()
                    .map(RawItem::from)
                    .collect(),
                ItemKind::Playlist => self
                    .api
                    .fetch_playlists(api_key, &ids)
                    .await?
                    .into_iter()
                    .map(RawItem::from)
                    .collect(),
            }
        };

        let items = in_search_order(&ids, fetched);
        self.cache.put(key, items.clone());
        Ok(items)
    }

    /// Normalize, filter and rank off the async runtime
    async fn process(
        &self,
        raw_items: Vec<RawItem>,
        filters: &SearchFilters,
    ) -> Result<Vec<NormalizedRecord>, SearchError> {
        let normalizer = self.normalizer.clone();
        let filter_pipeline = self.filter_pipeline.clone();
        let filters = filters.clone();

        tokio::task::spawn_blocking(move || {
            let records = normalizer.normalize_all(&raw_items);
            let admitted = filter_pipeline.apply(records, &filters);
            debug!("{} records admitted by filters", admitted.len());
            rank(admitted, &filters)
        })
        .await
        .map_err(|err| SearchError::Processing(err.to_string()))
    }
}

/// Re-order fetched items to match the search ranking.
/// Ids the batch fetch did not return are skipped.
fn in_search_order(ids: &[String], fetched: Vec<RawItem>) -> Vec<RawItem> {
    let mut by_id: HashMap<String, RawItem> = fetched
        .into_iter()
        .map(|item| (item.id().to_string(), item))
        .collect();
    ids.iter().filter_map(|id| by_id.remove(id)).collect()
}
