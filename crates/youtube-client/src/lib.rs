//! Video catalog client for the study-video search pipeline.
//!
//! This crate provides:
//! - `CatalogApi`, the three read operations the pipeline depends on
//!   (search by keyword, batch-fetch videos, batch-fetch playlists)
//! - `YouTubeClient`, its implementation over the YouTube Data API v3
//! - `ApiKey`, a credential wrapper that never prints its value
//! - `CatalogError`, transport vs upstream failures

pub mod api;
pub mod client;
pub mod error;

mod wire;

pub use api::{ApiKey, CatalogApi};
pub use client::{YouTubeClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, MAX_PAGE_SIZE};
pub use error::CatalogError;
