//! JSON payloads of the YouTube Data API v3, and their mapping to raw items.
//!
//! Only the fields the search pipeline reads are modelled; everything is
//! optional so partial resources still decode.

use catalog::{RawPlaylist, RawVideo};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResult {
    pub id: SearchResultId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchResultId {
    pub video_id: Option<String>,
    pub playlist_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Snippet {
    pub title: Option<String>,
    pub description: Option<String>,
    pub channel_title: Option<String>,
    pub published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VideoResource {
    pub id: String,
    #[serde(default)]
    pub snippet: Snippet,
    pub content_details: Option<VideoContentDetails>,
    pub statistics: Option<VideoStatistics>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoContentDetails {
    pub duration: Option<String>,
    /// "true" or "false"
    pub caption: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VideoStatistics {
    /// Counts are encoded as decimal strings
    pub view_count: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaylistResource {
    pub id: String,
    #[serde(default)]
    pub snippet: Snippet,
    pub content_details: Option<PlaylistContentDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaylistContentDetails {
    pub item_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<ErrorItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorItem {
    pub reason: Option<String>,
}

impl From<VideoResource> for RawVideo {
    fn from(resource: VideoResource) -> Self {
        let (duration, has_captions) = match resource.content_details {
            Some(details) => (
                details.duration,
                details.caption.as_deref() == Some("true"),
            ),
            None => (None, false),
        };
        let view_count = resource
            .statistics
            .and_then(|stats| stats.view_count)
            .and_then(|count| count.parse::<u64>().ok());

        RawVideo {
            id: resource.id,
            title: resource.snippet.title,
            description: resource.snippet.description,
            channel: resource.snippet.channel_title,
            published_at: resource.snippet.published_at,
            duration,
            has_captions,
            view_count,
        }
    }
}

impl From<PlaylistResource> for RawPlaylist {
    fn from(resource: PlaylistResource) -> Self {
        RawPlaylist {
            id: resource.id,
            title: resource.snippet.title,
            description: resource.snippet.description,
            channel: resource.snippet.channel_title,
            published_at: resource.snippet.published_at,
            item_count: resource.content_details.and_then(|d| d.item_count),
        }
    }
}

/// Human-readable detail for a failed call: "message (reason)" from the
/// Google error envelope, else the trimmed body, else a generic note.
pub(crate) fn error_detail(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        let reason = envelope
            .error
            .errors
            .iter()
            .find_map(|item| item.reason.clone());
        match (envelope.error.message, reason) {
            (Some(message), Some(reason)) => return format!("{} ({})", message, reason),
            (Some(message), None) => return message,
            (None, Some(reason)) => return reason,
            (None, None) => {}
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no error detail provided".to_string()
    } else {
        trimmed.chars().take(300).collect()
    }
}
