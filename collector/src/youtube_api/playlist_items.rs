//! YouTube PlaylistItems API types.

use serde::{Deserialize, Serialize};

/// Parameters for a `playlistItems.list` call.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems/list>
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistItemListRequest {
    /// Comma-separated resource parts to include in the response.
    pub part: &'static str,
    /// Maximum number of items per page (0-50).
    pub max_results: u32,
    pub playlist_id: String,
    /// Continuation token from the previous page, `None` for the first page.
    pub page_token: Option<String>,
}

/// A `playlistItem` resource identifies a video that is part of a playlist.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub snippet: PlaylistItemSnippet,
}

/// See: <https://developers.google.com/youtube/v3/docs/playlistItems#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistItemSnippet {
    /// The item's title.
    pub title: String,
    /// The date and time that the item was added to the playlist.
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    /// The title of the channel that uploaded this video.
    ///
    /// Missing for private and deleted videos.
    #[serde(rename = "videoOwnerChannelTitle")]
    pub video_owner_channel_title: String,
    /// The ID of the channel that the playlist belongs to.
    #[serde(rename = "channelId")]
    pub channel_id: String,
    #[serde(rename = "resourceId")]
    pub resource_id: ResourceId,
}

/// Identifies the resource that the playlist item points to.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResourceId {
    #[serde(rename = "videoId")]
    pub video_id: String,
}
