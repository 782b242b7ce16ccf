//! YouTube Channels API types.

use serde::{Deserialize, Serialize};

/// Parameters for a `channels.list` call.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels/list>
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelListRequest {
    /// Comma-separated resource parts to include in the response.
    pub part: &'static str,
    /// Comma-separated list of channel IDs.
    pub id: String,
}

/// A `channel` resource contains information about a YouTube channel.
///
/// This is a subset of the full resource, containing only the fields that get flattened into a
/// [`ChannelRecord`](crate::records::ChannelRecord).
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Channel {
    /// The ID that YouTube uses to uniquely identify the channel.
    pub id: String,
    pub snippet: ChannelSnippet,
    #[serde(rename = "contentDetails")]
    pub content_details: ChannelContentDetails,
    pub statistics: ChannelStatistics,
}

/// See: <https://developers.google.com/youtube/v3/docs/channels#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelSnippet {
    /// The channel's title.
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// See: <https://developers.google.com/youtube/v3/docs/channels#contentDetails>
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelContentDetails {
    #[serde(rename = "relatedPlaylists")]
    pub related_playlists: RelatedPlaylists,
}

/// Playlists associated with the channel.
#[derive(Debug, Serialize, Deserialize)]
pub struct RelatedPlaylists {
    /// The ID of the playlist that contains the channel's uploaded videos.
    pub uploads: String,
}

/// Channel statistics.
///
/// The API reports every counter as a decimal string. `subscriberCount` is missing when the
/// channel hides it, in which case the channel fails to decode.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#statistics>
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelStatistics {
    #[serde(rename = "viewCount")]
    pub view_count: String,
    #[serde(rename = "subscriberCount")]
    pub subscriber_count: String,
    #[serde(rename = "videoCount")]
    pub video_count: String,
}
