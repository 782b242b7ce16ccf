//! YouTube Videos API types.

use serde::{Deserialize, Serialize};

/// Parameters for a `videos.list` call.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos/list>
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoListRequest {
    /// Comma-separated resource parts to include in the response.
    pub part: &'static str,
    /// Comma-separated list of video IDs.
    pub id: String,
}

/// A `video` resource represents a YouTube video.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Video {
    /// The ID that YouTube uses to uniquely identify the video.
    pub id: String,
    pub snippet: VideoSnippet,
    #[serde(rename = "contentDetails")]
    pub content_details: VideoContentDetails,
    pub statistics: VideoStatistics,
}

/// See: <https://developers.google.com/youtube/v3/docs/videos#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoSnippet {
    /// The video's title.
    pub title: String,
    /// The date and time that the video was published.
    #[serde(rename = "publishedAt")]
    pub published_at: String,
}

/// See: <https://developers.google.com/youtube/v3/docs/videos#contentDetails>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoContentDetails {
    /// The length of the video as an ISO 8601 duration, e.g. `PT4M13S`.
    pub duration: String,
}

/// Statistics about the video.
///
/// `likeCount` and `commentCount` disappear when likes are hidden or comments are disabled.
/// Such videos fail to decode.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#statistics>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoStatistics {
    /// The number of times the video has been viewed.
    #[serde(rename = "viewCount")]
    pub view_count: String,
    /// The number of users who have indicated that they liked the video.
    #[serde(rename = "likeCount")]
    pub like_count: String,
    /// The number of comments for the video.
    #[serde(rename = "commentCount")]
    pub comment_count: String,
}
