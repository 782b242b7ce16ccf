//! YouTube CommentThreads API types.

use serde::{Deserialize, Serialize};

/// Parameters for a `commentThreads.list` call.
///
/// See: <https://developers.google.com/youtube/v3/docs/commentThreads/list>
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentThreadListRequest {
    /// Comma-separated resource parts to include in the response.
    pub part: &'static str,
    /// Maximum number of threads to return (1-100).
    pub max_results: u32,
    pub video_id: String,
}

/// A `commentThread` resource holds a top-level comment and, if requested, its replies.
///
/// See: <https://developers.google.com/youtube/v3/docs/commentThreads#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentThread {
    /// The ID that YouTube uses to uniquely identify the comment thread.
    pub id: String,
    pub snippet: CommentThreadSnippet,
}

/// See: <https://developers.google.com/youtube/v3/docs/commentThreads#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentThreadSnippet {
    #[serde(rename = "videoId")]
    pub video_id: String,
    /// The channel associated with the comments, i.e. the video uploader's channel.
    #[serde(rename = "channelId")]
    pub channel_id: String,
    #[serde(rename = "topLevelComment")]
    pub top_level_comment: Comment,
}

/// A `comment` resource.
///
/// See: <https://developers.google.com/youtube/v3/docs/comments#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Comment {
    pub snippet: CommentSnippet,
}

/// See: <https://developers.google.com/youtube/v3/docs/comments#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentSnippet {
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    /// The comment's text as displayed, possibly containing HTML.
    #[serde(rename = "textDisplay")]
    pub text_display: String,
    #[serde(rename = "authorDisplayName")]
    pub author_display_name: String,
    #[serde(rename = "likeCount")]
    pub like_count: u64,
}
