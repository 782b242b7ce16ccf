//! Flat rows produced from the nested API resources.
//!
//! Each record takes exactly the fields listed below from its resource. The resource types make
//! every one of them mandatory, so a record can only exist if the API supplied all of them.

use crate::table::Record;
use crate::youtube_api::{Channel, CommentThread, PlaylistItem, Video};
use serde::Serialize;

/// One channel from `channels.list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelRecord {
    pub channel_name: String,
    pub view_count: String,
    pub subscriber_count: String,
    pub video_count: String,
    pub channel_id: String,
    /// The channel's uploads playlist, suitable for [`get_playlist_info`](crate::get_playlist_info).
    pub playlist_id: String,
}

impl Record for ChannelRecord {
    const COLUMNS: &'static [&'static str] = &[
        "channel_name",
        "view_count",
        "subscriber_count",
        "video_count",
        "channel_id",
        "playlist_id",
    ];
}

impl From<Channel> for ChannelRecord {
    fn from(channel: Channel) -> Self {
        Self {
            channel_name: channel.snippet.title,
            view_count: channel.statistics.view_count,
            subscriber_count: channel.statistics.subscriber_count,
            video_count: channel.statistics.video_count,
            channel_id: channel.id,
            playlist_id: channel.content_details.related_playlists.uploads,
        }
    }
}

/// One entry of a playlist from `playlistItems.list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistItemRecord {
    pub title: String,
    pub published_at: String,
    /// The channel that uploaded the video, not necessarily the playlist owner.
    pub channel_name: String,
    /// The channel that owns the playlist.
    pub channel_id: String,
    pub video_id: String,
}

impl Record for PlaylistItemRecord {
    const COLUMNS: &'static [&'static str] =
        &["title", "published_at", "channel_name", "channel_id", "video_id"];
}

impl From<PlaylistItem> for PlaylistItemRecord {
    fn from(item: PlaylistItem) -> Self {
        let snippet = item.snippet;
        Self {
            title: snippet.title,
            published_at: snippet.published_at,
            channel_name: snippet.video_owner_channel_title,
            channel_id: snippet.channel_id,
            video_id: snippet.resource_id.video_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoRecord {
    pub video_id: String,
    pub title: String,
    pub published_at: String,
    /// ISO 8601 duration as reported by the API.
    pub duration: String,
    pub view_count: String,
    pub like_count: String,
    pub comment_count: String,
}

impl Record for VideoRecord {
    const COLUMNS: &'static [&'static str] = &[
        "video_id",
        "title",
        "published_at",
        "duration",
        "view_count",
        "like_count",
        "comment_count",
    ];
}

impl From<Video> for VideoRecord {
    fn from(video: Video) -> Self {
        Self {
            video_id: video.id,
            title: video.snippet.title,
            published_at: video.snippet.published_at,
            duration: video.content_details.duration,
            view_count: video.statistics.view_count,
            like_count: video.statistics.like_count,
            comment_count: video.statistics.comment_count,
        }
    }
}

/// The top-level comment of a comment thread. Replies are not flattened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentRecord {
    /// The comment thread's ID.
    pub comment_id: String,
    pub video_id: String,
    pub channel_id: String,
    pub published_at: String,
    pub text_display: String,
    pub author_name: String,
    pub like_count: u64,
}

impl Record for CommentRecord {
    const COLUMNS: &'static [&'static str] = &[
        "comment_id",
        "video_id",
        "channel_id",
        "published_at",
        "text_display",
        "author_name",
        "like_count",
    ];
}

impl From<CommentThread> for CommentRecord {
    fn from(thread: CommentThread) -> Self {
        let comment = thread.snippet.top_level_comment.snippet;
        Self {
            comment_id: thread.id,
            video_id: thread.snippet.video_id,
            channel_id: thread.snippet.channel_id,
            published_at: comment.published_at,
            text_display: comment.text_display,
            author_name: comment.author_display_name,
            like_count: comment.like_count,
        }
    }
}
