//! Scripted stand-in for the Data API, for testing the collectors.
//!
//! Responses are queued per endpoint as raw JSON and handed out in order, decoded the same way
//! [`YouTubeClient`](super::YouTubeClient) decodes HTTP bodies. A response missing a required
//! field therefore fails the call just like a real one would. Every request is recorded so tests
//! can assert on call counts and parameters.

use crate::youtube_api::{
    channels::{Channel, ChannelListRequest},
    comments::{CommentThread, CommentThreadListRequest},
    playlist_items::{PlaylistItem, PlaylistItemListRequest},
    service::YouTubeService,
    types::Page,
    videos::{Video, VideoListRequest},
};
use eyre::Context;
use serde::de::DeserializeOwned;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A request as seen by [`MockYouTube`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Channels(ChannelListRequest),
    PlaylistItems(PlaylistItemListRequest),
    Videos(VideoListRequest),
    CommentThreads(CommentThreadListRequest),
}

#[derive(Debug, Default)]
pub struct MockYouTube {
    channels: Mutex<VecDeque<serde_json::Value>>,
    playlist_items: Mutex<VecDeque<serde_json::Value>>,
    videos: Mutex<VecDeque<serde_json::Value>>,
    comment_threads: Mutex<VecDeque<serde_json::Value>>,
    calls: Mutex<Vec<Call>>,
}

impl MockYouTube {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next `channels.list` response.
    pub fn respond_channels(self, page: serde_json::Value) -> Self {
        self.channels.lock().unwrap().push_back(page);
        self
    }

    /// Queue the next `playlistItems.list` response.
    pub fn respond_playlist_items(self, page: serde_json::Value) -> Self {
        self.playlist_items.lock().unwrap().push_back(page);
        self
    }

    /// Queue the next `videos.list` response.
    pub fn respond_videos(self, page: serde_json::Value) -> Self {
        self.videos.lock().unwrap().push_back(page);
        self
    }

    /// Queue the next `commentThreads.list` response.
    pub fn respond_comment_threads(self, page: serde_json::Value) -> Self {
        self.comment_threads.lock().unwrap().push_back(page);
        self
    }

    /// All requests made so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn answer<T: DeserializeOwned>(
        &self,
        call: Call,
        queue: &Mutex<VecDeque<serde_json::Value>>,
    ) -> eyre::Result<Page<T>> {
        self.calls.lock().unwrap().push(call.clone());
        let Some(page) = queue.lock().unwrap().pop_front() else {
            eyre::bail!("no response scripted for {:?}", call);
        };
        serde_json::from_value(page).with_context(|| format!("decode response to {:?}", call))
    }
}

impl YouTubeService for MockYouTube {
    async fn list_channels(&self, request: ChannelListRequest) -> eyre::Result<Page<Channel>> {
        self.answer(Call::Channels(request), &self.channels)
    }

    async fn list_playlist_items(
        &self,
        request: PlaylistItemListRequest,
    ) -> eyre::Result<Page<PlaylistItem>> {
        self.answer(Call::PlaylistItems(request), &self.playlist_items)
    }

    async fn list_videos(&self, request: VideoListRequest) -> eyre::Result<Page<Video>> {
        self.answer(Call::Videos(request), &self.videos)
    }

    async fn list_comment_threads(
        &self,
        request: CommentThreadListRequest,
    ) -> eyre::Result<Page<CommentThread>> {
        self.answer(Call::CommentThreads(request), &self.comment_threads)
    }
}

/// JSON for a playlist item whose title and video ID are both `id`.
pub fn playlist_item(id: &str) -> serde_json::Value {
    serde_json::json!({
        "snippet": {
            "title": id,
            "publishedAt": "2024-01-15T08:30:00Z",
            "videoOwnerChannelTitle": "Owner",
            "channelId": "UCowner",
            "resourceId": { "kind": "youtube#video", "videoId": id }
        }
    })
}

/// JSON for a video with the given ID.
pub fn video(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "snippet": { "title": format!("Video {id}"), "publishedAt": "2023-11-02T17:04:31Z" },
        "contentDetails": { "duration": "PT3M21S" },
        "statistics": { "viewCount": "1200", "likeCount": "87", "commentCount": "9" }
    })
}

/// A page of `items` followed by `next_page_token` (`None` serializes as `null`).
pub fn page(items: Vec<serde_json::Value>, next_page_token: Option<&str>) -> serde_json::Value {
    serde_json::json!({ "items": items, "nextPageToken": next_page_token })
}
