//! HTTP implementation of [`YouTubeService`] on top of `reqwest`.

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
use tracing::instrument;

/// Where the Data API v3 lives.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Client for the read-only parts of the YouTube Data API v3.
///
/// Requests are authorized with an API key that the caller obtains elsewhere. The client never
/// refreshes, stores or validates it; an unusable key simply makes every call fail.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    /// API key sent as the `key` query parameter
    api_key: String,
    /// Base URL of the Data API, without a trailing slash
    base_url: String,
    /// HTTP client for API requests
    client: reqwest::Client,
}

impl YouTubeClient {
    /// Creates a client that talks to [`DEFAULT_BASE_URL`].
    ///
    /// # Arguments
    ///
    /// * `api_key` - A Data API key with access to public data
    /// * `client` - Shared HTTP client for making API requests
    pub fn new(api_key: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client,
        }
    }

    /// Points the client at a different API root, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Issues `GET {base_url}/{resource}` and decodes the body as one page of `T`.
    ///
    /// The API key is appended to `query_params`. Non-success statuses are turned into errors
    /// that carry the response body, which is where the API explains quota and key problems.
    #[instrument(skip(self, query_params), level = tracing::Level::TRACE)]
    async fn list<T: DeserializeOwned>(
        &self,
        resource: &str,
        query_params: &[(&str, &str)],
    ) -> eyre::Result<Page<T>> {
        let url = format!("{}/{}", self.base_url, resource);

        let response = self
            .client
            .get(&url)
            .query(query_params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .with_context(|| format!("send GET request to YouTube API: {}", url))?;

        let status_code = response.status();
        if !status_code.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(eyre::eyre!(
                "YouTube API {} request failed with status {}: {}",
                resource,
                status_code,
                error_text
            ));
        }

        let page: Page<T> = response
            .json()
            .await
            .with_context(|| format!("parse YouTube {} API response as JSON", resource))?;

        tracing::debug!(
            resource,
            returned_items = page.items.len(),
            has_next_page = page.next_page_token.is_some(),
            "fetched page"
        );

        Ok(page)
    }
}

impl YouTubeService for YouTubeClient {
    /// Calls `channels.list` for a comma-separated set of channel IDs.
    ///
    /// <https://developers.google.com/youtube/v3/docs/channels/list>
    #[instrument(skip(self))]
    async fn list_channels(&self, request: ChannelListRequest) -> eyre::Result<Page<Channel>> {
        let query_params = [("part", request.part), ("id", request.id.as_str())];
        self.list("channels", &query_params).await
    }

    /// Calls `playlistItems.list` for one page of a playlist.
    ///
    /// <https://developers.google.com/youtube/v3/docs/playlistItems/list>
    #[instrument(skip(self))]
    async fn list_playlist_items(
        &self,
        request: PlaylistItemListRequest,
    ) -> eyre::Result<Page<PlaylistItem>> {
        let max_results_string = request.max_results.to_string();
        let mut query_params = vec![
            ("part", request.part),
            ("maxResults", max_results_string.as_str()),
            ("playlistId", request.playlist_id.as_str()),
        ];

        // Add pageToken if provided
        if let Some(ref token) = request.page_token {
            query_params.push(("pageToken", token.as_str()));
        }

        self.list("playlistItems", &query_params).await
    }

    /// Calls `videos.list` for a comma-separated set of video IDs.
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/list>
    #[instrument(skip(self))]
    async fn list_videos(&self, request: VideoListRequest) -> eyre::Result<Page<Video>> {
        let query_params = [("part", request.part), ("id", request.id.as_str())];
        self.list("videos", &query_params).await
    }

    /// Calls `commentThreads.list` for the comments on a single video.
    ///
    /// <https://developers.google.com/youtube/v3/docs/commentThreads/list>
    #[instrument(skip(self))]
    async fn list_comment_threads(
        &self,
        request: CommentThreadListRequest,
    ) -> eyre::Result<Page<CommentThread>> {
        let max_results_string = request.max_results.to_string();
        let query_params = [
            ("part", request.part),
            ("maxResults", max_results_string.as_str()),
            ("videoId", request.video_id.as_str()),
        ];
        self.list("commentThreads", &query_params).await
    }
}
