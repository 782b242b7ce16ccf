//! YouTube Data API v3 client library.
//!
//! This module covers the four read-only `list` endpoints the collectors use:
//!
//! - [`channels`]: `channels.list`, statistics and the uploads playlist of a channel
//! - [`playlist_items`]: `playlistItems.list`, the videos in a playlist, paginated
//! - [`videos`]: `videos.list`, details and statistics of up to 50 videos per call
//! - [`comments`]: `commentThreads.list`, the top-level comments on a video
//!
//! The resource types only model the fields that end up in a record, and model them as
//! required. A response that lacks one of them fails to decode, and so does the call.
//!
//! The endpoints are reached through the [`YouTubeService`] trait. [`YouTubeClient`] implements
//! it over HTTP with an API key.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use tokio_stream::StreamExt;
//! use youtube_data_collector::youtube_api::{
//!     PagedStream, PlaylistItemListRequest, YouTubeClient, YouTubeService,
//! };
//!
//! # async fn example() -> eyre::Result<()> {
//! let client = YouTubeClient::new("my-api-key", reqwest::Client::new());
//!
//! let items = PagedStream::new(|page_token| {
//!     client.list_playlist_items(PlaylistItemListRequest {
//!         part: "snippet",
//!         max_results: 50,
//!         playlist_id: "UU_x5XG1OV2P6uZZ5FSM9Ttw".to_string(),
//!         page_token,
//!     })
//! });
//! let mut items = std::pin::pin!(items);
//! while let Some(item) = items.next().await {
//!     println!("{}", item?.snippet.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod channels;
pub mod client;
pub mod comments;
#[cfg(test)]
pub(crate) mod mock;
pub mod playlist_items;
pub mod service;
pub mod types;
pub mod videos;

pub use client::YouTubeClient;
pub use service::YouTubeService;
pub use types::{Page, PageInfo, PagedStream};

pub use channels::{Channel, ChannelListRequest, ChannelSnippet, ChannelStatistics};
pub use comments::{Comment, CommentSnippet, CommentThread, CommentThreadListRequest};
pub use playlist_items::{PlaylistItem, PlaylistItemListRequest, PlaylistItemSnippet};
pub use videos::{Video, VideoListRequest, VideoStatistics};
