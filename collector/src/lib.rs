//! Collect YouTube channel, playlist, video and comment metadata into flat tables.
//!
//! Each of [`get_channel_info`], [`get_playlist_info`], [`get_video_details`] and
//! [`get_video_comments`] takes anything implementing [`YouTubeService`] plus a list of IDs, and
//! returns a [`Table`] with one [`Record`] per item the API returned.
//!
//! ```rust,no_run
//! use youtube_data_collector::{YouTubeClient, get_channel_info, get_playlist_info};
//!
//! # async fn example() -> eyre::Result<()> {
//! let yt = YouTubeClient::new(std::env::var("YOUTUBE_API_KEY")?, reqwest::Client::new());
//!
//! let channels = get_channel_info(&yt, &["UC_x5XG1OV2P6uZZ5FSM9Ttw"]).await?;
//! let uploads: Vec<_> = channels.iter().map(|c| c.playlist_id.clone()).collect();
//! let videos = get_playlist_info(&yt, &uploads).await?;
//! videos.write_csv(std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

pub mod collector;
pub mod records;
pub mod table;
pub mod youtube_api;

pub use collector::{
    collect_batched, collect_paginated, get_channel_info, get_playlist_info, get_video_comments,
    get_video_details,
};
pub use records::{ChannelRecord, CommentRecord, PlaylistItemRecord, VideoRecord};
pub use table::{Record, Table};
pub use youtube_api::{YouTubeClient, YouTubeService};
