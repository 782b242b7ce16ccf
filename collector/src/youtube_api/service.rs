//! The list operations the collectors need from the Data API.

use crate::youtube_api::{
    channels::{Channel, ChannelListRequest},
    comments::{CommentThread, CommentThreadListRequest},
    playlist_items::{PlaylistItem, PlaylistItemListRequest},
    types::Page,
    videos::{Video, VideoListRequest},
};
use std::future::Future;

/// One `list` call per resource type, each returning a single [`Page`].
///
/// [`YouTubeClient`](crate::youtube_api::YouTubeClient) implements this over HTTP. Anything else
/// that can answer these calls, such as a canned test double, can stand in for it.
///
/// Implementations must fail the call if an item lacks a field the item type requires.
pub trait YouTubeService {
    fn list_channels(
        &self,
        request: ChannelListRequest,
    ) -> impl Future<Output = eyre::Result<Page<Channel>>>;

    fn list_playlist_items(
        &self,
        request: PlaylistItemListRequest,
    ) -> impl Future<Output = eyre::Result<Page<PlaylistItem>>>;

    fn list_videos(
        &self,
        request: VideoListRequest,
    ) -> impl Future<Output = eyre::Result<Page<Video>>>;

    fn list_comment_threads(
        &self,
        request: CommentThreadListRequest,
    ) -> impl Future<Output = eyre::Result<Page<CommentThread>>>;
}
