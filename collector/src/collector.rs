//! The collection routines: turn identifiers into tables of flat records.
//!
//! Two loops cover every endpoint:
//!
//! - [`collect_paginated`] walks each parent's pages by following `nextPageToken` until the API
//!   stops returning one.
//! - [`collect_batched`] splits a list of IDs into fixed-size chunks and makes one call per chunk.
//!
//! Calls are made one at a time, in input order. The first error aborts the whole collection and
//! no partial table is returned.

use crate::records::{ChannelRecord, CommentRecord, PlaylistItemRecord, VideoRecord};
use crate::table::Table;
use crate::youtube_api::{
    ChannelListRequest, CommentThreadListRequest, Page, PagedStream, PlaylistItemListRequest,
    VideoListRequest, YouTubeService,
};
use eyre::Context;
use std::future::Future;
use tokio_stream::StreamExt;
use tracing::instrument;

/// Items requested per `playlistItems.list` page; the API maximum.
pub const PLAYLIST_PAGE_SIZE: u32 = 50;

/// Video IDs per `videos.list` call.
pub const VIDEO_BATCH_SIZE: usize = 10;

/// Comment threads requested per video. Only the first page is read.
pub const COMMENTS_PER_VIDEO: u32 = 100;

const CHANNEL_PARTS: &str = "snippet,contentDetails,statistics";
const PLAYLIST_ITEM_PARTS: &str = "snippet,contentDetails";
const VIDEO_PARTS: &str = "contentDetails,snippet,statistics";
const COMMENT_THREAD_PARTS: &str = "snippet,replies";

/// Collects every item of every page for each parent, in order.
///
/// `fetch` is called with a parent ID and a continuation token, starting with `None` for each
/// parent and then with whatever the previous page returned. `Some("")` counts as a token.
/// Rows come out parent-major, then page-major, then in page order.
pub async fn collect_paginated<S, T, R, F, Fut>(
    parent_ids: &[S],
    fetch: F,
) -> eyre::Result<Vec<R>>
where
    S: AsRef<str>,
    T: Unpin,
    R: From<T>,
    F: Fn(&str, Option<String>) -> Fut,
    Fut: Future<Output = eyre::Result<Page<T>>>,
{
    let mut records = Vec::new();
    for parent_id in parent_ids {
        let parent_id = parent_id.as_ref();
        let before = records.len();

        let items = PagedStream::new(|page_token| fetch(parent_id, page_token));
        let mut items = std::pin::pin!(items);
        while let Some(item) = items.next().await {
            let item = item.with_context(|| format!("collect items of {}", parent_id))?;
            records.push(R::from(item));
        }

        tracing::trace!(parent_id, rows = records.len() - before, "parent exhausted");
    }
    Ok(records)
}

/// Looks IDs up in chunks of at most `batch_size`, one call per chunk.
///
/// Continuation tokens are ignored. IDs the API does not return are left out without error, and
/// rows keep the order the API gave within each chunk.
pub async fn collect_batched<S, T, R, F, Fut>(
    ids: &[S],
    batch_size: usize,
    fetch: F,
) -> eyre::Result<Vec<R>>
where
    S: AsRef<str>,
    R: From<T>,
    F: Fn(&[S]) -> Fut,
    Fut: Future<Output = eyre::Result<Page<T>>>,
{
    eyre::ensure!(batch_size > 0, "batch size must be positive");

    let mut records = Vec::with_capacity(ids.len());
    for (i, chunk) in ids.chunks(batch_size).enumerate() {
        let page = fetch(chunk)
            .await
            .with_context(|| format!("fetch batch {} ({} ids)", i, chunk.len()))?;
        if page.items.len() < chunk.len() {
            tracing::debug!(
                batch = i,
                requested = chunk.len(),
                returned = page.items.len(),
                "some ids were not found"
            );
        }
        records.extend(page.items.into_iter().map(R::from));
    }
    Ok(records)
}

fn join_ids<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",")
}

/// Statistics and uploads playlist for each channel.
///
/// All IDs go into a single `channels.list` call. Unknown channels are omitted.
#[instrument(skip_all, fields(channels = channel_ids.len()))]
pub async fn get_channel_info<C, S>(
    client: &C,
    channel_ids: &[S],
) -> eyre::Result<Table<ChannelRecord>>
where
    C: YouTubeService,
    S: AsRef<str>,
{
    if channel_ids.is_empty() {
        return Ok(Table::new(Vec::new()));
    }

    let page = client
        .list_channels(ChannelListRequest {
            part: CHANNEL_PARTS,
            id: join_ids(channel_ids),
        })
        .await
        .context("fetch channel details")?;

    let table: Table<ChannelRecord> = page.items.into_iter().map(ChannelRecord::from).collect();
    tracing::info!(rows = table.len(), "collected channels");
    Ok(table)
}

/// Every item of each playlist, following pagination to the end.
#[instrument(skip_all, fields(playlists = playlist_ids.len()))]
pub async fn get_playlist_info<C, S>(
    client: &C,
    playlist_ids: &[S],
) -> eyre::Result<Table<PlaylistItemRecord>>
where
    C: YouTubeService,
    S: AsRef<str>,
{
    let rows = collect_paginated(playlist_ids, move |playlist_id, page_token| {
        client.list_playlist_items(PlaylistItemListRequest {
            part: PLAYLIST_ITEM_PARTS,
            max_results: PLAYLIST_PAGE_SIZE,
            playlist_id: playlist_id.to_string(),
            page_token,
        })
    })
    .await?;

    tracing::info!(rows = rows.len(), "collected playlist items");
    Ok(Table::new(rows))
}

/// Details and statistics for each video, looked up [`VIDEO_BATCH_SIZE`] at a time.
///
/// Deleted or private videos are silently missing from the result.
#[instrument(skip_all, fields(videos = video_ids.len()))]
pub async fn get_video_details<C, S>(
    client: &C,
    video_ids: &[S],
) -> eyre::Result<Table<VideoRecord>>
where
    C: YouTubeService,
    S: AsRef<str>,
{
    let rows = collect_batched(video_ids, VIDEO_BATCH_SIZE, move |chunk| {
        client.list_videos(VideoListRequest {
            part: VIDEO_PARTS,
            id: join_ids(chunk),
        })
    })
    .await?;

    tracing::info!(rows = rows.len(), "collected videos");
    Ok(Table::new(rows))
}

/// Top-level comments for each video, at most [`COMMENTS_PER_VIDEO`] per video.
///
/// One call per video; further pages are not requested.
#[instrument(skip_all, fields(videos = video_ids.len()))]
pub async fn get_video_comments<C, S>(
    client: &C,
    video_ids: &[S],
) -> eyre::Result<Table<CommentRecord>>
where
    C: YouTubeService,
    S: AsRef<str>,
{
    let mut rows = Vec::new();
    for video_id in video_ids {
        let video_id = video_id.as_ref();
        let page = client
            .list_comment_threads(CommentThreadListRequest {
                part: COMMENT_THREAD_PARTS,
                max_results: COMMENTS_PER_VIDEO,
                video_id: video_id.to_string(),
            })
            .await
            .with_context(|| format!("fetch comments of {}", video_id))?;
        rows.extend(page.items.into_iter().map(CommentRecord::from));
    }

    tracing::info!(rows = rows.len(), "collected comments");
    Ok(Table::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube_api::mock::{Call, MockYouTube, page, playlist_item, video};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn playlist_request(playlist_id: &str, page_token: Option<&str>) -> Call {
        Call::PlaylistItems(PlaylistItemListRequest {
            part: "snippet,contentDetails",
            max_results: 50,
            playlist_id: playlist_id.to_string(),
            page_token: page_token.map(str::to_string),
        })
    }

    fn video_ids(table: &Table<PlaylistItemRecord>) -> Vec<&str> {
        table.iter().map(|r| r.video_id.as_str()).collect()
    }

    #[tokio::test]
    async fn two_pages_of_one_playlist() {
        let yt = MockYouTube::new()
            .respond_playlist_items(page(vec![playlist_item("a"), playlist_item("b")], Some("T2")))
            .respond_playlist_items(page(vec![playlist_item("c")], None));

        let table = get_playlist_info(&yt, &["P1"]).await.unwrap();

        assert_eq!(video_ids(&table), vec!["a", "b", "c"]);
        assert_eq!(
            yt.calls(),
            vec![playlist_request("P1", None), playlist_request("P1", Some("T2"))]
        );
    }

    #[tokio::test]
    async fn empty_string_token_means_more_pages() {
        let yt = MockYouTube::new()
            .respond_playlist_items(page(vec![playlist_item("a")], Some("")))
            .respond_playlist_items(page(vec![playlist_item("b")], None));

        let table = get_playlist_info(&yt, &["P1"]).await.unwrap();

        assert_eq!(video_ids(&table), vec!["a", "b"]);
        assert_eq!(
            yt.calls(),
            vec![playlist_request("P1", None), playlist_request("P1", Some(""))]
        );
    }

    #[tokio::test]
    async fn absent_token_field_stops_after_one_page_per_parent() {
        let yt = MockYouTube::new()
            .respond_playlist_items(json!({ "items": [playlist_item("a")] }))
            .respond_playlist_items(json!({ "items": [] }))
            .respond_playlist_items(json!({ "items": [playlist_item("b"), playlist_item("c")] }));

        let table = get_playlist_info(&yt, &["P1", "P2", "P3"]).await.unwrap();

        assert_eq!(video_ids(&table), vec!["a", "b", "c"]);
        assert_eq!(
            yt.calls(),
            vec![
                playlist_request("P1", None),
                playlist_request("P2", None),
                playlist_request("P3", None),
            ]
        );
    }

    #[tokio::test]
    async fn rows_are_parent_major_then_page_major() {
        let full_page: Vec<_> = (0..50).map(|i| playlist_item(&format!("p1-{i}"))).collect();
        let yt = MockYouTube::new()
            .respond_playlist_items(page(full_page, Some("next")))
            .respond_playlist_items(page(vec![playlist_item("p1-50")], None))
            .respond_playlist_items(page(vec![playlist_item("p2-0")], Some("x")))
            .respond_playlist_items(page(vec![], Some("y")))
            .respond_playlist_items(page(vec![playlist_item("p2-1")], None));

        let table = get_playlist_info(&yt, &["P1".to_string(), "P2".to_string()])
            .await
            .unwrap();

        assert_eq!(table.len(), 50 + 1 + 1 + 0 + 1);
        let ids = video_ids(&table);
        assert_eq!(ids[0], "p1-0");
        assert_eq!(ids[49], "p1-49");
        assert_eq!(&ids[50..], ["p1-50", "p2-0", "p2-1"]);
        assert_eq!(yt.calls().len(), 5);
    }

    #[tokio::test]
    async fn missing_field_aborts_everything() {
        let broken = json!({ "snippet": { "title": "no other fields" } });
        let yt = MockYouTube::new()
            .respond_playlist_items(page(vec![playlist_item("a")], None))
            .respond_playlist_items(page(vec![playlist_item("b")], Some("T2")))
            .respond_playlist_items(page(vec![broken], None))
            .respond_playlist_items(page(vec![playlist_item("never")], None));

        let err = get_playlist_info(&yt, &["P1", "P2", "P3"])
            .await
            .unwrap_err();

        assert!(format!("{err:#}").contains("P2"), "{err:#}");
        assert_eq!(
            yt.calls(),
            vec![
                playlist_request("P1", None),
                playlist_request("P2", None),
                playlist_request("P2", Some("T2")),
            ]
        );
    }

    #[tokio::test]
    async fn no_parents_means_no_calls() {
        let yt = MockYouTube::new();
        let empty: [&str; 0] = [];

        assert!(get_playlist_info(&yt, &empty).await.unwrap().is_empty());
        assert!(get_video_details(&yt, &empty).await.unwrap().is_empty());
        assert!(get_channel_info(&yt, &empty).await.unwrap().is_empty());
        assert!(get_video_comments(&yt, &empty).await.unwrap().is_empty());
        assert!(yt.calls().is_empty());
    }

    #[tokio::test]
    async fn twenty_five_videos_take_three_batches() {
        let ids: Vec<String> = (0..25).map(|i| format!("v{i:02}")).collect();
        let mut yt = MockYouTube::new();
        for chunk in ids.chunks(10) {
            // The API does not promise to echo the request order.
            let items = chunk.iter().rev().map(|id| video(id)).collect();
            yt = yt.respond_videos(page(items, None));
        }

        let table = get_video_details(&yt, &ids).await.unwrap();

        let requested: Vec<String> = yt
            .calls()
            .into_iter()
            .map(|call| match call {
                Call::Videos(request) => {
                    assert_eq!(request.part, "contentDetails,snippet,statistics");
                    request.id
                }
                other => panic!("unexpected call {other:?}"),
            })
            .collect();
        assert_eq!(
            requested,
            vec![
                ids[0..10].join(","),
                ids[10..20].join(","),
                ids[20..25].join(","),
            ]
        );

        let returned: Vec<&str> = table.iter().map(|r| r.video_id.as_str()).collect();
        assert_eq!(table.len(), 25);
        assert_eq!(&returned[..3], ["v09", "v08", "v07"]);
        assert_eq!(&returned[20..], ["v24", "v23", "v22", "v21", "v20"]);
    }

    #[tokio::test]
    async fn missing_videos_are_silently_dropped() {
        let yt = MockYouTube::new()
            .respond_videos(page(vec![video("kept1"), video("kept2")], Some("ignored")));

        let table = get_video_details(&yt, &["kept1", "deleted", "kept2"])
            .await
            .unwrap();

        let returned: Vec<&str> = table.iter().map(|r| r.video_id.as_str()).collect();
        assert_eq!(returned, vec!["kept1", "kept2"]);
        assert_eq!(yt.calls().len(), 1);
    }

    #[tokio::test]
    async fn zero_batch_size_is_rejected_before_any_call() {
        let yt = MockYouTube::new().respond_videos(page(vec![video("a")], None));

        let result: eyre::Result<Vec<VideoRecord>> = collect_batched(&["a", "b"], 0, |chunk| {
            yt.list_videos(VideoListRequest {
                part: VIDEO_PARTS,
                id: join_ids(chunk),
            })
        })
        .await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("batch size"), "{err}");
        assert!(yt.calls().is_empty());
    }

    #[tokio::test]
    async fn channels_are_fetched_in_one_call() {
        let yt = MockYouTube::new().respond_channels(page(
            vec![json!({
                "id": "UC1",
                "snippet": { "title": "First" },
                "contentDetails": { "relatedPlaylists": { "uploads": "UU1" } },
                "statistics": { "viewCount": "10", "subscriberCount": "3", "videoCount": "2" }
            })],
            Some("ignored"),
        ));

        let table = get_channel_info(&yt, &["UC1", "UCunknown"]).await.unwrap();

        assert_eq!(
            yt.calls(),
            vec![Call::Channels(ChannelListRequest {
                part: "snippet,contentDetails,statistics",
                id: "UC1,UCunknown".to_string(),
            })]
        );
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].playlist_id, "UU1");
    }

    #[tokio::test]
    async fn comments_take_one_page_per_video() {
        let thread = |id: &str, video_id: &str| {
            json!({
                "id": id,
                "snippet": {
                    "videoId": video_id,
                    "channelId": "UCchan",
                    "topLevelComment": { "snippet": {
                        "publishedAt": "2024-02-03T04:05:06Z",
                        "textDisplay": "nice",
                        "authorDisplayName": "someone",
                        "likeCount": 1
                    }}
                }
            })
        };
        let yt = MockYouTube::new()
            .respond_comment_threads(page(
                vec![thread("c1", "v1"), thread("c2", "v1")],
                Some("more-comments"),
            ))
            .respond_comment_threads(page(vec![thread("c3", "v2")], None));

        let table = get_video_comments(&yt, &["v1", "v2"]).await.unwrap();

        let ids: Vec<&str> = table.iter().map(|r| r.comment_id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c2", "c3"]);
        assert_eq!(
            yt.calls(),
            vec![
                Call::CommentThreads(CommentThreadListRequest {
                    part: "snippet,replies",
                    max_results: 100,
                    video_id: "v1".to_string(),
                }),
                Call::CommentThreads(CommentThreadListRequest {
                    part: "snippet,replies",
                    max_results: 100,
                    video_id: "v2".to_string(),
                }),
            ]
        );
    }

    #[tokio::test]
    async fn client_failure_propagates() {
        // Nothing scripted: the first call fails like a network error would.
        let yt = MockYouTube::new();

        assert!(get_video_details(&yt, &["a"]).await.is_err());
        assert!(get_channel_info(&yt, &["a"]).await.is_err());
    }
}
