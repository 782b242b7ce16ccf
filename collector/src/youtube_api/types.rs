//! Shared types and paging infrastructure for the YouTube API client.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context as TaskContext, Poll};
use tokio_stream::Stream;

type OneFuturePage<'a, F, T> = Pin<Box<dyn Future<Output = eyre::Result<(F, Page<T>)>> + 'a>>;

/// One page of a `*.list` response.
///
/// Every list endpoint of the Data API shares this envelope; only the item type differs.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos/list#response>
#[derive(Debug, Serialize, Deserialize)]
pub struct Page<T> {
    /// Identifies the API resource's type, e.g. `youtube#playlistItemListResponse`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// The resources on this page, in the order the API returned them.
    pub items: VecDeque<T>,
    #[serde(
        rename = "pageInfo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub page_info: Option<PageInfo>,
    /// Token for the `pageToken` parameter of the next request.
    ///
    /// `None` (absent or `null`) ends the stream. An empty string is still a token.
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

impl<T> Page<T> {
    /// A page holding `items` followed by `next_page_token`.
    pub fn new(items: impl IntoIterator<Item = T>, next_page_token: Option<String>) -> Self {
        Self {
            kind: None,
            items: items.into_iter().collect(),
            page_info: None,
            next_page_token,
        }
    }
}

/// A paginated stream that automatically fetches subsequent pages from a YouTube API list endpoint.
///
/// This stream yields items one by one, fetching the next page only once the current page is
/// exhausted. Requests are therefore issued strictly one after another. Only forward
/// pagination is supported.
pub struct PagedStream<'a, T, F> {
    /// Current batch of items from the most recent API response
    current_items: VecDeque<T>,
    /// Future representing the currently pending API request, if any
    pending_request: Option<OneFuturePage<'a, F, T>>,
    /// Whether we've reached the end of all available data
    is_done: bool,
}

impl<'a, T, F> PagedStream<'a, T, F> {
    /// Create a new PagedStream whose first request carries no page token.
    pub fn new<Fut>(fetcher: F) -> Self
    where
        F: Fn(Option<String>) -> Fut,
        F: 'a,
        Fut: Future<Output = eyre::Result<Page<T>>> + 'a,
    {
        let first_page = async move {
            let page = fetcher(None).await?;
            Ok((fetcher, page))
        };
        Self {
            pending_request: Some(Box::pin(first_page)),
            current_items: VecDeque::new(),
            is_done: false,
        }
    }
}

impl<'a, T: Unpin, F> Unpin for PagedStream<'a, T, F> {}

impl<'a, T: Unpin, F, Fut> Stream for PagedStream<'a, T, F>
where
    F: Fn(Option<String>) -> Fut,
    F: 'a,
    Fut: Future<Output = eyre::Result<Page<T>>> + 'a,
{
    type Item = eyre::Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut TaskContext<'_>) -> Poll<Option<Self::Item>> {
        loop {
            if let Some(item) = self.current_items.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            if self.is_done {
                return Poll::Ready(None);
            }

            if let Some(pending) = self.pending_request.as_mut() {
                match pending.as_mut().poll(cx) {
                    Poll::Ready(Ok((fetcher, page))) => {
                        self.current_items.extend(page.items);

                        if let Some(next_token) = page.next_page_token {
                            // Set up the next request, but don't poll it until this page is drained.
                            self.pending_request = Some(Box::pin(async move {
                                let page = fetcher(Some(next_token)).await?;
                                Ok((fetcher, page))
                            }));
                        } else {
                            self.is_done = true;
                            self.pending_request = None;
                        }
                    }
                    Poll::Ready(Err(e)) => {
                        self.pending_request = None;
                        self.is_done = true;
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => return Poll::Pending,
                }
            } else {
                self.is_done = true;
                return Poll::Ready(None);
            }
        }
    }
}

/// Paging details for lists of resources.
///
/// See: <https://developers.google.com/youtube/v3/docs/pageInfo>
#[derive(Debug, Serialize, Deserialize)]
pub struct PageInfo {
    /// The total number of results in the result set.
    #[serde(rename = "totalResults")]
    pub total_results: u32,
    /// The number of results included in the API response.
    #[serde(rename = "resultsPerPage")]
    pub results_per_page: u32,
}
