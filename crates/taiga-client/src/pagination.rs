//! Pagination engine.
//!
//! Two modes over the upstream's `page`/`page_size` query parameters:
//!
//! - **drain**: request pages 1, 2, 3, ... until a page comes back shorter
//!   than the page size (or empty), concatenating items in order.
//! - **search**: request exactly one page and read the totals from the
//!   `x-pagination-count`, `x-pagination-current` and
//!   `x-pagination-num-pages` headers.

use serde::de::DeserializeOwned;
use taiga_core::pagination::Page;

use crate::error::ClientError;
use crate::http::pagination_from_headers;
use crate::session::SessionClient;

/// Items collected by a drain.
#[derive(Debug)]
pub struct Drained<T> {
    pub items: Vec<T>,
    /// Number of page requests issued.
    pub requests: u32,
    /// Set when a page after the first failed and the listing was cut short.
    pub interrupted: Option<ClientError>,
}

impl<T> Drained<T> {
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.interrupted.is_none()
    }

    /// Map every item, keeping the counters.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Drained<U> {
        Drained {
            items: self.items.into_iter().map(f).collect(),
            requests: self.requests,
            interrupted: self.interrupted,
        }
    }
}

fn page_query(filters: &[(&str, String)], page: u32, page_size: u32) -> Vec<(String, String)> {
    filters
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .chain([
            ("page".to_string(), page.to_string()),
            ("page_size".to_string(), page_size.to_string()),
        ])
        .collect()
}

impl SessionClient<'_> {
    /// Fetch one page of `path` and the counters from its headers.
    pub(crate) async fn fetch_page<R: DeserializeOwned>(
        &self,
        path: &str,
        filters: &[(&str, String)],
        page: u32,
        page_size: u32,
    ) -> Result<Page<R>, ClientError> {
        let resp = self
            .get(path, &page_query(filters, page, page_size))
            .await?;
        let pagination = pagination_from_headers(resp.headers(), page, page_size);
        let bytes = resp.bytes().await?;
        let items: Vec<R> =
            serde_json::from_slice(&bytes).map_err(|e| ClientError::Parse(e.to_string()))?;
        Ok(Page { items, pagination })
    }

    /// Fetch every page of `path`.
    ///
    /// A failure on the first page is returned as an error. A 404 on a later
    /// page ends the listing (some upstream versions answer one past the last
    /// page that way); any other later failure is logged, recorded in
    /// [`Drained::interrupted`], and the items gathered so far are returned.
    ///
    /// # Errors
    ///
    /// Returns the first page's error if the first request fails.
    pub async fn drain<R: DeserializeOwned>(
        &self,
        path: &str,
        filters: &[(&str, String)],
    ) -> Result<Drained<R>, ClientError> {
        let page_size = self.page_size();
        let mut items = Vec::new();
        let mut page = 1_u32;
        let mut interrupted = None;

        loop {
            let batch = match self.fetch_page::<R>(path, filters, page, page_size).await {
                Ok(batch) => batch.items,
                Err(error) if page == 1 => return Err(error),
                Err(error) if error.upstream_status() == Some(404) => {
                    tracing::debug!(path, page, "page past the end, listing complete");
                    break;
                }
                Err(error) => {
                    tracing::warn!(path, page, %error, "listing interrupted, returning partial results");
                    interrupted = Some(error);
                    break;
                }
            };

            let received = batch.len();
            items.extend(batch);
            if received < page_size as usize {
                break;
            }
            page += 1;
        }

        tracing::debug!(path, requests = page, items = items.len(), "listing drained");
        Ok(Drained {
            items,
            requests: page,
            interrupted,
        })
    }

    /// Fetch exactly one page of `path`.
    ///
    /// `page` is sent as given; an out-of-range page returns whatever the
    /// upstream answers. Missing pagination headers fall back to
    /// `total = 0`, the requested page, and `total_pages = 1`.
    ///
    /// # Errors
    ///
    /// Returns any transport, status or decoding error.
    pub async fn search_page<R: DeserializeOwned>(
        &self,
        path: &str,
        filters: &[(&str, String)],
        page: u32,
        page_size: u32,
    ) -> Result<Page<R>, ClientError> {
        let page_size = if page_size == 0 { self.page_size() } else { page_size };
        self.fetch_page(path, filters, page, page_size).await
    }
}

/// Map a page's items, keeping its counters.
pub fn map_page<T, U>(page: Page<T>, f: impl FnMut(T) -> U) -> Page<U> {
    Page {
        items: page.items.into_iter().map(f).collect(),
        pagination: page.pagination,
    }
}
