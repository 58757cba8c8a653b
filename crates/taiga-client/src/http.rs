//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (non-success → [`ClientError::Upstream`]
//! with a truncated body) and pagination header parsing, so the entity
//! modules stay focused on request construction and response mapping.

use reqwest::header::HeaderMap;
use taiga_core::pagination::Pagination;

use crate::error::ClientError;

/// Upstream bodies embedded in error messages are cut to this many characters.
pub const MAX_ERROR_BODY_CHARS: usize = 200;

pub const HEADER_COUNT: &str = "x-pagination-count";
pub const HEADER_CURRENT: &str = "x-pagination-current";
pub const HEADER_NUM_PAGES: &str = "x-pagination-num-pages";

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success, otherwise
/// [`ClientError::Upstream`] with the status code and the upstream message
/// (the `_error_message`/`detail` field when the body is JSON, the raw body
/// otherwise), truncated to [`MAX_ERROR_BODY_CHARS`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::Upstream {
        status,
        message: upstream_message(&body),
    })
}

/// Extract the human message from an upstream error body.
pub fn upstream_message(body: &str) -> String {
    let extracted = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["_error_message", "detail"]
                .iter()
                .find_map(|key| value.get(key).and_then(|v| v.as_str()).map(String::from))
        });
    truncate(extracted.as_deref().unwrap_or(body), MAX_ERROR_BODY_CHARS)
}

/// Cut `text` to at most `max` characters, respecting char boundaries.
pub fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Read the pagination counters from response headers.
///
/// Missing or unparseable headers fall back to `total = 0`,
/// `page = requested page`, `total_pages = 1`.
pub fn pagination_from_headers(headers: &HeaderMap, page: u32, page_size: u32) -> Pagination {
    let fallback = Pagination::fallback(page, page_size);
    Pagination {
        total: header_number(headers, HEADER_COUNT).unwrap_or(fallback.total),
        page: header_number(headers, HEADER_CURRENT).unwrap_or(fallback.page),
        page_size,
        total_pages: header_number(headers, HEADER_NUM_PAGES).unwrap_or(fallback.total_pages),
    }
}

fn header_number<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<T>().ok())
}
