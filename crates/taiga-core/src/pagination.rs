//! Paged result envelope for single-page (search) listing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pagination counters as reported by the upstream response headers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Pagination {
    /// Total matching items across all pages.
    pub total: u64,
    /// Page the upstream says it served.
    pub page: u32,
    /// Page size the caller asked for.
    pub page_size: u32,
    pub total_pages: u32,
}

impl Pagination {
    /// Counters used when the upstream sends no pagination headers at all.
    #[must_use]
    pub const fn fallback(page: u32, page_size: u32) -> Self {
        Self {
            total: 0,
            page,
            page_size,
            total_pages: 1,
        }
    }
}

/// One page of items plus its counters.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.pagination.page >= self.pagination.total_pages
    }
}
