//! Paging result envelope

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Records of one page plus the metadata needed to navigate the listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PagingResult<T> {
    /// Rows matching the query across all pages
    #[serde(rename = "total_record")]
    pub total_records: u64,
    /// Pages needed at this limit (0 when nothing matched)
    #[serde(rename = "total_page")]
    pub total_pages: u64,
    /// Rows on this page
    pub records: Vec<T>,
    /// Rows skipped before this page
    pub offset: u64,
    /// Page size
    pub limit: u64,
    /// This page (1-based)
    pub page: u64,
    /// Previous page, or this page on the first one
    pub prev_page: u64,
    /// Next page, or this page on the last one
    pub next_page: u64,
}

impl<T> PagingResult<T> {
    pub fn new(records: Vec<T>, total_records: u64, page: u64, limit: u64, offset: u64) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total_records.div_ceil(limit)
        };

        let prev_page = if page > 1 { page - 1 } else { page };
        let next_page = if page == total_pages {
            page
        } else {
            page.saturating_add(1)
        };

        Self {
            total_records,
            total_pages,
            records,
            offset,
            limit,
            page,
            prev_page,
            next_page,
        }
    }

    /// Convert the records while keeping the metadata.
    pub fn map<U, F>(self, f: F) -> PagingResult<U>
    where
        F: FnMut(T) -> U,
    {
        PagingResult {
            total_records: self.total_records,
            total_pages: self.total_pages,
            records: self.records.into_iter().map(f).collect(),
            offset: self.offset,
            limit: self.limit,
            page: self.page,
            prev_page: self.prev_page,
            next_page: self.next_page,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
