//! Pagination metadata
//!
//! [`Paginator`] answers navigation questions for one listing request
//! (first/previous/next/last, total pages), picks the window of page
//! links to show and renders them as an HTML fragment.

mod link;
mod paginator;
mod render;
mod request;
mod window;

pub use link::{page_url, PageLink};
pub use paginator::{
    Paginator, PaginatorConfig, DEFAULT_CURRENT, DEFAULT_LINKED_COUNT, DEFAULT_PAGE_KEY,
    DEFAULT_PAGE_SIZE,
};
pub use render::{LinkLabels, PaginationHtml};
pub use request::{query_pairs, requested_page, RequestParts, RequestTarget};
pub use window::{page_window, Page};
