//! Paginator
//!
//! Request-scoped navigation state: total record count, page size, current
//! page and link-window width, plus the path and query parameters needed to
//! build links back to the same listing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::link::{page_url, PageLink};
use super::request::{parse_page, query_pairs, RequestTarget};
use super::window::{page_window, Page};

pub const DEFAULT_PAGE_SIZE: u64 = 15;
pub const DEFAULT_CURRENT: u64 = 1;
pub const DEFAULT_LINKED_COUNT: u64 = 5;
pub const DEFAULT_PAGE_KEY: &str = "page";

/// Construction options for a [`Paginator`].
///
/// Zero page size and empty page key fall back to the defaults when the
/// paginator is built; the config itself is kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginatorConfig {
    /// Records per page
    pub page_size: u64,
    /// Requested page (1-based)
    pub current: u64,
    /// Number of page links shown at once
    pub linked_count: u64,
    /// Query parameter carrying the page number
    pub page_key: String,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            current: DEFAULT_CURRENT,
            linked_count: DEFAULT_LINKED_COUNT,
            page_key: DEFAULT_PAGE_KEY.to_string(),
        }
    }
}

impl PaginatorConfig {
    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_current(mut self, current: u64) -> Self {
        self.current = current;
        self
    }

    pub fn with_linked_count(mut self, linked_count: u64) -> Self {
        self.linked_count = linked_count;
        self
    }

    /// Page size a paginator built from this config uses.
    pub fn resolved_page_size(&self) -> u64 {
        if self.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size
        }
    }

    pub fn with_page_key(mut self, page_key: impl Into<String>) -> Self {
        self.page_key = page_key.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    total: u64,
    page_size: u64,
    current: u64,
    linked_count: u64,
    page_key: String,
    base_path: String,
    extra_params: Vec<(String, String)>,
}

impl Paginator {
    /// Paginator over `total` records with default settings.
    pub fn new(total: u64) -> Self {
        Self::custom(&PaginatorConfig::default(), total)
    }

    /// Paginator over `total` records with explicit settings.
    ///
    /// `current` is clamped into `1..=total_pages()`.
    pub fn custom(config: &PaginatorConfig, total: u64) -> Self {
        let page_size = config.resolved_page_size();
        let page_key = if config.page_key.is_empty() {
            DEFAULT_PAGE_KEY.to_string()
        } else {
            config.page_key.clone()
        };

        let mut paginator = Self {
            total,
            page_size,
            current: config.current.max(1),
            linked_count: config.linked_count,
            page_key,
            base_path: String::new(),
            extra_params: Vec::new(),
        };

        let total_pages = paginator.total_pages();
        if paginator.current > total_pages {
            paginator.current = total_pages;
        }
        paginator
    }

    /// Take the base path and query parameters from an inbound request.
    ///
    /// A valid non-zero value under the page key (matched
    /// case-insensitively) replaces the current page. Every other parameter
    /// is kept, in request order, for the generated links. Binding again
    /// replaces the state from the previous request.
    pub fn bind_request(&mut self, request: &impl RequestTarget) -> &mut Self {
        let mut current = None;
        let mut params: Vec<(String, String)> = Vec::new();

        for (key, value) in query_pairs(request.raw_query().unwrap_or_default()) {
            if key.eq_ignore_ascii_case(&self.page_key) {
                if let Some(page) = parse_page(value) {
                    current = Some(page);
                }
                continue;
            }

            match params.iter_mut().find(|(existing, _)| existing == key) {
                Some(entry) => entry.1 = value.to_string(),
                None => params.push((key.to_string(), value.to_string())),
            }
        }

        self.base_path = request.path().to_string();
        self.extra_params = params;
        if let Some(page) = current {
            self.current = page;
        }

        debug!(
            path = %self.base_path,
            current = self.current,
            params = self.extra_params.len(),
            "Paginator bound to request"
        );
        self
    }

    /// By-value form of [`Paginator::bind_request`].
    pub fn with_request(mut self, request: &impl RequestTarget) -> Self {
        self.bind_request(request);
        self
    }

    // ── Accessors ───────────────────────────────────────────────

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn linked_count(&self) -> u64 {
        self.linked_count
    }

    pub fn page_key(&self) -> &str {
        &self.page_key
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn extra_params(&self) -> &[(String, String)] {
        &self.extra_params
    }

    // ── Navigation ──────────────────────────────────────────────

    /// Number of pages; an empty listing still has one page.
    pub fn total_pages(&self) -> u64 {
        if self.total == 0 {
            return 1;
        }
        self.total.div_ceil(self.page_size)
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    /// Previous page number, or the current one on the first page.
    pub fn previous(&self) -> u64 {
        if self.has_previous() {
            self.current - 1
        } else {
            self.current
        }
    }

    /// True while records remain past `current * page_size`.
    pub fn has_next(&self) -> bool {
        self.total > self.current.saturating_mul(self.page_size)
    }

    /// Next page number, or the current one when there is none.
    pub fn next(&self) -> u64 {
        if self.has_next() {
            self.current + 1
        } else {
            self.current
        }
    }

    pub fn is_last(&self) -> bool {
        if self.total == 0 {
            return true;
        }
        self.total > (self.current - 1).saturating_mul(self.page_size) && !self.has_next()
    }

    pub fn first_page(&self) -> u64 {
        DEFAULT_CURRENT
    }

    pub fn last_page(&self) -> u64 {
        self.total_pages()
    }

    // ── Window and links ────────────────────────────────────────

    /// Page numbers to show as links.
    pub fn pages(&self) -> Vec<Page> {
        page_window(self.current, self.total_pages(), self.linked_count)
    }

    /// [`Paginator::pages`] with resolved URLs.
    pub fn page_links(&self) -> Vec<PageLink> {
        self.pages()
            .into_iter()
            .map(|page| PageLink::new(page, self.page_url(page.number())))
            .collect()
    }

    /// URL of an arbitrary page on this listing.
    pub fn page_url(&self, number: u64) -> String {
        page_url(&self.base_path, &self.extra_params, &self.page_key, number)
    }

    pub fn current_url(&self) -> String {
        self.page_url(self.current)
    }

    pub fn first_url(&self) -> String {
        self.page_url(self.first_page())
    }

    pub fn previous_url(&self) -> String {
        self.page_url(self.previous())
    }

    pub fn next_url(&self) -> String {
        self.page_url(self.next())
    }

    pub fn last_url(&self) -> String {
        self.page_url(self.last_page())
    }
}
