//! Page links

use std::fmt::Write;

use serde::Serialize;

use super::window::Page;

/// Build the target URL for a page.
///
/// Layout: `{base_path}?{k1}={v1}&{k2}={v2}&{page_key}={number}`. Extra
/// parameters are echoed in the order they were bound.
pub fn page_url(
    base_path: &str,
    extra_params: &[(String, String)],
    page_key: &str,
    number: u64,
) -> String {
    let mut url = String::with_capacity(base_path.len() + page_key.len() + 8);
    url.push_str(base_path);
    url.push('?');
    for (key, value) in extra_params {
        let _ = write!(url, "{key}={value}&");
    }
    let _ = write!(url, "{page_key}={number}");
    url
}

/// A windowed page together with its resolved URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    #[serde(flatten)]
    page: Page,
    url: String,
}

impl PageLink {
    pub fn new(page: Page, url: String) -> Self {
        Self { page, url }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn number(&self) -> u64 {
        self.page.number()
    }

    pub fn is_current(&self) -> bool {
        self.page.is_current()
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
