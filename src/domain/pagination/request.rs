//! Request binding
//!
//! A paginator reads the inbound URL path and raw query string. Anything
//! that can hand out those two pieces implements [`RequestTarget`].

use axum::http::{Request, Uri};

/// An inbound request as seen by the paginator.
pub trait RequestTarget {
    /// URL path, used as the base of every generated link.
    fn path(&self) -> &str;

    /// Raw (still encoded) query string without the leading `?`.
    fn raw_query(&self) -> Option<&str>;
}

impl RequestTarget for Uri {
    fn path(&self) -> &str {
        Uri::path(self)
    }

    fn raw_query(&self) -> Option<&str> {
        self.query()
    }
}

impl<B> RequestTarget for Request<B> {
    fn path(&self) -> &str {
        self.uri().path()
    }

    fn raw_query(&self) -> Option<&str> {
        self.uri().query()
    }
}

/// Owned path + query pair for callers that are not holding an `http` type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParts {
    pub path: String,
    pub query: Option<String>,
}

impl RequestParts {
    pub fn new(path: impl Into<String>, query: Option<&str>) -> Self {
        Self {
            path: path.into(),
            query: query.map(str::to_string),
        }
    }

    /// Split `"/path?query"` into its two halves.
    pub fn parse(target: &str) -> Self {
        match target.split_once('?') {
            Some((path, query)) => Self::new(path, Some(query)),
            None => Self::new(target, None),
        }
    }
}

impl RequestTarget for RequestParts {
    fn path(&self) -> &str {
        &self.path
    }

    fn raw_query(&self) -> Option<&str> {
        self.query.as_deref()
    }
}

/// Split a raw query into `(key, value)` pairs.
///
/// Pairs are separated by `&`, key and value by the first `=`. A pair
/// without `=` gets an empty value; empty segments are skipped.
pub fn query_pairs(raw: &str) -> impl Iterator<Item = (&str, &str)> {
    raw.split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.split_once('=').unwrap_or((segment, "")))
}

/// Parse a page number, rejecting zero and anything non-numeric.
pub(crate) fn parse_page(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|&page| page != 0)
}

/// The page number a request asks for under `page_key`, if any.
///
/// The key is matched case-insensitively and the last valid occurrence
/// wins.
pub fn requested_page(target: &impl RequestTarget, page_key: &str) -> Option<u64> {
    query_pairs(target.raw_query().unwrap_or_default())
        .filter(|(key, _)| key.eq_ignore_ascii_case(page_key))
        .filter_map(|(_, value)| parse_page(value))
        .last()
}
