//! Page source port
//!
//! The paging executor only needs a few things from a store: apply ordering,
//! count the filtered rows, fetch a limit/offset slice of them, and
//! optionally describe the two statements it would run.

use async_trait::async_trait;

use crate::shared::PagingError;

#[async_trait]
pub trait PageSource: Send + Sync {
    /// Row type produced by [`PageSource::fetch`].
    type Record: Send;

    /// Ordering clause understood by this source.
    type Clause: Send;

    /// Append an ordering clause. Clauses apply in the order they are added.
    fn apply_order(&mut self, clause: Self::Clause);

    /// Count the rows matching the source's filter.
    async fn count(&self) -> Result<u64, PagingError>;

    /// Fetch at most `limit` rows after skipping `offset`.
    async fn fetch(&self, limit: u64, offset: u64) -> Result<Vec<Self::Record>, PagingError>;

    /// Text of the page query, for `show_sql` logging.
    fn describe(&self, _limit: u64, _offset: u64) -> Option<String> {
        None
    }

    /// Text of the count query, for `show_sql` logging.
    fn describe_count(&self) -> Option<String> {
        None
    }
}
