//! Paging executor

use tracing::{debug, info};

use super::params::PagingParams;
use super::result::PagingResult;
use super::source::PageSource;
use crate::shared::PagingError;

/// Run one paged query against `source`.
///
/// Ordering clauses are applied first. The row count and the page fetch
/// then run concurrently; both must finish before the envelope is built,
/// and the first failure is returned to the caller.
pub async fn paging<S>(
    mut source: S,
    params: PagingParams<S::Clause>,
) -> Result<PagingResult<S::Record>, PagingError>
where
    S: PageSource,
{
    let params = params.normalized();
    let offset = params.offset();
    let PagingParams {
        page,
        limit,
        order_by,
        show_sql,
    } = params;

    for clause in order_by {
        source.apply_order(clause);
    }

    if show_sql {
        if let Some(sql) = source.describe_count() {
            info!(sql = %sql, "Paging count query");
        }
        if let Some(sql) = source.describe(limit, offset) {
            info!(sql = %sql, "Paging query");
        }
    }

    let (total_records, records) = tokio::try_join!(source.count(), source.fetch(limit, offset))?;

    debug!(
        page,
        limit,
        offset,
        total_records,
        fetched = records.len(),
        "Paging query completed"
    );

    Ok(PagingResult::new(records, total_records, page, limit, offset))
}
