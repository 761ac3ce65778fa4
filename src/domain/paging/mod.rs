//! Offset/limit paging over a record source

mod executor;
mod params;
mod result;
mod source;

pub use executor::paging;
pub use params::{
    PagingParams, SortClause, SortDirection, DEFAULT_PAGING_LIMIT, DEFAULT_PAGING_PAGE,
    MAX_PAGING_OFFSET,
};
pub use result::PagingResult;
pub use source::PageSource;
