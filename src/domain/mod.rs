pub mod pagination;
pub mod paging;
