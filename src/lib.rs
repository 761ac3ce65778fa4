//! # Paginator
//!
//! Pagination for listing pages and offset/limit paging over record stores.
//!
//! ## Architecture
//!
//! - **domain**: `pagination` (page windows, navigation links, HTML control)
//!   and `paging` (paged queries over a `PageSource`)
//! - **infrastructure**: SeaORM and in-memory `PageSource` adapters
//! - **interfaces**: demo REST API and HTML listing with Swagger documentation
//! - **shared**: error types

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use domain::pagination::{Page, PageLink, Paginator, PaginatorConfig, RequestTarget};
pub use domain::paging::{paging, PageSource, PagingParams, PagingResult, SortClause, SortDirection};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, MemorySource, SeaOrmSource};

// Re-export API router
pub use interfaces::http::create_api_router;

pub use shared::{AppError, AppResult, PagingError};
