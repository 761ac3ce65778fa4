//! HTTP interfaces
//!
//! - `common`: response envelope and query helpers
//! - `handlers`: health and article listing handlers
//! - `router`: router with Swagger documentation

pub mod common;
pub mod handlers;
pub mod router;

pub use router::create_api_router;
