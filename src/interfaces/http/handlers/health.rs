//! Health check handler
//!
//! Counting the article table proves both the connection and the migration.

use axum::{extract::State, http::StatusCode, Json};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::infrastructure::database::entities::article;

/// Service health response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `ok` or `degraded`
    pub status: String,
    pub version: String,
    /// Rows in the article table, absent when the query failed
    pub articles: Option<u64>,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Article table is readable", body = HealthResponse),
        (status = 503, description = "Article table is unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(State(db): State<DatabaseConnection>) -> (StatusCode, Json<HealthResponse>) {
    let articles = match article::Entity::find().count(&db).await {
        Ok(n) => Some(n),
        Err(e) => {
            warn!("Health check query failed: {}", e);
            None
        }
    };

    let (code, status) = match articles {
        Some(_) => (StatusCode::OK, "ok"),
        None => (StatusCode::SERVICE_UNAVAILABLE, "degraded"),
    };

    (
        code,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            articles,
        }),
    )
}
