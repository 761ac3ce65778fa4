//! API Router with Swagger UI

use axum::{routing::get, Router};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::domain::paging::PagingResult;
use crate::interfaces::http::common::ApiResponse;

use super::handlers::articles::{self, ArticleDto, ArticleState};
use super::handlers::health;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        articles::list_articles,
    ),
    components(
        schemas(
            ApiResponse<String>,
            PagingResult<ArticleDto>,
            ArticleDto,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Articles", description = "Paged article listing"),
    ),
    info(
        title = "Paginator demo API",
        version = "0.1.0",
        description = "Offset/limit paging over a SeaORM table",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the router with all routes
pub fn create_api_router(db: DatabaseConnection, config: &AppConfig) -> Router {
    let article_state = ArticleState {
        db: db.clone(),
        pagination: config.pagination.clone(),
        paging: config.paging.clone(),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(db);

    let article_routes = Router::new()
        .route("/api/v1/articles", get(articles::list_articles))
        .route("/articles", get(articles::list_articles_html))
        .with_state(article_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(article_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
