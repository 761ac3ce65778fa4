//! Article listing handlers
//!
//! `GET /api/v1/articles` returns one page as JSON; `GET /articles` renders
//! the same listing as HTML with a pagination control bound to the request.

use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::Html,
    Json,
};
use maud::{html, DOCTYPE};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::{IntoParams, ToSchema};

use crate::config::PagingSection;
use crate::domain::pagination::{requested_page, Paginator, PaginatorConfig};
use crate::domain::paging::{paging, PagingParams, PagingResult, SortClause};
use crate::infrastructure::database::entities::article;
use crate::infrastructure::database::SeaOrmSource;
use crate::interfaces::http::common::{lenient_page_number, ApiResponse};

/// Article listing state
#[derive(Clone)]
pub struct ArticleState {
    pub db: sea_orm::DatabaseConnection,
    pub pagination: PaginatorConfig,
    pub paging: PagingSection,
}

/// Published article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i32,
    pub title: String,
    pub author: String,
    /// Publication time (RFC 3339)
    pub published_at: String,
}

impl From<article::Model> for ArticleDto {
    fn from(a: article::Model) -> Self {
        Self {
            id: a.id,
            title: a.title,
            author: a.author,
            published_at: a.published_at.to_rfc3339(),
        }
    }
}

/// Query parameters for the article listing
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListArticlesParams {
    /// Page number (1-based). Invalid values fall back to 1
    #[serde(default, deserialize_with = "lenient_page_number")]
    pub page: Option<u64>,
    /// Rows per page. Invalid values fall back to the configured limit
    #[serde(default, deserialize_with = "lenient_page_number")]
    pub limit: Option<u64>,
    /// Comma-separated `column [asc|desc]` clauses, e.g. `author,published_at desc`
    pub sort: Option<String>,
}

/// Parse a comma-separated sort list, skipping clauses that do not name an
/// article column. Falls back to `fallback` when nothing usable remains.
fn sort_clauses(
    raw: Option<&str>,
    fallback: SortClause<article::Column>,
) -> Vec<SortClause<article::Column>> {
    let mut clauses = Vec::new();
    for part in raw.unwrap_or_default().split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        match SortClause::parse(part) {
            Ok(clause) => clauses.push(clause),
            Err(e) => warn!("Ignoring sort clause: {}", e),
        }
    }

    if clauses.is_empty() {
        clauses.push(fallback);
    }
    clauses
}

fn paging_params(
    page: u64,
    limit: u64,
    order_by: Vec<SortClause<article::Column>>,
    show_sql: bool,
) -> PagingParams<SortClause<article::Column>> {
    order_by
        .into_iter()
        .fold(PagingParams::new(), PagingParams::order_by)
        .page(page)
        .limit(limit)
        .show_sql(show_sql)
}

/// List articles
///
/// Returns one page of articles plus the totals needed to navigate the
/// listing. Defaults to ordering by id.
#[utoipa::path(
    get,
    path = "/api/v1/articles",
    tag = "Articles",
    params(ListArticlesParams),
    responses(
        (status = 200, description = "One page of articles", body = PagingResult<ArticleDto>),
        (status = 500, description = "Query failed", body = ApiResponse<String>)
    )
)]
pub async fn list_articles(
    State(state): State<ArticleState>,
    Query(params): Query<ListArticlesParams>,
) -> Result<Json<PagingResult<ArticleDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let limit = params
        .limit
        .unwrap_or(state.paging.limit)
        .min(state.paging.max_limit.max(1));
    let order_by = sort_clauses(params.sort.as_deref(), SortClause::asc(article::Column::Id));

    let source = SeaOrmSource::<article::Entity, _>::all(&state.db);
    let result = paging(
        source,
        paging_params(params.page.unwrap_or(1), limit, order_by, state.paging.show_sql),
    )
    .await
    .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, Json(ApiResponse::error(e.to_string()))))?;

    Ok(Json(result.map(ArticleDto::from)))
}

/// Query parameters read by the HTML listing besides the page key
#[derive(Debug, Default, Deserialize)]
pub struct HtmlListParams {
    pub sort: Option<String>,
}

/// HTML article listing with a pagination control
pub async fn list_articles_html(
    State(state): State<ArticleState>,
    uri: Uri,
    Query(params): Query<HtmlListParams>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    let page = requested_page(&uri, &state.pagination.page_key).unwrap_or(1);
    let order_by = sort_clauses(
        params.sort.as_deref(),
        SortClause::desc(article::Column::PublishedAt),
    );

    let source = SeaOrmSource::<article::Entity, _>::all(&state.db);
    let result = paging(
        source,
        paging_params(
            page,
            state.pagination.resolved_page_size(),
            order_by,
            state.paging.show_sql,
        ),
    )
    .await
    .map_err(|e| {
        let page = html! { p class="error" { (e.to_string()) } };
        (StatusCode::INTERNAL_SERVER_ERROR, Html(page.into_string()))
    })?;

    let paginator = Paginator::custom(
        &state.pagination.clone().with_current(result.page),
        result.total_records,
    )
    .with_request(&uri);

    Ok(Html(render_listing(&result, &paginator)))
}

fn render_listing(result: &PagingResult<article::Model>, paginator: &Paginator) -> String {
    let page = html! {
        (DOCTYPE)
        html {
            head { title { "Articles" } }
            body {
                p {
                    (result.total_records) " articles, page "
                    (paginator.current()) " of " (paginator.total_pages())
                }
                ul class="articles" {
                    @for a in &result.records {
                        li {
                            (a.title) " "
                            small { "by " (a.author) ", " (a.published_at.format("%Y-%m-%d").to_string()) }
                        }
                    }
                }
                (paginator.render_html())
            }
        }
    };
    page.into_string()
}
