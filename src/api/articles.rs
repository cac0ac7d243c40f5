//! Article API endpoints
//!
//! Handles HTTP requests for article management:
//! - GET /api/articles - List articles with pagination
//! - GET /api/articles/{id} - Get article by ID
//! - POST /api/articles - Create new article
//! - PATCH /api/articles/{id} - Update article
//! - DELETE /api/articles/{id} - Delete article
//!
//! Every operation is forwarded to the CMS; responses carry the reshaped
//! public DTOs.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde::Deserialize;

use crate::api::{ApiError, AppState};
use crate::models::{Article, CreateArticleInput, PaginatedArticles, UpdateArticleInput};
use crate::services::ArticleServiceError;

/// Default page number (1-indexed)
const DEFAULT_PAGE: u32 = 1;

/// Default page size
const DEFAULT_PAGE_SIZE: u32 = 10;

/// Query parameters for listing articles
///
/// Values arrive as raw strings so that unparseable input falls back to the
/// defaults instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct ListArticlesQuery {
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

impl ListArticlesQuery {
    /// Effective page, falling back to 1 for absent or invalid input
    pub fn page(&self) -> u32 {
        parse_positive(self.page.as_deref()).unwrap_or(DEFAULT_PAGE)
    }

    /// Effective page size, falling back to 10 for absent or invalid input
    pub fn page_size(&self) -> u32 {
        parse_positive(self.page_size.as_deref()).unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

/// Parse a positive integer; anything else counts as absent
fn parse_positive(value: Option<&str>) -> Option<u32> {
    value.and_then(|s| s.parse::<u32>().ok()).filter(|&n| n >= 1)
}

/// Build the articles router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_articles))
        .route("/", post(create_article))
        .route("/{id}", get(get_article))
        .route("/{id}", patch(update_article))
        .route("/{id}", delete(delete_article))
}

impl From<ArticleServiceError> for ApiError {
    fn from(e: ArticleServiceError) -> Self {
        match e {
            ArticleServiceError::NotFound(msg) => ApiError::not_found(msg),
            ArticleServiceError::ValidationError(msg) => ApiError::validation_error(msg),
            ArticleServiceError::Upstream(e) => ApiError::upstream_error(e.to_string()),
            ArticleServiceError::UpstreamShape(msg) => ApiError::upstream_error(msg),
        }
    }
}

/// GET /api/articles - List articles with pagination
///
/// Missing or invalid page/pageSize fall back to 1 and 10.
pub async fn list_articles(
    State(state): State<AppState>,
    Query(query): Query<ListArticlesQuery>,
) -> Result<Json<PaginatedArticles>, ApiError> {
    let result = state
        .article_service
        .list(query.page(), query.page_size())
        .await?;

    Ok(Json(result))
}

/// GET /api/articles/{id} - Get article by ID
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Article>, ApiError> {
    let article = state.article_service.get(id).await?;
    Ok(Json(article))
}

/// POST /api/articles - Create new article
pub async fn create_article(
    State(state): State<AppState>,
    Json(body): Json<CreateArticleInput>,
) -> Result<(StatusCode, Json<Article>), ApiError> {
    let article = state.article_service.create(body).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

/// PATCH /api/articles/{id} - Update article
pub async fn update_article(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateArticleInput>,
) -> Result<Json<Article>, ApiError> {
    let article = state.article_service.update(id, body).await?;
    Ok(Json(article))
}

/// DELETE /api/articles/{id} - Delete article
pub async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.article_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        /// Whatever the query strings contain, the effective values are
        /// positive.
        #[test]
        fn property_effective_pagination_is_positive(
            page in prop::option::of("[a-z0-9-]{0,6}"),
            page_size in prop::option::of("[a-z0-9-]{0,6}"),
        ) {
            let q = ListArticlesQuery { page, page_size };
            prop_assert!(q.page() >= 1);
            prop_assert!(q.page_size() >= 1);
        }

        /// Valid positive integers are always honored as-is.
        #[test]
        fn property_valid_values_pass_through(page in 1u32..10000, page_size in 1u32..10000) {
            let q = ListArticlesQuery {
                page: Some(page.to_string()),
                page_size: Some(page_size.to_string()),
            };
            prop_assert_eq!(q.page(), page);
            prop_assert_eq!(q.page_size(), page_size);
        }
    }
}
