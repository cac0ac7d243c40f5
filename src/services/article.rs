//! Article service
//!
//! Forwards article operations to the CMS and maps its response envelopes
//! into the public DTO shapes:
//! - Create, read, update, delete articles
//! - Pagination passthrough with a synthesized fallback
//! - Input validation
//!
//! Get/Update/Delete collapse every upstream failure into `NotFound`,
//! matching the behavior this gateway replaces. The real upstream error is
//! logged before the collapse.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::cms::types::{CmsArticle, CmsResponse};
use crate::cms::{CmsClient, CmsError};
use crate::models::{
    Article, CreateArticleInput, PaginatedArticles, Pagination, PaginationMeta, UpdateArticleInput,
};

/// Error types for article service operations
#[derive(Debug, thiserror::Error)]
pub enum ArticleServiceError {
    /// Article not found
    #[error("Article not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Upstream call failed
    #[error("Upstream error: {0}")]
    Upstream(#[from] CmsError),

    /// Upstream answered with a shape the mapper cannot handle
    #[error("Unexpected CMS response shape: {0}")]
    UpstreamShape(String),
}

/// Article service proxying CRUD operations to the CMS
pub struct ArticleService {
    cms: Arc<CmsClient>,
}

impl ArticleService {
    /// Create a new article service
    pub fn new(cms: Arc<CmsClient>) -> Self {
        Self { cms }
    }

    /// List articles with pagination
    ///
    /// Forwards page/pageSize to the CMS; when the CMS omits pagination
    /// metadata, a single-page fallback is synthesized from the data length.
    pub async fn list(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<PaginatedArticles, ArticleServiceError> {
        let query = [
            ("pagination[page]", page.to_string()),
            ("pagination[pageSize]", page_size.to_string()),
            ("populate", "*".to_string()),
        ];

        let response: CmsResponse<Vec<CmsArticle>> = self
            .cms
            .get("/articles", &query)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Error fetching articles");
                e
            })?;

        let data = response
            .data
            .into_iter()
            .map(map_article)
            .collect::<Result<Vec<_>, _>>()?;

        let pagination = response
            .meta
            .and_then(|m| m.pagination)
            .unwrap_or_else(|| Pagination::fallback(page, page_size, data.len() as i64));

        Ok(PaginatedArticles {
            data,
            meta: PaginationMeta { pagination },
        })
    }

    /// Get a single article by id
    pub async fn get(&self, id: i64) -> Result<Article, ArticleServiceError> {
        self.fetch(id).await.map_err(|e| self.collapse(id, e))
    }

    /// Create a new article
    pub async fn create(&self, input: CreateArticleInput) -> Result<Article, ArticleServiceError> {
        validate_create_input(&input)?;

        let response: CmsResponse<CmsArticle> = self
            .cms
            .post("/articles", &serde_json::json!({ "data": input }))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Error creating article");
                e
            })?;

        map_article(response.data)
    }

    /// Update an existing article
    pub async fn update(
        &self,
        id: i64,
        input: UpdateArticleInput,
    ) -> Result<Article, ArticleServiceError> {
        let result: Result<CmsResponse<CmsArticle>, CmsError> = self
            .cms
            .put(&format!("/articles/{}", id), &serde_json::json!({ "data": input }))
            .await;

        match result {
            Ok(response) => map_article(response.data).map_err(|e| self.collapse(id, e)),
            Err(e) => Err(self.collapse(id, e.into())),
        }
    }

    /// Delete an article
    pub async fn delete(&self, id: i64) -> Result<(), ArticleServiceError> {
        self.cms
            .delete(&format!("/articles/{}", id))
            .await
            .map_err(|e| self.collapse(id, e.into()))
    }

    async fn fetch(&self, id: i64) -> Result<Article, ArticleServiceError> {
        let response: CmsResponse<CmsArticle> = self
            .cms
            .get(&format!("/articles/{}", id), &[("populate", "*".to_string())])
            .await?;

        map_article(response.data)
    }

    /// Translate any upstream failure into `NotFound` for id-addressed
    /// operations, logging the real cause first.
    fn collapse(&self, id: i64, error: ArticleServiceError) -> ArticleServiceError {
        match error {
            e @ ArticleServiceError::NotFound(_) | e @ ArticleServiceError::ValidationError(_) => e,
            e => {
                tracing::error!(article_id = id, error = %e, "Upstream failure for article");
                ArticleServiceError::NotFound(format!("Article with ID {} not found", id))
            }
        }
    }
}

/// Validate input for article creation
fn validate_create_input(input: &CreateArticleInput) -> Result<(), ArticleServiceError> {
    if input.title.trim().is_empty() {
        return Err(ArticleServiceError::ValidationError(
            "Article title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Map a CMS article into the public shape
///
/// Copies id/documentId/title/content verbatim and parses the string
/// timestamps into `DateTime<Utc>`.
pub fn map_article(article: CmsArticle) -> Result<Article, ArticleServiceError> {
    Ok(Article {
        id: article.id,
        document_id: article.document_id,
        title: article.title,
        content: article.content,
        created_at: parse_timestamp("createdAt", &article.created_at)?,
        updated_at: parse_timestamp("updatedAt", &article.updated_at)?,
        published_at: parse_timestamp("publishedAt", &article.published_at)?,
    })
}

fn parse_timestamp(field: &str, value: &str) -> Result<DateTime<Utc>, ArticleServiceError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            ArticleServiceError::UpstreamShape(format!("invalid {} timestamp '{}': {}", field, value, e))
        })
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        /// Synthesized pagination always reports a single page covering the
        /// returned data.
        #[test]
        fn property_fallback_pagination(page in 1u32..100, page_size in 1u32..100, len in 0i64..100) {
            let pagination = Pagination::fallback(page, page_size, len);
            prop_assert_eq!(pagination.page, page);
            prop_assert_eq!(pagination.page_size, page_size);
            prop_assert_eq!(pagination.page_count, 1);
            prop_assert_eq!(pagination.total, len);
        }
    }
}
