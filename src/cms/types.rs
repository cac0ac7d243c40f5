//! Upstream CMS response shapes
//!
//! These mirror the CMS's REST envelopes exactly as received; the services
//! map them into the public models. Timestamps arrive as RFC 3339 strings
//! and stay strings here.

use serde::{Deserialize, Serialize};

use crate::models::{Pagination, ParagraphNode};

/// Generic CMS response envelope: `{data, meta}`
#[derive(Debug, Clone, Deserialize)]
pub struct CmsResponse<T> {
    pub data: T,
    #[serde(default)]
    pub meta: Option<CmsMeta>,
}

/// CMS response metadata
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CmsMeta {
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Article as returned by the CMS
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsArticle {
    pub id: i64,
    pub document_id: String,
    pub title: String,
    #[serde(default)]
    pub content: Vec<ParagraphNode>,
    pub created_at: String,
    pub updated_at: String,
    pub published_at: String,
}

/// Response from the CMS's built-in auth routes: `{jwt, user}`
#[derive(Debug, Clone, Deserialize)]
pub struct CmsAuthResponse {
    pub jwt: String,
    pub user: CmsUser,
}

/// User as returned by the CMS auth routes
#[derive(Debug, Clone, Deserialize)]
pub struct CmsUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<CmsRole>,
}

/// Role object nested in the CMS user
#[derive(Debug, Clone, Deserialize)]
pub struct CmsRole {
    pub name: String,
}

/// CMS error envelope: `{error: {status, name, message}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsErrorBody {
    pub error: CmsErrorDetail,
}

/// Error detail inside the CMS error envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsErrorDetail {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_article_envelope() {
        let json = serde_json::json!({
            "data": {
                "id": 2,
                "documentId": "abc123",
                "title": "First Article",
                "content": [
                    {"type": "paragraph", "children": [
                        {"text": "Some random text for the first article", "type": "text"}
                    ]}
                ],
                "createdAt": "2025-07-12T18:30:48.478Z",
                "updatedAt": "2025-07-12T18:30:48.478Z",
                "publishedAt": "2025-07-12T18:30:48.519Z"
            },
            "meta": {}
        });

        let response: CmsResponse<CmsArticle> = serde_json::from_value(json).unwrap();
        assert_eq!(response.data.id, 2);
        assert_eq!(response.data.document_id, "abc123");
        assert_eq!(response.data.content.len(), 1);
        assert!(response.meta.unwrap().pagination.is_none());
    }

    #[test]
    fn test_deserialize_list_envelope_with_pagination() {
        let json = serde_json::json!({
            "data": [],
            "meta": {
                "pagination": {"page": 1, "pageSize": 10, "pageCount": 5, "total": 50}
            }
        });

        let response: CmsResponse<Vec<CmsArticle>> = serde_json::from_value(json).unwrap();
        let pagination = response.meta.unwrap().pagination.unwrap();
        assert_eq!(pagination.page_count, 5);
        assert_eq!(pagination.total, 50);
    }

    #[test]
    fn test_deserialize_auth_response_without_role() {
        let json = serde_json::json!({
            "jwt": "token",
            "user": {"id": 1, "username": "john", "email": "john@example.com"}
        });

        let response: CmsAuthResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.jwt, "token");
        assert!(response.user.role.is_none());
    }

    #[test]
    fn test_deserialize_error_envelope() {
        let json = serde_json::json!({
            "error": {"status": 400, "name": "ApplicationError", "message": "Email already taken"}
        });

        let body: CmsErrorBody = serde_json::from_value(json).unwrap();
        assert_eq!(body.error.message.as_deref(), Some("Email already taken"));
    }
}
