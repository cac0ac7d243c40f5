//! Article model
//!
//! This module provides:
//! - `Article` entity representing a CMS article as exposed by the public API
//! - Rich text node types (`ParagraphNode`, `TextNode`)
//! - Input types for creating and updating articles
//! - Pagination types for list responses
//!
//! Field names serialize in camelCase to preserve the public wire shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Article entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Unique identifier
    pub id: i64,
    /// CMS document identifier
    pub document_id: String,
    /// Article title
    pub title: String,
    /// Rich text body as an ordered sequence of paragraph nodes
    pub content: Vec<ParagraphNode>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// Publication timestamp
    pub published_at: DateTime<Utc>,
}

impl Article {
    /// Flatten the rich text body into plain text.
    ///
    /// Concatenates every text node in order; this is the article body as a
    /// reader would see it.
    pub fn plain_text(&self) -> String {
        plain_text(&self.content)
    }
}

/// Flatten a sequence of paragraph nodes into plain text
pub fn plain_text(content: &[ParagraphNode]) -> String {
    content
        .iter()
        .flat_map(|p| p.children.iter())
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A paragraph node in the rich text tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphNode {
    /// Node type discriminator, always "paragraph"
    #[serde(rename = "type")]
    pub node_type: String,
    /// Ordered text children
    pub children: Vec<TextNode>,
}

impl ParagraphNode {
    /// Create a paragraph node from text children
    pub fn new(children: Vec<TextNode>) -> Self {
        Self {
            node_type: "paragraph".to_string(),
            children,
        }
    }

    /// Create a paragraph node containing a single text node
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(vec![TextNode::new(text)])
    }
}

/// A text node in the rich text tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNode {
    /// Text content
    pub text: String,
    /// Node type discriminator, always "text"
    #[serde(rename = "type")]
    pub node_type: String,
}

impl TextNode {
    /// Create a text node
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            node_type: "text".to_string(),
        }
    }
}

/// Input for creating a new article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateArticleInput {
    /// Article title
    pub title: String,
    /// Rich text body
    pub content: Vec<ParagraphNode>,
}

/// Input for updating an existing article
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateArticleInput {
    /// New title (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New rich text body (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<ParagraphNode>>,
}

impl UpdateArticleInput {
    /// Check if any field is set
    pub fn has_changes(&self) -> bool {
        self.title.is_some() || self.content.is_some()
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page number (1-indexed)
    pub page: u32,
    /// Number of items per page
    pub page_size: u32,
    /// Total number of pages
    pub page_count: u32,
    /// Total number of items
    pub total: i64,
}

impl Pagination {
    /// Synthesize pagination metadata when the upstream omits it
    pub fn fallback(page: u32, page_size: u32, total: i64) -> Self {
        Self {
            page,
            page_size,
            page_count: 1,
            total,
        }
    }
}

/// Response metadata wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Pagination metadata
    pub pagination: Pagination,
}

/// Paginated article list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedArticles {
    /// Articles in the current page
    pub data: Vec<Article>,
    /// Response metadata
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_content() -> Vec<ParagraphNode> {
        vec![
            ParagraphNode::from_text("Some random text"),
            ParagraphNode::new(vec![TextNode::new("for the"), TextNode::new("first article")]),
        ]
    }

    #[test]
    fn test_plain_text_flattens_in_order() {
        let content = sample_content();
        assert_eq!(plain_text(&content), "Some random text for the first article");
    }

    #[test]
    fn test_plain_text_empty_content() {
        assert_eq!(plain_text(&[]), "");
    }

    #[test]
    fn test_paragraph_node_serde_shape() {
        let node = ParagraphNode::from_text("hello");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "paragraph",
                "children": [{"text": "hello", "type": "text"}]
            })
        );
    }

    #[test]
    fn test_paragraph_node_round_trip() {
        let json = serde_json::json!([
            {"type": "paragraph", "children": [{"text": "hello", "type": "text"}]}
        ]);
        let content: Vec<ParagraphNode> = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(serde_json::to_value(&content).unwrap(), json);
    }

    #[test]
    fn test_article_serializes_camel_case() {
        let article = Article {
            id: 2,
            document_id: "abc123".to_string(),
            title: "First Article".to_string(),
            content: sample_content(),
            created_at: "2025-07-12T18:30:48.478Z".parse().unwrap(),
            updated_at: "2025-07-12T18:30:48.478Z".parse().unwrap(),
            published_at: "2025-07-12T18:30:48.519Z".parse().unwrap(),
        };

        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["documentId"], "abc123");
        assert!(json["createdAt"].is_string());
        assert!(json["updatedAt"].is_string());
        assert!(json["publishedAt"].is_string());
        assert!(json.get("document_id").is_none());
    }

    #[test]
    fn test_update_input_has_changes() {
        assert!(!UpdateArticleInput::default().has_changes());
        assert!(UpdateArticleInput {
            title: Some("New".to_string()),
            content: None,
        }
        .has_changes());
    }

    #[test]
    fn test_update_input_skips_absent_fields() {
        let input = UpdateArticleInput {
            title: Some("New".to_string()),
            content: None,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, serde_json::json!({"title": "New"}));
    }

    #[test]
    fn test_pagination_fallback() {
        let pagination = Pagination::fallback(2, 5, 3);
        assert_eq!(pagination.page, 2);
        assert_eq!(pagination.page_size, 5);
        assert_eq!(pagination.page_count, 1);
        assert_eq!(pagination.total, 3);
    }

    #[test]
    fn test_pagination_serializes_camel_case() {
        let pagination = Pagination::fallback(1, 10, 0);
        let json = serde_json::to_value(pagination).unwrap();
        assert!(json.get("pageSize").is_some());
        assert!(json.get("pageCount").is_some());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn text_node_strategy() -> impl Strategy<Value = TextNode> {
        "[a-zA-Z0-9 ]{0,20}".prop_map(|t| TextNode::new(t))
    }

    fn content_strategy() -> impl Strategy<Value = Vec<ParagraphNode>> {
        prop::collection::vec(
            prop::collection::vec(text_node_strategy(), 0..4).prop_map(ParagraphNode::new),
            0..4,
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        /// Rich text content survives a serde round trip unchanged.
        #[test]
        fn property_content_round_trip(content in content_strategy()) {
            let json = serde_json::to_value(&content).unwrap();
            let back: Vec<ParagraphNode> = serde_json::from_value(json).unwrap();
            prop_assert_eq!(back, content);
        }

        /// Flattened text contains every text node in order.
        #[test]
        fn property_plain_text_preserves_order(content in content_strategy()) {
            let flat = plain_text(&content);
            let mut cursor = 0usize;
            for node in content.iter().flat_map(|p| p.children.iter()) {
                if node.text.is_empty() {
                    continue;
                }
                let found = flat[cursor..].find(&node.text);
                prop_assert!(found.is_some());
                cursor += found.unwrap();
            }
        }
    }
}
