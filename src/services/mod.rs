//! Service layer - business logic between the HTTP handlers and the CMS
//!
//! Each service owns the DTO mapping for its slice of the API:
//! - `article`: article CRUD forwarding and rich-text/pagination mapping
//! - `auth`: login/register forwarding and auth payload mapping

pub mod article;
pub mod auth;

pub use article::{ArticleService, ArticleServiceError};
pub use auth::{AuthService, AuthServiceError};
