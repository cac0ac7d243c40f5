//! CMS integration layer
//!
//! Everything that talks to the upstream headless CMS lives here:
//! - `CmsClient`: thin HTTP client for the CMS REST surface
//! - Upstream response shapes (`types`)

pub mod client;
pub mod types;

pub use client::{CmsClient, CmsError};
pub use types::{
    CmsArticle, CmsAuthResponse, CmsErrorBody, CmsMeta, CmsResponse, CmsRole, CmsUser,
};
