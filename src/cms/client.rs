//! HTTP client for the upstream CMS
//!
//! Wraps a single `reqwest::Client` configured once at startup. Every call
//! targets `{base_url}/api{path}`; authenticated calls carry the configured
//! bearer credential, the public auth routes omit it.

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cms::types::CmsErrorBody;
use crate::config::CmsConfig;

/// Error type for CMS calls
#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    /// Transport-level failure (connect, timeout, decode)
    #[error("CMS request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// CMS answered with a non-success status
    #[error("CMS returned {status}: {message}")]
    Status { status: StatusCode, message: String },
}

impl CmsError {
    /// The upstream error message, when the CMS provided one
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            CmsError::Status { message, .. } => Some(message),
            CmsError::Transport(_) => None,
        }
    }
}

/// Thin client for the CMS REST surface
pub struct CmsClient {
    http: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl CmsClient {
    /// Create a new client from configuration
    ///
    /// The base URL and credential are captured here; there is no runtime
    /// mutation afterwards.
    pub fn new(config: &CmsConfig) -> Result<Self, CmsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str, authenticated: bool) -> RequestBuilder {
        let mut builder = self.http.request(method, self.endpoint(path));
        if authenticated {
            if let Some(token) = &self.api_token {
                builder = builder.bearer_auth(token);
            }
        }
        builder
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, CmsError> {
        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, body));
        }

        Ok(response.json::<T>().await?)
    }

    /// GET `{base_url}/api{path}` with query parameters
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, CmsError> {
        tracing::debug!(path, "CMS GET");
        self.execute(self.request(Method::GET, path, true).query(query))
            .await
    }

    /// POST `{base_url}/api{path}` with a JSON body
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, CmsError> {
        tracing::debug!(path, "CMS POST");
        self.execute(self.request(Method::POST, path, true).json(body))
            .await
    }

    /// PUT `{base_url}/api{path}` with a JSON body
    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, CmsError> {
        tracing::debug!(path, "CMS PUT");
        self.execute(self.request(Method::PUT, path, true).json(body))
            .await
    }

    /// DELETE `{base_url}/api{path}`
    ///
    /// The CMS answers deletes with an empty body, so nothing is parsed.
    pub async fn delete(&self, path: &str) -> Result<(), CmsError> {
        tracing::debug!(path, "CMS DELETE");
        let response = self.request(Method::DELETE, path, true).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, body));
        }

        Ok(())
    }

    /// POST without the Authorization header
    ///
    /// Used only for the CMS's built-in auth routes (login/register), which
    /// must not require a pre-existing credential.
    pub async fn post_public<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, CmsError> {
        tracing::debug!(path, "CMS POST (public)");
        self.execute(self.request(Method::POST, path, false).json(body))
            .await
    }
}

/// Build a `CmsError::Status`, preferring the message from the CMS error
/// envelope over the raw body text.
fn status_error(status: StatusCode, body: String) -> CmsError {
    let message = serde_json::from_str::<CmsErrorBody>(&body)
        .ok()
        .and_then(|b| b.error.message)
        .unwrap_or(body);

    CmsError::Status { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_and_path() {
        let client = CmsClient::new(&CmsConfig {
            url: "http://localhost:1337".to_string(),
            api_token: None,
            timeout_secs: 30,
        })
        .unwrap();

        assert_eq!(
            client.endpoint("/articles/1"),
            "http://localhost:1337/api/articles/1"
        );
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = CmsClient::new(&CmsConfig {
            url: "http://localhost:1337/".to_string(),
            api_token: None,
            timeout_secs: 30,
        })
        .unwrap();

        assert_eq!(client.endpoint("/articles"), "http://localhost:1337/api/articles");
    }

    #[test]
    fn test_status_error_prefers_envelope_message() {
        let err = status_error(
            StatusCode::BAD_REQUEST,
            r#"{"error":{"status":400,"name":"ApplicationError","message":"Email already taken"}}"#
                .to_string(),
        );

        assert_eq!(err.upstream_message(), Some("Email already taken"));
    }

    #[test]
    fn test_status_error_falls_back_to_raw_body() {
        let err = status_error(StatusCode::BAD_GATEWAY, "upstream exploded".to_string());
        assert_eq!(err.upstream_message(), Some("upstream exploded"));
    }
}
