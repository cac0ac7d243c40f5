//! Auth service
//!
//! Forwards login/registration to the CMS's built-in auth routes and maps
//! the `{jwt, user}` payload into the public `AuthResult` shape. Upstream
//! failure details are logged here and never surfaced to callers; login
//! failures are reported uniformly regardless of cause.

use std::sync::Arc;

use crate::cms::types::CmsAuthResponse;
use crate::cms::CmsClient;
use crate::models::{AuthResult, AuthUser};

/// Error types for auth service operations
#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    /// Login rejected; covers every upstream failure uniformly
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Registration rejected because the email is already registered
    #[error("User with this email already exists")]
    UserExists,

    /// Registration failed for any other reason
    #[error("Registration failed")]
    RegistrationFailed,
}

/// Auth service delegating credential checks to the CMS
pub struct AuthService {
    cms: Arc<CmsClient>,
}

impl AuthService {
    /// Create a new auth service
    pub fn new(cms: Arc<CmsClient>) -> Self {
        Self { cms }
    }

    /// Log in against the CMS's `/auth/local` route
    ///
    /// Any upstream failure (wrong credentials included) is reported as
    /// `InvalidCredentials`; the detail is only logged.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResult, AuthServiceError> {
        let body = serde_json::json!({
            "identifier": email,
            "password": password,
        });

        let response: CmsAuthResponse = self
            .cms
            .post_public("/auth/local", &body)
            .await
            .map_err(|e| {
                tracing::error!(email, error = %e, "Login error");
                AuthServiceError::InvalidCredentials
            })?;

        Ok(map_auth(response))
    }

    /// Register against the CMS's `/auth/local/register` route
    ///
    /// A duplicate email reported by the CMS becomes `UserExists`; every
    /// other failure becomes a generic `RegistrationFailed`.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResult, AuthServiceError> {
        let body = serde_json::json!({
            "username": name,
            "email": email,
            "password": password,
        });

        let response: CmsAuthResponse = self
            .cms
            .post_public("/auth/local/register", &body)
            .await
            .map_err(|e| {
                if e.upstream_message()
                    .is_some_and(|m| m.contains("Email already taken"))
                {
                    return AuthServiceError::UserExists;
                }
                tracing::error!(email, error = %e, "Registration error");
                AuthServiceError::RegistrationFailed
            })?;

        Ok(map_auth(response))
    }
}

/// Map the CMS auth payload into the public shape
///
/// `username` becomes `name`; the role name defaults to "user" when the CMS
/// reports none.
pub fn map_auth(response: CmsAuthResponse) -> AuthResult {
    AuthResult {
        access_token: response.jwt,
        user: AuthUser {
            id: response.user.id,
            name: response.user.username,
            email: response.user.email,
            role: response
                .user
                .role
                .map(|r| r.name)
                .unwrap_or_else(|| "user".to_string()),
        },
    }
}
