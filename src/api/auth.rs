//! Authentication API endpoints
//!
//! Handles HTTP requests for user authentication:
//! - POST /api/auth/login - User login
//! - POST /api/auth/register - User registration
//!
//! Both delegate to the CMS's built-in auth routes; the gateway holds no
//! credentials of its own.

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;

use crate::api::{ApiError, AppState};
use crate::models::AuthResult;
use crate::services::AuthServiceError;

/// Request body for user login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for user registration
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Build the auth router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
}

impl From<AuthServiceError> for ApiError {
    fn from(e: AuthServiceError) -> Self {
        match e {
            AuthServiceError::InvalidCredentials => ApiError::unauthorized("Invalid credentials"),
            AuthServiceError::UserExists => {
                ApiError::conflict("User with this email already exists")
            }
            AuthServiceError::RegistrationFailed => ApiError::unauthorized("Registration failed"),
        }
    }
}

/// POST /api/auth/login - User login
///
/// Failures are reported uniformly as 401 regardless of the upstream cause.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResult>, ApiError> {
    let result = state.auth_service.login(&body.email, &body.password).await?;
    Ok(Json(result))
}

/// POST /api/auth/register - User registration
///
/// A duplicate email is a 409; any other upstream failure is a 401.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<AuthResult>, ApiError> {
    let result = state
        .auth_service
        .register(&body.name, &body.email, &body.password)
        .await?;
    Ok(Json(result))
}
