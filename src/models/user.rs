//! User model
//!
//! Public-facing authentication types. The gateway never stores users; these
//! shapes are produced from the CMS's auth responses.

use serde::{Deserialize, Serialize};

/// User information returned after authentication
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    /// Unique identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Role name, "user" when the CMS reports none
    pub role: String,
}

/// Result of a successful login or registration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResult {
    /// Opaque bearer token issued by the CMS
    pub access_token: String,
    /// Authenticated user
    pub user: AuthUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_result_serializes_camel_case() {
        let result = AuthResult {
            access_token: "token".to_string(),
            user: AuthUser {
                id: 1,
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
                role: "user".to_string(),
            },
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["accessToken"], "token");
        assert_eq!(json["user"]["name"], "John Doe");
        assert!(json.get("access_token").is_none());
    }
}
