/**
 * Shared Types Module
 *
 * Defines shared types for the egui app including app view states and user info.
 */

use serde::{Deserialize, Serialize};

/// Current app view/mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppView {
    /// Login/register screen
    Auth,
    /// Signed-in mailbox landing
    Mailbox,
}

/// User information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub roles: Vec<String>,
}

impl UserInfo {
    /// Display name preferring the profile name over the username
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.username)
    }
}

/// Authentication response from server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

// Re-export auth types from backend for compatibility
#[cfg(feature = "ssr")]
pub use crate::backend::auth::{LoginRequest, RegisterRequest, UserResponse};

// Define types for non-SSR builds
#[cfg(not(feature = "ssr"))]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[cfg(not(feature = "ssr"))]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[cfg(not(feature = "ssr"))]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub roles: Vec<String>,
}

impl From<UserResponse> for UserInfo {
    fn from(value: UserResponse) -> Self {
        Self {
            id: value.id,
            username: value.username,
            email: value.email,
            name: value.name,
            roles: value.roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_user_response_to_user_info() {
        let user_response: UserResponse = serde_json::from_str(
            r#"{"id":"123","username":"testuser","email":"test@example.com","name":null,"roles":["knight"]}"#,
        )
        .unwrap();

        let user_info: UserInfo = user_response.into();
        assert_eq!(user_info.id, "123");
        assert_eq!(user_info.username, "testuser");
        assert_eq!(user_info.email, Some("test@example.com".to_string()));
        assert_eq!(user_info.roles, vec!["knight".to_string()]);
    }

    #[test]
    fn test_display_name_prefers_profile_name() {
        let user = UserInfo {
            id: "123".to_string(),
            username: "testuser".to_string(),
            email: None,
            name: Some("Test User".to_string()),
            roles: vec![],
        };
        assert_eq!(user.display_name(), "Test User");
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let user = UserInfo {
            id: "123".to_string(),
            username: "testuser".to_string(),
            email: None,
            name: None,
            roles: vec![],
        };
        assert_eq!(user.display_name(), "testuser");
    }

    #[test]
    fn test_auth_response_deserialization() {
        let json = r#"{"token":"token123","user":{"id":"123","username":"testuser","email":null,"name":null,"roles":["civilian"]}}"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, "token123");
        assert_eq!(response.user.roles, vec!["civilian".to_string()]);
    }
}
