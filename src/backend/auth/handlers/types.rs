/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers. These types are shared across the register,
 * login, OAuth callback, and session read handlers.
 */

use serde::{Deserialize, Serialize};

/// Registration request
///
/// Contains the username and password for user registration.
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// User's chosen username (3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

/// Login request
///
/// Contains the username and password for credential authentication.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's username
    pub username: String,
    /// User's password (will be verified against the stored hash)
    pub password: String,
}

/// Auth response
///
/// Returned by the login handler and the OAuth callback. Contains the JWT
/// token and the enriched user information.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// JWT token for authentication (30-day expiration)
    pub token: String,
    /// User information (without sensitive data)
    pub user: UserResponse,
}

/// User response (without sensitive data)
///
/// Contains user information that is safe to return to clients, enriched
/// with the user's role names. Does not include the password hash.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// User's username
    pub username: String,
    /// User's email address, if known
    pub email: Option<String>,
    /// Display name, if known
    pub name: Option<String>,
    /// Role names attached to the user (empty only before first sign-in)
    pub roles: Vec<String>,
}

impl UserResponse {
    /// Build a response from a user row and its role names
    pub fn from_user(user: crate::backend::auth::users::User, roles: Vec<String>) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            email: user.email,
            name: user.name,
            roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_deserializes() {
        let request: RegisterRequest =
            serde_json::from_str(r#"{"username":"alice","password":"secret123"}"#).unwrap();
        assert_eq!(request.username, "alice");
        assert_eq!(request.password, "secret123");
    }

    #[test]
    fn test_auth_response_round_trip() {
        let response = AuthResponse {
            token: "token123".to_string(),
            user: UserResponse {
                id: "abc".to_string(),
                username: "alice".to_string(),
                email: None,
                name: None,
                roles: vec!["civilian".to_string()],
            },
        };

        let json = serde_json::to_string(&response).unwrap();
        let parsed: AuthResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.token, "token123");
        assert_eq!(parsed.user.roles, vec!["civilian".to_string()]);
    }
}
