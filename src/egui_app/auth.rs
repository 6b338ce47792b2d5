/**
 * Authentication Module
 *
 * Handles authentication state and HTTP client functions for
 * login/register/session read.
 */

use crate::egui_app::config::Config;
use crate::egui_app::types::{AuthResponse, LoginRequest, RegisterRequest, UserInfo, UserResponse};
use reqwest::Client;
use tokio::runtime::Runtime;

/// Authentication state
#[derive(Debug, Clone)]
pub struct AuthState {
    pub authenticated: bool,
    pub user: Option<UserInfo>,
    pub error: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            authenticated: false,
            user: None,
            error: None,
            loading: false,
        }
    }
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
    }
}

/// Extract the `error` field from a JSON error body, falling back to the
/// raw text when the body is not in the expected shape.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or_else(|| body.to_string())
}

/// Login user with username and password
pub fn login(config: &Config, username: String, password: String) -> Result<AuthResponse, String> {
    let client = Client::new();
    let url = config.api_url("/api/auth/login");

    let request = LoginRequest { username, password };

    // Create a runtime for async execution
    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(extract_error_message(&body));
        }

        let auth_response: AuthResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        Ok(auth_response)
    })
}

/// Register a new user, then log in to obtain a session token
///
/// Registration itself returns the created user without a token. Logging
/// in right after also runs the server's sign-in role hook, so the
/// returned user carries role names.
pub fn register(
    config: &Config,
    username: String,
    password: String,
) -> Result<AuthResponse, String> {
    let client = Client::new();
    let url = config.api_url("/api/auth/register");

    let request = RegisterRequest {
        username: username.clone(),
        password: password.clone(),
    };

    // Create a runtime for async execution
    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(extract_error_message(&body));
        }

        Ok(())
    })?;

    login(config, username, password)
}

/// Get current user info with token
pub fn get_me(config: &Config, token: &str) -> Result<UserInfo, String> {
    let client = Client::new();
    let url = config.api_url("/api/auth/me");

    // Create a runtime for async execution
    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .get(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(extract_error_message(&body));
        }

        let user_response: UserResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        Ok(UserInfo::from(user_response))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_state_new() {
        let state = AuthState::new();
        assert!(!state.authenticated);
        assert!(state.user.is_none());
        assert!(state.error.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn test_auth_state_clear_error() {
        let mut state = AuthState::new();
        state.set_error("Test error".to_string());
        assert!(state.error.is_some());

        state.clear_error();
        assert!(state.error.is_none());
    }

    #[test]
    fn test_extract_error_message_json() {
        let body = r#"{"error":"Username already exists","status":409}"#;
        assert_eq!(extract_error_message(body), "Username already exists");
    }

    #[test]
    fn test_extract_error_message_plain_text() {
        assert_eq!(extract_error_message("bad gateway"), "bad gateway");
    }
}
