/**
 * Central Application State
 *
 * Holds everything the egui views render from: configuration, auth
 * state, form inputs, and the channel used to receive results from
 * background auth threads.
 */

use std::sync::mpsc::{channel, Receiver};

use crate::egui_app::auth::{get_me, login, register, AuthState};
use crate::egui_app::config::Config;
use crate::egui_app::types::{AppView, UserInfo};

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub auth_state: AuthState,
    pub current_view: AppView,
    pub username_input: String,
    pub password_input: String,
    pub confirm_password_input: String,
    pub is_signup_mode: bool,
    /// Paste field for the token shown after the GitHub browser flow
    pub token_input: String,
    pub auth_result: Option<Receiver<Result<(String, UserInfo), String>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            config: Config::new(),
            auth_state: AuthState::new(),
            current_view: AppView::Auth,
            username_input: String::new(),
            password_input: String::new(),
            confirm_password_input: String::new(),
            is_signup_mode: false,
            token_input: String::new(),
            auth_result: None,
        }
    }

    /// Poll the background auth thread, if one is running.
    pub fn check_auth_result(&mut self) {
        if let Some(ref rx) = self.auth_result {
            if let Ok(result) = rx.try_recv() {
                self.auth_result = None;
                self.auth_state.loading = false;

                match result {
                    Ok((token, user)) => {
                        tracing::info!("Authentication successful: {}", user.username);
                        self.config.set_token(Some(token));
                        self.auth_state.authenticated = true;
                        self.auth_state.user = Some(user);
                        self.auth_state.error = None;
                        self.current_view = AppView::Mailbox;
                        self.password_input.clear();
                        self.confirm_password_input.clear();
                        self.token_input.clear();
                        self.is_signup_mode = false;
                    }
                    Err(e) => {
                        tracing::warn!("Authentication failed: {}", e);
                        self.auth_state.set_error(e);
                    }
                }
            }
        }
    }

    pub fn handle_login(&mut self) {
        if self.username_input.is_empty() || self.password_input.is_empty() {
            self.auth_state
                .set_error("Username and password are required".to_string());
            return;
        }

        self.auth_state.loading = true;
        self.auth_state.error = None;

        let username = self.username_input.clone();
        let password = self.password_input.clone();
        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = login(&config, username, password).map(|auth| (auth.token, auth.user));
            let _ = tx.send(result);
        });

        self.auth_result = Some(rx);
    }

    pub fn handle_register(&mut self) {
        if self.username_input.is_empty() || self.password_input.is_empty() {
            self.auth_state
                .set_error("Username and password are required".to_string());
            return;
        }

        if self.password_input != self.confirm_password_input {
            self.auth_state
                .set_error("Passwords do not match".to_string());
            return;
        }

        self.auth_state.loading = true;
        self.auth_state.error = None;

        let username = self.username_input.clone();
        let password = self.password_input.clone();
        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = register(&config, username, password).map(|auth| (auth.token, auth.user));
            let _ = tx.send(result);
        });

        self.auth_result = Some(rx);
    }

    /// Validate a pasted token by loading the session user with it.
    ///
    /// Used after the GitHub browser flow: the callback page returns the
    /// token as JSON and the user pastes it here.
    pub fn handle_token_submit(&mut self) {
        let token = self.token_input.trim().to_string();
        if token.is_empty() {
            self.auth_state.set_error("Token is required".to_string());
            return;
        }

        self.auth_state.loading = true;
        self.auth_state.error = None;

        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = get_me(&config, &token).map(|user| (token, user));
            let _ = tx.send(result);
        });

        self.auth_result = Some(rx);
    }

    /// Refresh the session user, picking up role changes made server-side.
    pub fn refresh_session(&mut self) {
        let Some(token) = self.config.get_token().cloned() else {
            return;
        };

        self.auth_state.loading = true;

        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = get_me(&config, &token).map(|user| (token, user));
            let _ = tx.send(result);
        });

        self.auth_result = Some(rx);
    }

    /// URL the GitHub sign-in button opens in the system browser.
    pub fn github_auth_url(&self) -> String {
        self.config.api_url("/api/auth/github")
    }

    pub fn logout(&mut self) {
        self.config.clear_token();
        self.auth_state = AuthState::new();
        self.current_view = AppView::Auth;
        self.username_input.clear();
        self.password_input.clear();
        self.confirm_password_input.clear();
        self.token_input.clear();
    }

    pub fn toggle_auth_mode(&mut self) {
        self.is_signup_mode = !self.is_signup_mode;
        self.auth_state.clear_error();
        self.password_input.clear();
        self.confirm_password_input.clear();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_credentials() {
        let mut state = AppState::new();
        state.handle_login();
        assert_eq!(
            state.auth_state.error,
            Some("Username and password are required".to_string())
        );
        assert!(state.auth_result.is_none());
    }

    #[test]
    fn test_register_rejects_password_mismatch() {
        let mut state = AppState::new();
        state.username_input = "alice".to_string();
        state.password_input = "password1".to_string();
        state.confirm_password_input = "password2".to_string();

        state.handle_register();
        assert_eq!(
            state.auth_state.error,
            Some("Passwords do not match".to_string())
        );
        assert!(state.auth_result.is_none());
    }

    #[test]
    fn test_token_submit_requires_token() {
        let mut state = AppState::new();
        state.token_input = "   ".to_string();
        state.handle_token_submit();
        assert_eq!(
            state.auth_state.error,
            Some("Token is required".to_string())
        );
    }

    #[test]
    fn test_logout_resets_state() {
        let mut state = AppState::new();
        state.config.set_token(Some("token".to_string()));
        state.auth_state.authenticated = true;
        state.current_view = AppView::Mailbox;
        state.username_input = "alice".to_string();

        state.logout();

        assert!(state.config.get_token().is_none());
        assert!(!state.auth_state.authenticated);
        assert_eq!(state.current_view, AppView::Auth);
        assert!(state.username_input.is_empty());
    }

    #[test]
    fn test_toggle_auth_mode_clears_passwords() {
        let mut state = AppState::new();
        state.password_input = "secret".to_string();
        state.toggle_auth_mode();
        assert!(state.is_signup_mode);
        assert!(state.password_input.is_empty());
    }
}
