/**
 * GitHub OAuth 2.0 Flow
 *
 * Implements the GitHub Authorization Code flow with PKCE.
 *
 * # Flow
 *
 * 1. `begin` builds an authorization URL requesting the `user:email` and
 *    `read:user` scopes, generates a random PKCE challenge, and persists
 *    the CSRF state + verifier in the `oauth_states` table with a
 *    10-minute expiry.
 *
 * 2. `exchange_code` is called by the `/api/auth/github/callback` route.
 *    It retrieves and atomically deletes the matching `oauth_states` row
 *    (validating CSRF state and expiry in one query), exchanges the
 *    authorization code + PKCE verifier for an access token, and fetches
 *    the user's profile from `api.github.com/user` - falling back to
 *    `/user/emails` for the primary verified address when the profile
 *    carries no public email.
 */

use crate::backend::error::BackendError;
use crate::backend::server::config::OAuthConfig;
use oauth2::basic::BasicClient;
use oauth2::{
    AuthorizationCode, CsrfToken, EndpointNotSet, EndpointSet, PkceCodeChallenge,
    PkceCodeVerifier, Scope, TokenResponse,
};
use serde::Deserialize;
use sqlx::PgPool;

const USER_AGENT: &str = "MoxMail";

/// GitHub user info from the API
#[derive(Debug, Deserialize)]
struct GitHubUser {
    id: i64,
    login: String,
    email: Option<String>,
    name: Option<String>,
}

/// GitHub email info from the API
#[derive(Debug, Deserialize)]
struct GitHubEmail {
    email: String,
    primary: bool,
    verified: bool,
}

/// Profile data extracted from a completed GitHub sign-in
#[derive(Debug, Clone)]
pub struct GitHubProfile {
    /// GitHub account id, used as the upsert key
    pub github_id: String,
    /// GitHub login, used as the username on first sign-in
    pub login: String,
    /// Primary verified email, if any
    pub email: Option<String>,
    /// Display name from the profile
    pub name: Option<String>,
}

/// OAuth client type with auth URL and token URL set
type ConfiguredClient = oauth2::Client<
    oauth2::basic::BasicErrorResponse,
    oauth2::basic::BasicTokenResponse,
    oauth2::basic::BasicTokenIntrospectionResponse,
    oauth2::StandardRevocableToken,
    oauth2::basic::BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// GitHub OAuth handler
pub struct GitHubOAuth {
    config: OAuthConfig,
}

impl GitHubOAuth {
    /// Create a new GitHub OAuth handler from loaded configuration
    pub fn new(config: OAuthConfig) -> Self {
        Self { config }
    }

    fn create_client(&self) -> ConfiguredClient {
        BasicClient::new(self.config.client_id.clone())
            .set_client_secret(self.config.client_secret.clone())
            .set_auth_uri(self.config.auth_url.clone())
            .set_token_uri(self.config.token_url.clone())
            .set_redirect_uri(self.config.redirect_url.clone())
    }

    /// Build an authorization URL with a fresh PKCE challenge
    ///
    /// Pure: performs no I/O. Returns the URL plus the CSRF state and
    /// PKCE verifier that must be persisted for the callback.
    pub fn build_authorize_url(&self) -> (String, String, String) {
        let client = self.create_client();
        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

        let (auth_url, csrf_state) = client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("user:email".to_string()))
            .add_scope(Scope::new("read:user".to_string()))
            .set_pkce_challenge(pkce_challenge)
            .url();

        (
            auth_url.to_string(),
            csrf_state.secret().clone(),
            pkce_verifier.secret().clone(),
        )
    }

    /// Begin the OAuth flow: persist state and return the authorization URL
    pub async fn begin(&self, pool: &PgPool) -> Result<String, BackendError> {
        let (auth_url, state, verifier) = self.build_authorize_url();

        sqlx::query(
            r#"
            INSERT INTO oauth_states (state, provider, pkce_verifier, expires_at)
            VALUES ($1, 'github', $2, NOW() + INTERVAL '10 minutes')
            "#,
        )
        .bind(&state)
        .bind(&verifier)
        .execute(pool)
        .await?;

        Ok(auth_url)
    }

    /// Exchange an authorization code for the user's GitHub profile
    pub async fn exchange_code(
        &self,
        pool: &PgPool,
        code: &str,
        state: &str,
    ) -> Result<GitHubProfile, BackendError> {
        // Retrieve and delete the state row in one statement, validating
        // CSRF state and expiry together.
        let row: Option<(String,)> = sqlx::query_as(
            r#"
            DELETE FROM oauth_states
            WHERE state = $1 AND provider = 'github' AND expires_at > NOW()
            RETURNING pkce_verifier
            "#,
        )
        .bind(state)
        .fetch_optional(pool)
        .await?;

        let pkce_verifier = row
            .ok_or_else(|| {
                BackendError::handler(
                    axum::http::StatusCode::BAD_REQUEST,
                    "Invalid or expired OAuth state",
                )
            })?
            .0;

        let http_client = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| BackendError::oauth(format!("HTTP client build failed: {}", e)))?;

        let client = self.create_client();

        let token_result = client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .set_pkce_verifier(PkceCodeVerifier::new(pkce_verifier))
            .request_async(&http_client)
            .await
            .map_err(|e| BackendError::oauth(format!("Token exchange failed: {}", e)))?;

        let access_token = token_result.access_token().secret();

        let api_client = reqwest::Client::new();

        let github_user: GitHubUser = api_client
            .get("https://api.github.com/user")
            .header("Authorization", format!("Bearer {}", access_token))
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| BackendError::oauth(format!("Profile fetch failed: {}", e)))?
            .json()
            .await
            .map_err(|e| BackendError::oauth(format!("Profile parse failed: {}", e)))?;

        let email = match github_user.email {
            Some(email) => Some(email),
            None => {
                let emails: Vec<GitHubEmail> = api_client
                    .get("https://api.github.com/user/emails")
                    .header("Authorization", format!("Bearer {}", access_token))
                    .header("User-Agent", USER_AGENT)
                    .send()
                    .await
                    .map_err(|e| BackendError::oauth(format!("Email fetch failed: {}", e)))?
                    .json()
                    .await
                    .map_err(|e| BackendError::oauth(format!("Email parse failed: {}", e)))?;

                emails
                    .into_iter()
                    .find(|e| e.primary && e.verified)
                    .map(|e| e.email)
            }
        };

        Ok(GitHubProfile {
            github_id: github_user.id.to_string(),
            login: github_user.login,
            email,
            name: github_user.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

    fn test_handler() -> GitHubOAuth {
        GitHubOAuth::new(OAuthConfig {
            client_id: ClientId::new("test-client".to_string()),
            client_secret: ClientSecret::new("test-secret".to_string()),
            auth_url: AuthUrl::new("https://github.com/login/oauth/authorize".to_string())
                .unwrap(),
            token_url: TokenUrl::new("https://github.com/login/oauth/access_token".to_string())
                .unwrap(),
            redirect_url: RedirectUrl::new(
                "http://localhost:3000/api/auth/github/callback".to_string(),
            )
            .unwrap(),
        })
    }

    #[test]
    fn test_build_authorize_url() {
        let handler = test_handler();
        let (url, state, verifier) = handler.build_authorize_url();

        assert!(url.starts_with("https://github.com/login/oauth/authorize"));
        assert!(url.contains("client_id=test-client"));
        assert!(url.contains("code_challenge="));
        assert!(url.contains(&format!("state={}", state)));
        assert!(!verifier.is_empty());
    }

    #[test]
    fn test_authorize_url_state_is_random() {
        let handler = test_handler();
        let (_, state_a, verifier_a) = handler.build_authorize_url();
        let (_, state_b, verifier_b) = handler.build_authorize_url();
        assert_ne!(state_a, state_b);
        assert_ne!(verifier_a, verifier_b);
    }
}
