/**
 * GitHub OAuth Handlers
 *
 * This module implements the two HTTP endpoints of the GitHub OAuth flow:
 *
 * - `GET /api/auth/github` - begins the flow and redirects the browser to
 *   GitHub's authorization page
 * - `GET /api/auth/github/callback` - completes the flow, upserts the
 *   user, runs the sign-in role hook, and returns a JWT
 *
 * The desktop client opens the entry point in the system browser and
 * accepts the token printed by the callback via a paste field.
 */

use axum::{
    extract::{Query, State},
    response::{Json, Redirect},
};
use serde::Deserialize;
use sqlx::PgPool;
use std::sync::Arc;

use crate::backend::auth::handlers::types::{AuthResponse, UserResponse};
use crate::backend::auth::oauth::GitHubOAuth;
use crate::backend::auth::roles::{ensure_user_role, get_user_role_names};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::upsert_github_user;
use crate::backend::error::BackendError;

/// Query parameters GitHub appends to the callback URL
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: String,
    pub state: String,
}

/// OAuth entry point
///
/// Persists a CSRF state + PKCE verifier row and redirects the browser
/// to GitHub's authorization page.
///
/// # Errors
///
/// * `503 Service Unavailable` - If OAuth or the database is not configured
pub async fn github_authorize(
    State(oauth): State<Option<Arc<GitHubOAuth>>>,
    State(pool): State<Option<PgPool>>,
) -> Result<Redirect, BackendError> {
    let oauth = oauth.ok_or_else(|| {
        tracing::warn!("GitHub OAuth not configured");
        BackendError::unavailable("GitHub OAuth")
    })?;
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        BackendError::unavailable("Database")
    })?;

    let auth_url = oauth.begin(&pool).await?;

    tracing::info!("Redirecting to GitHub authorization page");
    Ok(Redirect::to(&auth_url))
}

/// OAuth callback
///
/// Exchanges the authorization code for the user's GitHub profile,
/// upserts the user keyed on the GitHub account id, runs the sign-in
/// role hook, and returns `{token, user}`.
///
/// # Errors
///
/// * `400 Bad Request` - If the CSRF state is unknown or expired
/// * `503 Service Unavailable` - If OAuth or the database is not configured
/// * `500 Internal Server Error` - If the exchange or a query fails
pub async fn github_callback(
    State(oauth): State<Option<Arc<GitHubOAuth>>>,
    State(pool): State<Option<PgPool>>,
    Query(params): Query<CallbackParams>,
) -> Result<Json<AuthResponse>, BackendError> {
    let oauth = oauth.ok_or_else(|| {
        tracing::warn!("GitHub OAuth not configured");
        BackendError::unavailable("GitHub OAuth")
    })?;
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        BackendError::unavailable("Database")
    })?;

    let profile = oauth.exchange_code(&pool, &params.code, &params.state).await?;

    let user = upsert_github_user(
        &pool,
        &profile.github_id,
        &profile.login,
        profile.email,
        profile.name,
    )
    .await?;

    // Sign-in event hook, same as credential login: failures are logged
    // and swallowed.
    if let Err(e) = ensure_user_role(&pool, user.id).await {
        tracing::error!("Error assigning role to {}: {:?}", user.id, e);
    }

    let roles = get_user_role_names(&pool, user.id).await.unwrap_or_else(|e| {
        tracing::error!("Failed to load roles for {}: {:?}", user.id, e);
        Vec::new()
    });

    let token = create_token(user.id, user.username.clone(), user.email.clone())?;

    tracing::info!("GitHub sign-in completed for: {}", user.username);

    Ok(Json(AuthResponse {
        token,
        user: UserResponse::from_user(user, roles),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_authorize_oauth_not_configured() {
        let result = github_authorize(State(None), State(None)).await;
        assert_eq!(
            result.unwrap_err().status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn test_callback_oauth_not_configured() {
        let params = CallbackParams {
            code: "code".to_string(),
            state: "state".to_string(),
        };
        let result = github_callback(State(None), State(None), Query(params)).await;
        assert_eq!(
            result.unwrap_err().status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
