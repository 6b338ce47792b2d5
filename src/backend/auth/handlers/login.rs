/**
 * Login Handler
 *
 * This module implements the credential authentication handler for
 * POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by username
 * 2. Verify the password using bcrypt (OAuth-only accounts have no hash
 *    and always fail)
 * 3. Run the sign-in role hook (first-time users get the default role)
 * 4. Load role names, generate a JWT token
 * 5. Return token and enriched user info
 *
 * # Security
 *
 * - Unknown username, OAuth-only account, and wrong password all return
 *   the same 401 message to prevent user enumeration
 * - Password verification uses constant-time comparison (via bcrypt)
 * - Role-assignment failures are logged and swallowed; they never block
 *   sign-in
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;
use sqlx::PgPool;

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::backend::auth::roles::{ensure_user_role, get_user_role_names};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::get_user_by_username;
use crate::backend::error::BackendError;
use crate::shared::SharedError;

const INVALID_CREDENTIALS: &str = "Username or password incorrect";

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - If the user is not found, has no stored
///   password, or the password is incorrect
/// * `503 Service Unavailable` - If the database is not configured
/// * `500 Internal Server Error` - If a query or token generation fails
pub async fn login(
    State(pool): State<Option<PgPool>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        BackendError::unavailable("Database")
    })?;

    tracing::info!("Login request for: {}", request.username);

    let user = get_user_by_username(&pool, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.username);
            SharedError::auth(INVALID_CREDENTIALS)
        })?;

    // OAuth-only accounts have no password hash and cannot log in with
    // credentials; same generic message as a wrong password.
    let password_hash = user.password_hash.as_deref().ok_or_else(|| {
        tracing::warn!("No password hash for user: {}", request.username);
        SharedError::auth(INVALID_CREDENTIALS)
    })?;

    let valid = verify(&request.password, password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        BackendError::handler(axum::http::StatusCode::INTERNAL_SERVER_ERROR, "Server error")
    })?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", request.username);
        return Err(SharedError::auth(INVALID_CREDENTIALS).into());
    }

    // Sign-in event hook: first-time users get the default role. Failures
    // are logged and swallowed so they never block sign-in.
    if let Err(e) = ensure_user_role(&pool, user.id).await {
        tracing::error!("Error assigning role to {}: {:?}", user.id, e);
    }

    let roles = get_user_role_names(&pool, user.id).await.unwrap_or_else(|e| {
        tracing::error!("Failed to load roles for {}: {:?}", user.id, e);
        Vec::new()
    });

    let token = create_token(user.id, user.username.clone(), user.email.clone())?;

    tracing::info!("User logged in successfully: {}", user.username);

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
    async fn test_login_no_database() {
        let request = LoginRequest {
            username: "testuser".to_string(),
            password: "password123".to_string(),
        };

        let result = login(State(None), Json(request)).await;
        assert_eq!(
            result.unwrap_err().status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
