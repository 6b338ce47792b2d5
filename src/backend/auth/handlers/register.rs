/**
 * Registration Handler
 *
 * This module implements the user registration handler for
 * POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate username format and password length
 * 2. Check if the username is already taken
 * 3. Hash the password using bcrypt
 * 4. Create the user in the database
 * 5. Return the created user
 *
 * No token is issued here: the client signs in through the login entry
 * point after a successful registration, which also triggers the
 * first-sign-in role assignment.
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt with DEFAULT_COST
 * - Passwords are never returned in responses
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::backend::auth::handlers::types::{RegisterRequest, UserResponse};
use crate::backend::auth::users::{create_user, get_user_by_username};
use crate::backend::auth::validation::{validate_password, validate_username};
use crate::backend::error::BackendError;

/// Registration handler
///
/// Validates the input, creates a new user account, and returns the
/// created user. Validation runs before any database access.
///
/// # Errors
///
/// * `400 Bad Request` - If the username or password fails validation
/// * `409 Conflict` - If the username is already taken
/// * `503 Service Unavailable` - If the database is not configured
/// * `500 Internal Server Error` - If hashing or the insert fails
pub async fn register(
    State(pool): State<Option<PgPool>>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, BackendError> {
    validate_username(&request.username)?;
    validate_password(&request.password)?;

    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        BackendError::unavailable("Database")
    })?;

    tracing::info!("Register request for username: {}", request.username);

    if get_user_by_username(&pool, &request.username).await?.is_some() {
        tracing::warn!("Username already exists: {}", request.username);
        return Err(BackendError::handler(
            StatusCode::CONFLICT,
            "Username already exists",
        ));
    }

    let password_hash = hash(&request.password, DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
    })?;

    let user = create_user(&pool, request.username.clone(), password_hash)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create user: {:?}", e);
            BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create user")
        })?;

    tracing::info!("User created successfully: {}", user.username);

    // Roles are assigned on first sign-in, so the list is empty here.
    Ok(Json(UserResponse::from_user(user, Vec::new())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_register_invalid_username() {
        let request = RegisterRequest {
            username: "1bad".to_string(),
            password: "password123".to_string(),
        };

        let result = register(State(None), Json(request)).await;
        assert_eq!(result.unwrap_err().status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_register_short_password() {
        let request = RegisterRequest {
            username: "gooduser".to_string(),
            password: "short".to_string(),
        };

        let result = register(State(None), Json(request)).await;
        assert_eq!(result.unwrap_err().status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_register_no_database() {
        let request = RegisterRequest {
            username: "gooduser".to_string(),
            password: "password123".to_string(),
        };

        let result = register(State(None), Json(request)).await;
        assert_eq!(
            result.unwrap_err().status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
