/**
 * Session Read Handler
 *
 * This module implements the handler for GET /api/auth/me, which returns
 * the authenticated user enriched with their role names.
 *
 * # Session Enrichment
 *
 * Role names are loaded fresh from the database on every session read.
 * If the user has no role rows yet (first-login race), the default role
 * is found-or-created and assigned inline before the response is built,
 * so the returned role list is always non-empty.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::PgPool;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::roles::load_or_assign_roles;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;

/// Session read handler
///
/// The auth middleware has already verified the JWT and attached the
/// authenticated user to the request.
///
/// # Errors
///
/// * `404 Not Found` - If the user no longer exists
/// * `503 Service Unavailable` - If the database is not configured
/// * `500 Internal Server Error` - If a query fails
pub async fn me(
    AuthUser(auth): AuthUser,
    State(pool): State<Option<PgPool>>,
) -> Result<Json<UserResponse>, BackendError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        BackendError::unavailable("Database")
    })?;

    let user = get_user_by_id(&pool, auth.user_id).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", auth.user_id);
        BackendError::handler(StatusCode::NOT_FOUND, "User not found")
    })?;

    let roles = load_or_assign_roles(&pool, user.id).await?;

    Ok(Json(UserResponse::from_user(user, roles)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::middleware::auth::AuthenticatedUser;

    #[tokio::test]
    async fn test_me_no_database() {
        let auth = AuthUser(AuthenticatedUser {
            user_id: uuid::Uuid::new_v4(),
            username: "testuser".to_string(),
        });

        let result = me(auth, State(None)).await;
        assert_eq!(
            result.unwrap_err().status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
