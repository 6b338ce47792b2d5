/**
 * Admin Handlers
 *
 * Permission-guarded endpoints. Currently a single user listing for the
 * site owner: GET /api/admin/users.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::PgPool;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::roles::{check_permission, get_user_role_names};
use crate::backend::auth::users::list_all_users;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::shared::Permission;

/// List all users with their role names
///
/// Requires the `ManageUsers` permission (emperor only).
///
/// # Errors
///
/// * `403 Forbidden` - If the caller lacks the permission
/// * `503 Service Unavailable` - If the database is not configured
/// * `500 Internal Server Error` - If a query fails
pub async fn list_users(
    AuthUser(auth): AuthUser,
    State(pool): State<Option<PgPool>>,
) -> Result<Json<Vec<UserResponse>>, BackendError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        BackendError::unavailable("Database")
    })?;

    if !check_permission(&pool, auth.user_id, Permission::ManageUsers).await? {
        tracing::warn!("Permission denied for user {}", auth.user_id);
        return Err(BackendError::handler(
            StatusCode::FORBIDDEN,
            "Permission denied",
        ));
    }

    let users = list_all_users(&pool).await?;

    let mut responses = Vec::with_capacity(users.len());
    for user in users {
        let roles = get_user_role_names(&pool, user.id).await?;
        responses.push(UserResponse::from_user(user, roles));
    }

    Ok(Json(responses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::middleware::auth::AuthenticatedUser;

    #[tokio::test]
    async fn test_list_users_no_database() {
        let auth = AuthUser(AuthenticatedUser {
            user_id: uuid::Uuid::new_v4(),
            username: "admin".to_string(),
        });

        let result = list_users(auth, State(None)).await;
        assert_eq!(
            result.unwrap_err().status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
