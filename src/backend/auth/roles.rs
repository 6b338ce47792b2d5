/**
 * Role Assignment and Permission Checks
 *
 * This module implements the database side of the role model:
 *
 * - find-or-create of role rows (roles are created lazily on first
 *   reference)
 * - role assignment with the single-active-role invariant (existing
 *   links for the user are deleted before the new one is inserted)
 * - the sign-in event hook that gives first-time users the configured
 *   default role
 * - the permission check that maps a user's role names through the pure
 *   lookup table in `shared::roles`
 *
 * # Concurrency
 *
 * Each operation is a request-scoped sequence of statements with no
 * transaction spanning them. Concurrent first sign-ins of the same user
 * may both attempt find-or-create and assignment; the uniqueness
 * constraints on `roles.name` and `user_roles` bound the outcome.
 */

use crate::shared::roles::{has_permission, Permission, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Role row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RoleRecord {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

/// User-role link row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserRole {
    pub user_id: Uuid,
    pub role_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Read the configured default role for first-time users
///
/// `DEFAULT_ROLE=knight` opts new users into the knight role; any other
/// value (or an unset variable) means civilian.
pub fn default_role() -> Role {
    match std::env::var("DEFAULT_ROLE").as_deref() {
        Ok("knight") => Role::Knight,
        _ => Role::Civilian,
    }
}

/// Find the role row for `role`, creating it if it does not exist
pub async fn find_or_create_role(pool: &PgPool, role: Role) -> Result<RoleRecord, sqlx::Error> {
    let existing = sqlx::query_as::<_, RoleRecord>(
        "SELECT id, name, description FROM roles WHERE name = $1",
    )
    .bind(role.as_str())
    .fetch_optional(pool)
    .await?;

    if let Some(record) = existing {
        return Ok(record);
    }

    // Lost races fall through to the conflict arm and return the winner's row.
    let record = sqlx::query_as::<_, RoleRecord>(
        r#"
        INSERT INTO roles (id, name, description)
        VALUES ($1, $2, $3)
        ON CONFLICT (name) DO UPDATE SET description = EXCLUDED.description
        RETURNING id, name, description
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(role.as_str())
    .bind(role.description())
    .fetch_one(pool)
    .await?;

    Ok(record)
}

/// Assign a role to a user
///
/// Deletes any existing role links for the user before inserting the new
/// one, maintaining the single-active-role invariant.
pub async fn assign_role_to_user(
    pool: &PgPool,
    user_id: Uuid,
    role_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM user_roles WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;

    sqlx::query("INSERT INTO user_roles (user_id, role_id) VALUES ($1, $2)")
        .bind(user_id)
        .bind(role_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Get the role names attached to a user
pub async fn get_user_role_names(pool: &PgPool, user_id: Uuid) -> Result<Vec<String>, sqlx::Error> {
    let names: Vec<(String,)> = sqlx::query_as(
        r#"
        SELECT r.name
        FROM user_roles ur
        JOIN roles r ON r.id = ur.role_id
        WHERE ur.user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(names.into_iter().map(|(name,)| name).collect())
}

/// Sign-in event hook: assign the default role to first-time users
///
/// If the user already has a role link, this is a no-op. Subsequent
/// sign-ins observe the existing role and skip assignment, so the hook is
/// idempotent per user after the first run.
pub async fn ensure_user_role(pool: &PgPool, user_id: Uuid) -> Result<(), sqlx::Error> {
    let existing: Option<(Uuid,)> =
        sqlx::query_as("SELECT role_id FROM user_roles WHERE user_id = $1 LIMIT 1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

    if existing.is_some() {
        return Ok(());
    }

    let role = find_or_create_role(pool, default_role()).await?;
    assign_role_to_user(pool, user_id, role.id).await?;

    tracing::info!("Assigned default role '{}' to user {}", role.name, user_id);
    Ok(())
}

/// Load a user's role names, assigning the default role inline when none
/// exist (first-login race), so the returned list is non-empty for any
/// user that can reach this path.
pub async fn load_or_assign_roles(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<String>, sqlx::Error> {
    let names = get_user_role_names(pool, user_id).await?;
    if !names.is_empty() {
        return Ok(names);
    }

    let role = find_or_create_role(pool, default_role()).await?;
    assign_role_to_user(pool, user_id, role.id).await?;
    Ok(vec![role.name])
}

/// Check whether a user holds a permission
///
/// Fetches the user's role names and delegates to the pure
/// [`has_permission`] lookup table.
pub async fn check_permission(
    pool: &PgPool,
    user_id: Uuid,
    permission: Permission,
) -> Result<bool, sqlx::Error> {
    let names = get_user_role_names(pool, user_id).await?;
    Ok(has_permission(&names, permission))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_role_fallback() {
        // Unset or unrecognized values fall back to civilian.
        std::env::remove_var("DEFAULT_ROLE");
        assert_eq!(default_role(), Role::Civilian);
    }
}
