/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: uuid::Uuid,
    /// Username (unique, 3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// User email address (absent for credential-only registrations)
    pub email: Option<String>,
    /// Display name (set from the GitHub profile for OAuth accounts)
    pub name: Option<String>,
    /// Hashed password (bcrypt); NULL for OAuth-only accounts
    pub password_hash: Option<String>,
    /// GitHub account id for OAuth accounts
    pub github_id: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

const USER_COLUMNS: &str =
    "id, username, email, name, password_hash, github_id, created_at, updated_at";

/// Create a new credential user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - User's chosen username
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user or error
pub async fn create_user(
    pool: &PgPool,
    username: String,
    password_hash: String,
) -> Result<User, sqlx::Error> {
    let id = uuid::Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, password_hash, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, username, email, name, password_hash, github_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&username)
    .bind(&password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by username
pub async fn get_user_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
    ))
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
pub async fn get_user_by_id(pool: &PgPool, id: uuid::Uuid) -> Result<Option<User>, sqlx::Error> {
    let user =
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(user)
}

/// List all users, newest first
pub async fn list_all_users(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    let users = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// Upsert a user from a GitHub sign-in, keyed on `github_id`
///
/// Returning users get their email and display name refreshed from the
/// GitHub profile; the username chosen at first sign-in is kept.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `github_id` - GitHub account id
/// * `username` - GitHub login, used as the username on first sign-in
/// * `email` - Primary verified email from the GitHub profile
/// * `name` - Display name from the GitHub profile
pub async fn upsert_github_user(
    pool: &PgPool,
    github_id: &str,
    username: &str,
    email: Option<String>,
    name: Option<String>,
) -> Result<User, sqlx::Error> {
    let id = uuid::Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, email, name, github_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        ON CONFLICT (github_id)
        DO UPDATE SET
            email = EXCLUDED.email,
            name = EXCLUDED.name,
            updated_at = EXCLUDED.updated_at
        RETURNING id, username, email, name, password_hash, github_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(&email)
    .bind(&name)
    .bind(github_id)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}
