/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding the optional
 * services the auth endpoints depend on:
 * - the PostgreSQL connection pool
 * - the GitHub OAuth client
 *
 * Both are `Option<T>`: a missing `DATABASE_URL` or OAuth client secret
 * disables the corresponding endpoints (503) without preventing startup.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the part of the
 * state they need, e.g. `State(pool): State<Option<PgPool>>`.
 */

use crate::backend::auth::oauth::GitHubOAuth;
use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::Arc;

/// Application state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// `None` if the database is not configured. Handlers check for
    /// `None` before touching the database.
    pub db_pool: Option<PgPool>,

    /// GitHub OAuth client
    ///
    /// `None` if `GITHUB_CLIENT_ID`/`GITHUB_CLIENT_SECRET` are not set;
    /// the OAuth endpoints respond with 503 in that case.
    pub github_oauth: Option<Arc<GitHubOAuth>>,
}

/// Allow handlers to extract the optional database pool directly.
impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Allow handlers to extract the optional OAuth client directly.
impl FromRef<AppState> for Option<Arc<GitHubOAuth>> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.github_oauth.clone()
    }
}
