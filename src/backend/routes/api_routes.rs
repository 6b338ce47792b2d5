/**
 * API Route Handlers
 *
 * This module defines route handlers for the API endpoints:
 * - Authentication endpoints (register, login, session read)
 * - GitHub OAuth endpoints (authorize, callback)
 * - Admin endpoints (user listing)
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login
 * - `GET /api/auth/me` - Get current user with roles
 *
 * ## GitHub OAuth
 * - `GET /api/auth/github` - Redirect to GitHub authorization
 * - `GET /api/auth/github/callback` - Complete the OAuth flow
 *
 * ## Admin
 * - `GET /api/admin/users` - List all users (requires manage_users)
 */

use axum::{middleware, Router};

use crate::backend::auth::{github_authorize, github_callback, list_users, login, me, register};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Public routes are registered directly. Protected routes go through
/// [`auth_middleware`], which verifies the Bearer token before the
/// handler runs.
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - Application state, also needed by the auth middleware
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/auth/me", axum::routing::get(me))
        .route("/api/admin/users", axum::routing::get(list_users))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    router
        // Public authentication endpoints
        .route(
            "/api/auth/register",
            axum::routing::post(register),
        )
        .route(
            "/api/auth/login",
            axum::routing::post(login),
        )
        // GitHub OAuth endpoints
        .route(
            "/api/auth/github",
            axum::routing::get(github_authorize),
        )
        .route(
            "/api/auth/github/callback",
            axum::routing::get(github_callback),
        )
        .merge(protected)
}
