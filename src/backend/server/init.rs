/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server: loading optional services and configuring the router.
 *
 * # Initialization Process
 *
 * 1. Load the optional database pool (runs migrations when available)
 * 2. Load the optional GitHub OAuth client
 * 3. Create the application state and router
 *
 * # Error Handling
 *
 * Initialization is resilient: a missing database or OAuth configuration
 * is logged and the server starts with those features disabled.
 */

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, load_github_oauth};
use crate::backend::server::state::AppState;
use axum::Router;
use std::sync::Arc;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing MoxMail auth server");

    let db_pool = load_database().await;
    let github_oauth = load_github_oauth().map(Arc::new);

    let app_state = AppState {
        db_pool,
        github_oauth,
    };

    create_router(app_state)
}
