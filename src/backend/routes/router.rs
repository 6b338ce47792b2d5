/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. API routes (auth, OAuth, admin)
 * 2. Health check
 * 3. Fallback handler (404)
 */

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the database pool and
///   OAuth configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    // Add API routes
    let router = configure_api_routes(router, &app_state);

    // Health check used by the desktop client to probe the server
    let router = router.route("/health", axum::routing::get(|| async { "ok" }));

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    // Request/response tracing
    let router = router.layer(TraceLayer::new_for_http());

    // Use AppState as router state
    router.with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_router_builds_without_services() {
        let app_state = AppState {
            db_pool: None,
            github_oauth: None,
        };
        let _router = create_router(app_state);
    }
}
