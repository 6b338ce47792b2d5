/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration:
 * the optional PostgreSQL database connection and the optional GitHub
 * OAuth client settings.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables:
 *
 * - `DATABASE_URL` - PostgreSQL connection string
 * - `GITHUB_CLIENT_ID` / `GITHUB_CLIENT_SECRET` - OAuth client
 * - `OAUTH_REDIRECT_URL` - callback URL registered with GitHub
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup.
 * Services that fail to initialize are set to `None` and the endpoints
 * that need them respond with 503.
 */

use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sqlx::PgPool;

/// Database configuration result
///
/// Contains the database connection pool if successfully configured,
/// or `None` if the database is not available.
pub type DatabaseConfig = Option<PgPool>;

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from the environment
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs database migrations
///
/// # Returns
///
/// - `Some(PgPool)` if the database is successfully configured
/// - `None` if `DATABASE_URL` is not set or the connection fails
pub async fn load_database() -> DatabaseConfig {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            // Continue anyway - migrations might have already been run
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}

/// GitHub OAuth client configuration, loaded from the environment.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
    pub auth_url: AuthUrl,
    pub token_url: TokenUrl,
    pub redirect_url: RedirectUrl,
}

impl OAuthConfig {
    /// Create the GitHub OAuth config from environment variables.
    pub fn github() -> Result<Self, String> {
        let client_id =
            std::env::var("GITHUB_CLIENT_ID").map_err(|_| "GITHUB_CLIENT_ID not set")?;
        let client_secret =
            std::env::var("GITHUB_CLIENT_SECRET").map_err(|_| "GITHUB_CLIENT_SECRET not set")?;
        let redirect_url = std::env::var("OAUTH_REDIRECT_URL")
            .unwrap_or_else(|_| "http://localhost:3000/api/auth/github/callback".to_string());

        Ok(Self {
            client_id: ClientId::new(client_id),
            client_secret: ClientSecret::new(client_secret),
            auth_url: AuthUrl::new("https://github.com/login/oauth/authorize".to_string())
                .map_err(|e| e.to_string())?,
            token_url: TokenUrl::new("https://github.com/login/oauth/access_token".to_string())
                .map_err(|e| e.to_string())?,
            redirect_url: RedirectUrl::new(redirect_url).map_err(|e| e.to_string())?,
        })
    }
}

/// Load the GitHub OAuth configuration
///
/// Returns `None` (with a warning) when the client id/secret are not set,
/// leaving the OAuth endpoints disabled.
pub fn load_github_oauth() -> Option<crate::backend::auth::oauth::GitHubOAuth> {
    match OAuthConfig::github() {
        Ok(config) => {
            tracing::info!("GitHub OAuth configured");
            Some(crate::backend::auth::oauth::GitHubOAuth::new(config))
        }
        Err(e) => {
            tracing::warn!("GitHub OAuth not configured: {}", e);
            None
        }
    }
}
