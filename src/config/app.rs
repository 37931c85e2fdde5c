//! # Application Configuration Loader
//!
//! Loads the settings the user provider needs at startup.
//!
//! Automatically loads `.env` files for non-production environments.
//! It checks for a custom `DOTENV_FILE` path first, then falls back to
//! `.env.{APP_ENV}` or `.env`.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, etc.) | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//! | `GITHUB_API_URL` | GitHub REST API base URL | `https://api.github.com` |
//! | `GITHUB_USER_AGENT` | `User-Agent` header value | `"github-user-provider"` |
//! | `GITHUB_HTTP_TIMEOUT_SECS` | Request timeout in seconds | `10` |
//!
//! # Example
//! ```rust,no_run
//! use github_user_provider::config::app::AppConfig;
//!
//! let cfg = AppConfig::from_env();
//! println!("user info endpoint: {}", cfg.github.user_info_url());
//! ```

use std::env;

use tracing::debug;

use crate::config::github::GithubConfig;

/// Top-level application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Current environment name.
    pub app_env: String,
    /// GitHub API settings.
    pub github: GithubConfig,
}

impl AppConfig {
    /// Loads application configuration from environment variables.
    ///
    /// ## Behavior
    /// - Reads `APP_ENV` (defaults to `"development"`).
    /// - Loads `.env` or `.env.{APP_ENV}` for non-production environments.
    /// - Parses all supported environment variables and falls back to defaults.
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if app_env != "production" {
            if let Ok(path) = env::var("DOTENV_FILE") {
                let _ = dotenvy::from_filename(path);
            } else {
                let candidate = format!(".env.{}", app_env);
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        let github = GithubConfig::from_env();
        debug!(
            "config loaded: app_env={} github_api_url={}",
            app_env, github.api_base_url
        );

        AppConfig { app_env, github }
    }
}
