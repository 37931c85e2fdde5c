//! # github_user_provider
//!
//! Resolves a GitHub OAuth access token into a local [`User`](auth::User).
//!
//! This crate provides:
//! - The user entity and provider (`auth`)
//! - Ports and adapters for HTTP (`http`) and profile deserialization (`serializer`)
//! - Environment-driven configuration (`config`)
//! - The provider error type (`error`)
//!
//! ## Example usage (in another crate)
//!
//! ```rust,no_run
//! use github_user_provider::auth::{GithubUserProvider, UserProvider};
//! use github_user_provider::config::app::AppConfig;
//!
//! # async fn run(token: &str) -> github_user_provider::anyhow::Result<()> {
//! let cfg = AppConfig::from_env();
//! let provider = GithubUserProvider::from_config(&cfg.github)?;
//! let user = provider.load_user_by_username(token).await?;
//! println!("{} <{}>", user.fullname(), user.email());
//! # Ok(())
//! # }
//! ```

// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use async_trait;
pub use dotenvy;
pub use reqwest;
pub use serde;
pub use serde_json;
pub use tokio;

// ===============================
// Public modules
// ===============================
pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod serializer;
