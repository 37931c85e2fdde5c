use std::time::Duration;

use crate::config::env::{read_string, read_u32};

/// Default GitHub REST API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
/// Default `User-Agent` header value.
pub const DEFAULT_USER_AGENT: &str = "github-user-provider";
/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u32 = 10;

/// Settings for talking to the GitHub API.
///
/// Loaded from environment variables, all optional:
/// - `GITHUB_API_URL` (default: `https://api.github.com`)
/// - `GITHUB_USER_AGENT` (default: `"github-user-provider"`)
/// - `GITHUB_HTTP_TIMEOUT_SECS` (default: `10`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GithubConfig {
    /// API base URL without a trailing slash
    pub api_base_url: String,
    /// Value sent in the `User-Agent` header
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u32,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            user_agent: DEFAULT_USER_AGENT.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GithubConfig {
    /// Creates a `GithubConfig` from environment variables.
    pub fn from_env() -> Self {
        let api_base_url = read_string("GITHUB_API_URL", DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Self {
            api_base_url,
            user_agent: read_string("GITHUB_USER_AGENT", DEFAULT_USER_AGENT),
            timeout_secs: read_u32("GITHUB_HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
        }
    }

    /// URL of the authenticated user endpoint.
    ///
    /// # Example
    /// ```
    /// use github_user_provider::config::github::GithubConfig;
    ///
    /// let cfg = GithubConfig::default();
    /// assert_eq!(cfg.user_info_url(), "https://api.github.com/user");
    /// ```
    pub fn user_info_url(&self) -> String {
        format!("{}/user", self.api_base_url)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_secs))
    }
}
