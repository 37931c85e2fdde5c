use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use tracing::info;

use crate::config::github::GithubConfig;
use crate::http::client::{HttpClient, HttpResponse};

/// Media type recommended by the GitHub REST API.
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// `reqwest`-based implementation of [`HttpClient`].
///
/// ## Responsibilities
///
/// - Sends the `User-Agent` and `Accept` headers GitHub requires on every call
/// - Attaches the access token as a bearer credential
/// - Applies the configured request timeout
///
/// ## What this type does *not* do
///
/// - Interpret status codes
/// - Retry failed requests
/// - Read configuration from environment variables
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Builds a client with the given `User-Agent` and timeout.
    ///
    /// # Errors
    /// - When `user_agent` is not a valid header value
    /// - When the TLS backend cannot be initialized
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        info!(
            "HTTP client init: user_agent={} timeout_secs={}",
            user_agent,
            timeout.as_secs()
        );

        let client = Client::builder()
            .default_headers(default_headers(user_agent)?)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }

    /// Builds a client from [`GithubConfig`].
    pub fn from_config(config: &GithubConfig) -> Result<Self> {
        Self::new(&config.user_agent, config.timeout())
    }
}

/// Headers sent with every request.
fn default_headers(user_agent: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent).context("Invalid User-Agent value")?,
    );
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
    Ok(headers)
}

struct ReqwestResponse(reqwest::Response);

#[async_trait]
impl HttpResponse for ReqwestResponse {
    fn status(&self) -> u16 {
        self.0.status().as_u16()
    }

    async fn text(self: Box<Self>) -> Result<String> {
        self.0.text().await.context("Failed to read response body")
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, bearer_token: &str) -> Result<Box<dyn HttpResponse>> {
        let response = self
            .client
            .get(url)
            .bearer_auth(bearer_token)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {url}"))?;

        Ok(Box::new(ReqwestResponse(response)))
    }
}
