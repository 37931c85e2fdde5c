//! # GitHub User Provider
//!
//! Loads the [`User`] behind an OAuth access token.
//!
//! One call performs exactly:
//! 1. one `GET {api}/user` with the token as bearer credential
//! 2. one read of the response body
//! 3. one deserialization of the body into a [`UserProfile`]
//!
//! An empty profile is rejected with [`UserProviderError::NoUserData`].
//! Nothing is cached between calls.
//!
//! [`UserProfile`]: crate::auth::UserProfile

use std::sync::Arc;

use anyhow::Result as AnyResult;
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::auth::user::User;
use crate::config::github::GithubConfig;
use crate::error::provider::UserProviderError;
use crate::http::{HttpClient, ReqwestHttpClient};
use crate::serializer::{JsonProfileDeserializer, ProfileDeserializer};

/// Port for resolving an access token into a [`User`].
#[async_trait]
pub trait UserProvider: Send + Sync {
    /// Loads the user owning `access_token`.
    ///
    /// The name follows the framework convention where the "username" handed
    /// to a provider is whatever credential identifies the user; here it is
    /// the OAuth access token.
    async fn load_user_by_username(&self, access_token: &str) -> Result<User, UserProviderError>;
}

/// [`UserProvider`] backed by the GitHub `/user` endpoint.
///
/// # Example
/// ```rust,no_run
/// use github_user_provider::auth::{GithubUserProvider, UserProvider};
/// use github_user_provider::config::github::GithubConfig;
///
/// # async fn run() -> anyhow::Result<()> {
/// let provider = GithubUserProvider::from_config(&GithubConfig::from_env())?;
/// let user = provider.load_user_by_username("gho_xxx").await?;
/// println!("signed in as {}", user.username());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GithubUserProvider {
    client: Arc<dyn HttpClient>,
    deserializer: Arc<dyn ProfileDeserializer>,
    user_info_url: String,
}

impl GithubUserProvider {
    /// Creates a provider from explicit collaborators.
    pub fn new(
        client: Arc<dyn HttpClient>,
        deserializer: Arc<dyn ProfileDeserializer>,
        user_info_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            deserializer,
            user_info_url: user_info_url.into(),
        }
    }

    /// Creates a provider using `reqwest` and `serde_json`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &GithubConfig) -> AnyResult<Self> {
        let client = ReqwestHttpClient::from_config(config)?;
        Ok(Self::new(
            Arc::new(client),
            Arc::new(JsonProfileDeserializer),
            config.user_info_url(),
        ))
    }

    pub fn user_info_url(&self) -> &str {
        &self.user_info_url
    }
}

#[async_trait]
impl UserProvider for GithubUserProvider {
    async fn load_user_by_username(&self, access_token: &str) -> Result<User, UserProviderError> {
        if access_token.trim().is_empty() {
            return Err(UserProviderError::MissingToken);
        }

        debug!("fetching user info from {}", self.user_info_url);

        let response = self
            .client
            .get(&self.user_info_url, access_token)
            .await
            .map_err(UserProviderError::Request)?;

        let status = response.status();
        let body = response.text().await.map_err(UserProviderError::Request)?;

        if !(200..300).contains(&status) {
            warn!("user info request rejected: status={}", status);
            return Err(UserProviderError::Status { status, body });
        }

        let profile = self
            .deserializer
            .deserialize(&body)
            .map_err(UserProviderError::Deserialize)?;

        if profile.is_empty() {
            warn!("provider returned an empty user profile");
            return Err(UserProviderError::NoUserData);
        }

        let user = profile.into_user();
        debug!("loaded user {}", user.username());
        Ok(user)
    }
}
