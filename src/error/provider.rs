use thiserror::Error;

/// Message reported when the provider returns no usable profile data.
pub const NO_USER_DATA_MESSAGE: &str =
    "Did not manage to obtain your user information from the provider.";

/// Errors returned while loading a user from the identity provider.
///
/// # Design
/// - [`NoUserData`](Self::NoUserData) is the only domain failure: the request
///   succeeded but the deserialized profile was empty.
/// - Transport, status and payload failures are kept as separate variants so
///   callers never confuse them with "no user data".
///
/// # Example
/// ```
/// use github_user_provider::error::provider::UserProviderError;
///
/// let err = UserProviderError::NoUserData;
/// assert_eq!(
///     err.to_string(),
///     "Did not manage to obtain your user information from the provider."
/// );
/// ```
#[derive(Debug, Error)]
pub enum UserProviderError {
    /// The deserialized profile contained none of the expected keys.
    #[error("Did not manage to obtain your user information from the provider.")]
    NoUserData,

    /// The access token was empty; no request was sent.
    #[error("access token must not be empty")]
    MissingToken,

    /// The request could not be sent or the body could not be read.
    #[error("user info request failed")]
    Request(#[source] anyhow::Error),

    /// The provider answered with a non-success HTTP status.
    #[error("provider responded with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not a valid profile document.
    #[error("malformed user info payload")]
    Deserialize(#[source] anyhow::Error),
}
