use anyhow::Result;
use async_trait::async_trait;

/// A response whose status is known and whose body can be read once.
///
/// Reading the body consumes the response, so an implementation can never
/// be asked for its contents twice.
#[async_trait]
pub trait HttpResponse: Send {
    /// HTTP status code (e.g. `200`).
    fn status(&self) -> u16;

    /// Reads the whole body as text.
    async fn text(self: Box<Self>) -> Result<String>;
}

/// Port trait for issuing authenticated GET requests.
///
/// This trait is the **only** capability the user provider needs from an
/// HTTP stack. Implementations may use:
///
/// - `reqwest` (see [`ReqwestHttpClient`](super::reqwest_client::ReqwestHttpClient))
/// - an in-memory double for tests
///
/// ## Design notes
///
/// - The bearer token is passed per request, not stored in the client
/// - Non-success statuses are returned as responses, not errors; the caller
///   decides what a status means
/// - `Err(_)` is reserved for transport failures
///
/// ## Thread safety
///
/// Implementations must be `Send + Sync` so they can be shared via `Arc`.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Sends `GET url` with `Authorization: Bearer <bearer_token>`.
    async fn get(&self, url: &str, bearer_token: &str) -> Result<Box<dyn HttpResponse>>;
}
