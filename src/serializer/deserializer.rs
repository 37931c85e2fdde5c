//! # Profile Deserialization Port
//!
//! Defines [`ProfileDeserializer`], the capability of turning a raw
//! user-info response body into a [`UserProfile`].
//!
//! # Example
//! ```rust
//! use anyhow::Result;
//! use github_user_provider::auth::UserProfile;
//! use github_user_provider::serializer::deserializer::ProfileDeserializer;
//!
//! struct Fixed;
//!
//! impl ProfileDeserializer for Fixed {
//!     fn deserialize(&self, _text: &str) -> Result<UserProfile> {
//!         Ok(UserProfile {
//!             login: Some("octocat".into()),
//!             ..Default::default()
//!         })
//!     }
//! }
//!
//! let profile = Fixed.deserialize("ignored").unwrap();
//! assert_eq!(profile.login.as_deref(), Some("octocat"));
//! ```

use anyhow::Result;

use crate::auth::UserProfile;

/// Converts response text into a [`UserProfile`].
///
/// Implementations must not decide whether a profile is usable; an empty
/// profile is a valid result and is rejected by the caller.
pub trait ProfileDeserializer: Send + Sync {
    fn deserialize(&self, text: &str) -> Result<UserProfile>;
}
