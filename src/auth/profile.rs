//! # User Profile Payload
//!
//! [`UserProfile`] is the intermediate shape produced by deserializing the
//! provider's user-info response. Every key is optional: providers omit or
//! `null` fields such as `name` and `email` when the user keeps them private.
//!
//! A profile where none of the known keys are present is considered
//! **empty**, and must never be turned into a [`User`].

use serde::Deserialize;

use super::user::User;

/// Profile mapping returned by the user-info endpoint.
///
/// Unknown keys (`id`, `bio`, `followers`, ...) are ignored.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub login: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
}

impl UserProfile {
    /// Returns `true` when the provider returned none of the profile keys.
    ///
    /// # Example
    /// ```
    /// use github_user_provider::auth::UserProfile;
    ///
    /// assert!(UserProfile::default().is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.login.is_none()
            && self.name.is_none()
            && self.email.is_none()
            && self.avatar_url.is_none()
            && self.html_url.is_none()
    }

    /// Builds a [`User`] from this profile.
    ///
    /// Missing keys become empty strings. Callers must check
    /// [`is_empty`](Self::is_empty) first.
    pub(crate) fn into_user(self) -> User {
        User::new(
            self.login.unwrap_or_default(),
            self.name.unwrap_or_default(),
            self.email.unwrap_or_default(),
            self.avatar_url.unwrap_or_default(),
            self.html_url.unwrap_or_default(),
        )
    }
}
