/// The authenticated user as exposed to the rest of the application.
///
/// # Overview
///
/// A `User` is built from the profile returned by the identity provider.
/// It is an immutable value object: fields are private and only readable
/// through accessors, and two users are equal when all five fields are equal.
///
/// # Example
///
/// ```rust
/// use github_user_provider::auth::User;
///
/// let user = User::new(
///     "octocat",
///     "The Octocat",
///     "octocat@github.com",
///     "https://avatars.githubusercontent.com/u/583231",
///     "https://github.com/octocat",
/// );
/// assert_eq!(user.username(), "octocat");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    username: String,
    fullname: String,
    email: String,
    avatar: String,
    profile_html_url: String,
}

impl User {
    /// Creates a new `User` from its five fields, in order:
    /// username, full name, email, avatar URL, profile URL.
    pub fn new(
        username: impl Into<String>,
        fullname: impl Into<String>,
        email: impl Into<String>,
        avatar: impl Into<String>,
        profile_html_url: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            fullname: fullname.into(),
            email: email.into(),
            avatar: avatar.into(),
            profile_html_url: profile_html_url.into(),
        }
    }

    /// The provider login.
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn fullname(&self) -> &str {
        &self.fullname
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// URL of the avatar image.
    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    /// URL of the public profile page.
    pub fn profile_html_url(&self) -> &str {
        &self.profile_html_url
    }
}
