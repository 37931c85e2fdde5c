pub mod profile;
pub mod provider;
pub mod user;

pub use profile::UserProfile;
pub use provider::{GithubUserProvider, UserProvider};
pub use user::User;
