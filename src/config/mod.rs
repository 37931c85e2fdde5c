pub mod app;
pub mod env;
pub mod github;

pub use app::AppConfig;
pub use github::GithubConfig;
