//! # Environment Variable Utilities
//!
//! Helpers for reading environment variables with fallback defaults.
//! Each reader has a `*_from` variant that takes a provider function,
//! so parsing can be tested without touching the process environment.
//!
//! # Examples
//! ```rust,no_run
//! use github_user_provider::config::env::{read_string, read_u32};
//!
//! let agent = read_string("GITHUB_USER_AGENT", "github-user-provider");
//! let timeout = read_u32("GITHUB_HTTP_TIMEOUT_SECS", 10);
//! ```

/// Reads a string variable, returning `default` when it is missing or blank.
pub fn read_string(name: &str, default: &str) -> String {
    read_string_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a string using a custom provider function.
///
/// Surrounding whitespace and quotes are stripped.
///
/// # Example
/// ```rust
/// use github_user_provider::config::env::read_string_from;
///
/// let val = read_string_from(|_| Some(" 'my-app' ".into()), "AGENT", "default");
/// assert_eq!(val, "my-app");
/// ```
pub fn read_string_from<F>(provider: F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .map(|v| v.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Reads an unsigned integer (`u32`) from an environment variable,
/// returning the provided default if parsing fails.
pub fn read_u32(name: &str, default: u32) -> u32 {
    read_u32_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a `u32` using a custom provider function.
pub fn read_u32_from<F>(provider: F, name: &str, default: u32) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(default)
}
