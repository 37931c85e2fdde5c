pub mod provider;

pub use provider::UserProviderError;
