use anyhow::{Context, Result};

use crate::auth::UserProfile;
use crate::serializer::deserializer::ProfileDeserializer;

/// `serde_json` implementation of [`ProfileDeserializer`].
///
/// A JSON `null` document is read as an empty profile.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonProfileDeserializer;

impl ProfileDeserializer for JsonProfileDeserializer {
    fn deserialize(&self, text: &str) -> Result<UserProfile> {
        let profile: Option<UserProfile> =
            serde_json::from_str(text).context("Failed to deserialize user profile JSON")?;
        Ok(profile.unwrap_or_default())
    }
}
