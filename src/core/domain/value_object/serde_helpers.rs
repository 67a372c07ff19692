//! Serde helpers for provider payloads that vary in shape.

use serde::{Deserialize, Deserializer};

/// Deserialization for the envelope `messages` array.
///
/// The provider sends either plain strings or `{ "code": .., "message": .. }`
/// objects. Both are normalised to the message text; `null` becomes an empty list.
pub mod messages {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawMessage {
        Text(String),
        Detailed { message: String },
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Vec<RawMessage>>::deserialize(deserializer)?;
        Ok(raw
            .unwrap_or_default()
            .into_iter()
            .map(|m| match m {
                RawMessage::Text(text) => text,
                RawMessage::Detailed { message } => message,
            })
            .collect())
    }
}

/// Deserializes `null` as the type's default value.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
