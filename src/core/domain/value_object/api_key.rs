use crate::core::domain::error::{CloudflareResult, ValidationError};
use std::fmt;

/// A legacy global API key, sent as `X-Auth-Key` together with the account email.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a validated API key.
    ///
    /// # Errors
    /// Returns `CloudflareError::Validation` if the key is empty or not header-safe.
    pub fn new(key: impl Into<String>) -> CloudflareResult<Self> {
        let key = key.into();
        validate_api_key(&key)?;
        Ok(Self(key))
    }

    /// Creates a new key without validation.
    #[allow(dead_code)]
    pub(crate) fn new_unchecked(key: String) -> Self {
        Self(key)
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Validates the format of an API key string.
pub(crate) fn validate_api_key(key: &str) -> Result<(), ValidationError> {
    if key.is_empty() {
        return Err(ValidationError::Field {
            field: "api_key".to_string(),
            message: "API key cannot be empty".to_string(),
        });
    }
    if !key.chars().all(|c| c.is_ascii_graphic()) {
        return Err(ValidationError::Format(
            "API key must only contain visible ASCII characters".to_string(),
        ));
    }
    Ok(())
}
