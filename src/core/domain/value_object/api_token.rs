use crate::core::domain::error::{CloudflareResult, ValidationError};
use std::fmt;

/// A scoped Cloudflare API token, sent as `Authorization: Bearer <token>`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a validated API token.
    ///
    /// # Errors
    /// Returns `CloudflareError::Validation` if the token is empty or contains
    /// characters that cannot appear in an HTTP header.
    pub fn new(token: impl Into<String>) -> CloudflareResult<Self> {
        let token = token.into();
        validate_api_token(&token)?;
        Ok(Self(token))
    }

    /// Creates a new token without validation.
    #[allow(dead_code)]
    pub(crate) fn new_unchecked(token: String) -> Self {
        Self(token)
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Formats the token as an `Authorization` header value.
    #[must_use]
    pub fn as_bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

/// Validates the format of an API token string.
pub(crate) fn validate_api_token(token: &str) -> Result<(), ValidationError> {
    if token.is_empty() {
        return Err(ValidationError::Field {
            field: "api_token".to_string(),
            message: "API token cannot be empty".to_string(),
        });
    }
    if !token.chars().all(|c| c.is_ascii_graphic()) {
        return Err(ValidationError::Format(
            "API token must only contain visible ASCII characters".to_string(),
        ));
    }
    Ok(())
}
