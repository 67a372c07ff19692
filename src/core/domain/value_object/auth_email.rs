use crate::core::domain::error::{CloudflareResult, ValidationError};

/// The account email that accompanies a global API key (`X-Auth-Email`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthEmail(String);

impl AuthEmail {
    /// Creates a validated account email.
    ///
    /// # Errors
    /// Returns `CloudflareError::Validation` if the address is not of the form `local@domain`.
    pub fn new(email: impl Into<String>) -> CloudflareResult<Self> {
        let email = email.into();
        validate_auth_email(&email)?;
        Ok(Self(email))
    }

    /// Creates a new email without validation.
    #[allow(dead_code)]
    pub(crate) fn new_unchecked(email: String) -> Self {
        Self(email)
    }

    /// Returns the email as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validates the shape of an account email.
pub(crate) fn validate_auth_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::Field {
            field: "email".to_string(),
            message: "Email cannot be empty".to_string(),
        });
    }
    if email.len() > 254 {
        return Err(ValidationError::Format(
            "Email cannot exceed 254 characters".to_string(),
        ));
    }
    if !email.chars().all(|c| c.is_ascii_graphic()) {
        return Err(ValidationError::Format(
            "Email contains whitespace or non-ASCII characters".to_string(),
        ));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(ValidationError::Format(
            "Email must be of the form local@domain".to_string(),
        )),
    }
}
