use crate::core::domain::model::api_response::{ApiErrorDetail, ApiResponse};
use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Cloudflare API operations.
///
/// Transport and decoding faults are reported here. Requests that the provider
/// rejects with a 2xx status and `success: false` are not errors: they come back
/// as an [`ApiResponse`] whose `success` flag is false.
#[derive(Error, Debug)]
pub enum CloudflareError {
    /// The request never produced a response (connection, DNS or TLS failure),
    /// or the response body could not be read.
    ///
    /// # Fields
    /// * `0` - A description of what went wrong on the wire
    #[error("Transport error: {0}")]
    Transport(String),

    /// The provider answered with a non-2xx status.
    ///
    /// # Fields
    /// * `status` - The HTTP status code
    /// * `message` - Provider error messages, or the raw body when no envelope was present
    /// * `envelope` - The structured provider envelope, when the body carried one
    #[error("HTTP error ({status}): {message}")]
    Http {
        status: StatusCode,
        message: String,
        envelope: Option<Box<ApiResponse<serde_json::Value>>>,
    },

    /// The response body did not match the expected envelope shape.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// The request body could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Client-side validation failed before any request was sent.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A local file needed for the request could not be read.
    #[error("Cannot read '{}': {source}", .path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The provider reported `success: false`.
    ///
    /// Only produced by [`ApiResponse::into_result`].
    #[error("Request rejected by provider: {}", join_messages(.errors))]
    Rejected { errors: Vec<ApiErrorDetail> },
}

impl CloudflareError {
    /// Returns the HTTP status for [`CloudflareError::Http`] errors.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            CloudflareError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the structured provider errors carried by this error, if any.
    #[must_use]
    pub fn provider_errors(&self) -> &[ApiErrorDetail] {
        match self {
            CloudflareError::Http {
                envelope: Some(envelope),
                ..
            } => &envelope.errors,
            CloudflareError::Rejected { errors } => errors,
            _ => &[],
        }
    }
}

pub(crate) fn join_messages(errors: &[ApiErrorDetail]) -> String {
    if errors.is_empty() {
        return "no error details provided".to_string();
    }
    errors
        .iter()
        .map(|e| format!("[{}] {}", e.code, e.message))
        .collect::<Vec<String>>()
        .join("; ")
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with a CloudflareError
pub type CloudflareResult<T> = Result<T, CloudflareError>;
