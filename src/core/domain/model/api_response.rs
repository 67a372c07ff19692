//! The provider's standard response envelope.
//!
//! Every JSON endpoint answers with
//! `{ success, errors, messages, result, result_info }`.

use crate::core::domain::{
    error::{CloudflareError, CloudflareResult},
    value_object::serde_helpers,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// A typed response envelope.
///
/// `result` is only trustworthy when `success` is true; check the flag (or use
/// [`ApiResponse::into_result`]) before reading it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the provider accepted the request.
    pub success: bool,
    /// Structured provider errors, in the order they were reported.
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub errors: Vec<ApiErrorDetail>,
    /// Informational messages, in the order they were reported.
    #[serde(default, deserialize_with = "serde_helpers::messages::deserialize")]
    pub messages: Vec<String>,
    /// The payload; absent or null when `success` is false.
    #[serde(default = "Option::default")]
    pub result: Option<T>,
    /// Pagination metadata for list endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_info: Option<ResultInfo>,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Parses a raw response body into a typed envelope.
    ///
    /// A body with `success: false` parses successfully; only bodies that are
    /// not JSON, lack `success`, or carry a mistyped `result` fail.
    ///
    /// # Errors
    /// Returns `CloudflareError::Deserialization` on any shape mismatch.
    pub fn parse(body: &str) -> CloudflareResult<Self> {
        serde_json::from_str(body).map_err(|e| CloudflareError::Deserialization(e.to_string()))
    }
}

impl<T> ApiResponse<T> {
    /// Converts the envelope into its payload.
    ///
    /// # Errors
    /// Returns `CloudflareError::Rejected` when `success` is false, and
    /// `CloudflareError::Deserialization` when a successful envelope has no result.
    pub fn into_result(self) -> CloudflareResult<T> {
        if !self.success {
            return Err(CloudflareError::Rejected {
                errors: self.errors,
            });
        }
        self.result.ok_or_else(|| {
            CloudflareError::Deserialization("successful response carried no result".to_string())
        })
    }
}

/// A structured provider error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiErrorDetail {
    pub code: i64,
    pub message: String,
    /// Underlying errors that led to this one.
    #[serde(
        default,
        deserialize_with = "serde_helpers::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub error_chain: Vec<ApiErrorDetail>,
}

/// Pagination metadata returned by list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResultInfo {
    pub page: u32,
    pub per_page: u32,
    /// Number of items on this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    pub total_count: u32,
    #[serde(default)]
    pub total_pages: u32,
}

impl ResultInfo {
    /// Returns true when pages after this one exist.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        if self.total_pages > 0 {
            return self.page < self.total_pages;
        }
        u64::from(self.page) * u64::from(self.per_page) < u64::from(self.total_count)
    }
}
