use crate::core::domain::{
    error::CloudflareResult, model::authentication::Authentication,
    value_object::ApiBaseUrl,
};
use url::Url;

/// Default API base, without the version segment.
pub const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client";

/// Default API version segment.
pub const DEFAULT_API_VERSION: &str = "v4";

/// Immutable connection settings shared by every request of a client.
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    base_url: ApiBaseUrl,
    api_version: String,
    authentication: Authentication,
}

impl ConnectionInfo {
    pub fn new(
        base_url: ApiBaseUrl,
        api_version: impl Into<String>,
        authentication: Authentication,
    ) -> Self {
        Self {
            base_url,
            api_version: api_version.into().trim_matches('/').to_string(),
            authentication,
        }
    }

    pub fn base_url(&self) -> &ApiBaseUrl {
        &self.base_url
    }

    /// The version path segment; empty when paths hang directly off the base URL.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn authentication(&self) -> &Authentication {
        &self.authentication
    }

    /// Builds the absolute URL of an endpoint path.
    ///
    /// # Errors
    /// Returns `CloudflareError::Validation` if the resulting URL is invalid.
    pub fn endpoint_url(&self, path: &str) -> CloudflareResult<Url> {
        self.base_url.join(&self.api_version, path)
    }
}
