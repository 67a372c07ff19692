use crate::core::domain::error::{CloudflareResult, ValidationError};
use url::Url;

/// Maximum accepted URL length (RFC 7230 practical limit).
const MAX_URL_LENGTH: usize = 2083;

const ALLOWED_SCHEMES: [&str; 2] = ["https", "http"];

/// Represents a validated API base address
///
/// The base is everything before the API version segment, for example
/// `https://api.cloudflare.com/client`. Request paths are joined onto it
/// by [`ApiBaseUrl::join`].
///
/// # Examples
///
/// ```
/// use cloudflare_client::ApiBaseUrl;
///
/// let base = ApiBaseUrl::new("https://api.cloudflare.com/client").unwrap();
/// let url = base.join("v4", "zones/023e105f4ecef8ad9ca31a8372d0c353/dns_records").unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://api.cloudflare.com/client/v4/zones/023e105f4ecef8ad9ca31a8372d0c353/dns_records"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBaseUrl(Url);

impl ApiBaseUrl {
    /// Parses and validates a base URL.
    ///
    /// # Errors
    /// Returns `CloudflareError::Validation` if the URL is empty, too long,
    /// unparseable, has no host or uses a scheme other than http(s).
    pub fn new(url: impl AsRef<str>) -> CloudflareResult<Self> {
        let url = url.as_ref();
        validate_base_url(url)?;
        let parsed =
            Url::parse(url).map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;
        Ok(Self(parsed))
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Joins an optional version segment and a relative path onto the base.
    ///
    /// Empty `version` means the path is appended directly to the base.
    ///
    /// # Errors
    /// Returns `CloudflareError::Validation` if the joined string is not a valid URL.
    pub fn join(&self, version: &str, path: &str) -> CloudflareResult<Url> {
        let base = self.0.as_str().trim_end_matches('/');
        let version = version.trim_matches('/');
        let path = path.trim_start_matches('/');
        let joined = if version.is_empty() {
            format!("{}/{}", base, path)
        } else {
            format!("{}/{}/{}", base, version, path)
        };
        Url::parse(&joined).map_err(|e| {
            ValidationError::Format(format!("Invalid request URL '{}': {}", joined, e)).into()
        })
    }
}

/// Validates an API base URL string.
pub(crate) fn validate_base_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::Field {
            field: "base_url".to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }

    if url.len() > MAX_URL_LENGTH {
        return Err(ValidationError::Format(format!(
            "URL exceeds maximum length of {} characters",
            MAX_URL_LENGTH
        )));
    }

    let parsed =
        Url::parse(url).map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(ValidationError::ConstraintViolation(format!(
            "Invalid scheme. Must be one of: {}",
            ALLOWED_SCHEMES.join(", ")
        )));
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::Field {
            field: "base_url".to_string(),
            message: "URL must contain a host".to_string(),
        });
    }

    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ValidationError::ConstraintViolation(
            "Base URL cannot carry a query string or fragment".to_string(),
        ));
    }

    Ok(())
}
