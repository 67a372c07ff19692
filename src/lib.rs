//! An async client for the Cloudflare v4 management API.
//!
//! Every operation maps to one HTTP request and returns the provider's response
//! envelope ([`ApiResponse`]) with a strongly-typed `result`.

mod core;
mod zones;

pub use crate::core::domain::{
    error::{CloudflareError, CloudflareResult, ValidationError},
    model::{
        api_response::{ApiErrorDetail, ApiResponse, ResultInfo},
        authentication::Authentication,
        connection_info::{ConnectionInfo, DEFAULT_API_VERSION, DEFAULT_BASE_URL},
        display_options::{DisplayOptions, OrderType},
        dns_record::{
            AUTOMATIC_TTL, CaaData, DeletedDnsRecord, DnsContent, DnsRecord, DnsRecordImport,
            DnsRecordScan, DnsRecordType, ModifiedDnsRecord, NewDnsRecord, SrvData,
        },
        dns_record_filter::DnsRecordFilter,
    },
    value_object::{ApiBaseUrl, ApiKey, ApiToken, AuthEmail},
};
pub use crate::zones::application::{
    context::{
        dns_records_context::{DnsRecordOperations, DnsRecordsContext, LIST_ALL_PAGE_SIZE},
        zones_context::ZonesContext,
    },
    request::import_request::DnsRecordImportRequest,
};

use crate::core::infrastructure::api_client::ApiClient;

const ENV_API_TOKEN: &str = "CLOUDFLARE_API_TOKEN";
const ENV_EMAIL: &str = "CLOUDFLARE_EMAIL";
const ENV_API_KEY: &str = "CLOUDFLARE_API_KEY";
const ENV_API_URL: &str = "CLOUDFLARE_API_URL";
const ENV_API_VERSION: &str = "CLOUDFLARE_API_VERSION";

/// A client for the Cloudflare API
///
/// The client holds only immutable connection settings, so it can be shared
/// between tasks and used for concurrent calls.
///
/// # Examples
///
/// ```no_run
/// use cloudflare_client::{CloudflareClient, CloudflareResult, DnsRecordOperations};
///
/// #[tokio::main]
/// async fn main() -> CloudflareResult<()> {
///     let client = CloudflareClient::builder()
///         .api_token("my-scoped-token")?
///         .build()?;
///
///     let records = client
///         .zones()
///         .dns_records()
///         .get("023e105f4ecef8ad9ca31a8372d0c353", None, None)
///         .await?;
///     println!("success: {}", records.success);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct CloudflareClient {
    api_client: ApiClient,
}

/// Builder for CloudflareClient configuration
#[derive(Debug, Default)]
pub struct CloudflareClientBuilder {
    base_url: Option<ApiBaseUrl>,
    api_version: Option<String>,
    authentication: Option<Authentication>,
}

impl CloudflareClientBuilder {
    /// Authenticates with a scoped API token.
    ///
    /// # Errors
    /// Returns `CloudflareError::Validation` if the token is malformed.
    pub fn api_token(mut self, token: impl Into<String>) -> CloudflareResult<Self> {
        self.authentication = Some(Authentication::ApiToken(ApiToken::new(token)?));
        Ok(self)
    }

    /// Authenticates with the account email and global API key.
    ///
    /// # Errors
    /// Returns `CloudflareError::Validation` if either value is malformed.
    pub fn api_key(
        mut self,
        email: impl Into<String>,
        key: impl Into<String>,
    ) -> CloudflareResult<Self> {
        self.authentication = Some(Authentication::ApiKey {
            email: AuthEmail::new(email)?,
            key: ApiKey::new(key)?,
        });
        Ok(self)
    }

    /// Uses prepared credentials.
    pub fn authentication(mut self, authentication: Authentication) -> Self {
        self.authentication = Some(authentication);
        self
    }

    /// Overrides the API base address (defaults to [`DEFAULT_BASE_URL`]).
    ///
    /// # Errors
    /// Returns `CloudflareError::Validation` if the URL is invalid.
    pub fn base_url(mut self, url: impl AsRef<str>) -> CloudflareResult<Self> {
        self.base_url = Some(ApiBaseUrl::new(url)?);
        Ok(self)
    }

    /// Overrides the API version segment (defaults to [`DEFAULT_API_VERSION`]).
    ///
    /// An empty version appends request paths directly to the base URL.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Reads configuration from the process environment.
    ///
    /// See [`CloudflareClientBuilder::from_lookup`] for the variables used.
    ///
    /// # Errors
    /// Returns `CloudflareError::Validation` if a variable holds an invalid value.
    pub fn from_env() -> CloudflareResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`.
    ///
    /// - `CLOUDFLARE_API_TOKEN`, or `CLOUDFLARE_EMAIL` with `CLOUDFLARE_API_KEY`
    /// - `CLOUDFLARE_API_URL` (optional)
    /// - `CLOUDFLARE_API_VERSION` (optional)
    ///
    /// A token takes precedence when both credential kinds are present.
    /// Missing credentials are reported by [`CloudflareClientBuilder::build`].
    ///
    /// # Errors
    /// Returns `CloudflareError::Validation` if a variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> CloudflareResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            builder = builder.base_url(url)?;
        }
        if let Some(version) = lookup(ENV_API_VERSION) {
            builder = builder.api_version(version);
        }

        match (lookup(ENV_API_TOKEN), lookup(ENV_EMAIL), lookup(ENV_API_KEY)) {
            (Some(token), _, _) => builder.api_token(token),
            (None, Some(email), Some(key)) => builder.api_key(email, key),
            _ => Ok(builder),
        }
    }

    /// Builds the client.
    ///
    /// # Errors
    /// Returns `CloudflareError::Validation` if no credentials were configured,
    /// or `CloudflareError::Transport` if the HTTP client cannot be created.
    pub fn build(self) -> CloudflareResult<CloudflareClient> {
        let authentication = self.authentication.ok_or_else(|| ValidationError::Field {
            field: "authentication".to_string(),
            message: "An API token or an email and API key are required".to_string(),
        })?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => ApiBaseUrl::new(DEFAULT_BASE_URL)?,
        };
        let api_version = self
            .api_version
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        let connection = ConnectionInfo::new(base_url, api_version, authentication);
        CloudflareClient::new(connection)
    }
}

impl CloudflareClient {
    /// Creates a new builder for CloudflareClient configuration
    pub fn builder() -> CloudflareClientBuilder {
        CloudflareClientBuilder::default()
    }

    /// Creates a client from prepared connection settings.
    ///
    /// # Errors
    /// Returns `CloudflareError::Transport` if the HTTP client cannot be created.
    pub fn new(connection: ConnectionInfo) -> CloudflareResult<Self> {
        Ok(Self {
            api_client: ApiClient::new(connection)?,
        })
    }

    /// Returns the connection settings this client was built with.
    pub fn connection(&self) -> &ConnectionInfo {
        self.api_client.connection()
    }

    /// Zone-scoped resources.
    pub fn zones(&self) -> ZonesContext<'_> {
        ZonesContext::new(&self.api_client)
    }
}
