//! Internal HTTP client that attaches credentials and unwraps response envelopes.

use crate::core::domain::{
    error::{CloudflareError, CloudflareResult, ValidationError, join_messages},
    model::{api_response::ApiResponse, connection_info::ConnectionInfo},
};
use log::{debug, error, warn};
use reqwest::{
    Client, Method, Response, StatusCode,
    header::{ACCEPT, HeaderValue},
    multipart::Form,
};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Longest raw body echoed into an error message when no envelope was returned.
const MAX_ERROR_BODY_LEN: usize = 512;

/// Body of an outgoing request.
pub(crate) enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(Form),
}

/// Internal HTTP client shared by all resource contexts.
///
/// Every request gets the credential headers from the [`ConnectionInfo`].
/// One call performs exactly one HTTP exchange; nothing is retried or cached.
#[derive(Debug)]
pub struct ApiClient {
    http_client: Client,
    connection: Arc<ConnectionInfo>,
}

impl ApiClient {
    /// Creates a new `ApiClient`.
    ///
    /// # Errors
    /// Returns `CloudflareError::Transport` if the HTTP client cannot be built.
    pub fn new(connection: ConnectionInfo) -> CloudflareResult<Self> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| CloudflareError::Transport(e.to_string()))?;

        Ok(Self {
            http_client,
            connection: Arc::new(connection),
        })
    }

    /// Returns a reference to the underlying connection details.
    pub fn connection(&self) -> &ConnectionInfo {
        &self.connection
    }

    /// Performs a GET request and parses the envelope.
    ///
    /// # Errors
    /// Returns `CloudflareError` if the request fails, the status is not 2xx,
    /// or the body is not a valid envelope.
    pub async fn get<T>(&self, path: &str, query: &[(&str, String)]) -> CloudflareResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let response = self
            .execute(Method::GET, path, query, RequestBody::Empty)
            .await?;
        Self::parse_envelope(response).await
    }

    /// Performs a GET request and returns the body as text, without envelope parsing.
    ///
    /// # Errors
    /// Returns `CloudflareError` if the request fails or the status is not 2xx.
    pub async fn get_text(&self, path: &str) -> CloudflareResult<String> {
        let response = self
            .execute(Method::GET, path, &[], RequestBody::Empty)
            .await?;
        Self::read_body(response).await
    }

    /// Performs a POST request with a JSON body, or none.
    ///
    /// # Errors
    /// Returns `CloudflareError` if the body cannot be encoded, the request fails,
    /// the status is not 2xx, or the body is not a valid envelope.
    pub async fn post<B, T>(&self, path: &str, body: Option<&B>) -> CloudflareResult<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = match body {
            Some(body) => Self::json_body(body)?,
            None => RequestBody::Empty,
        };
        let response = self.execute(Method::POST, path, &[], body).await?;
        Self::parse_envelope(response).await
    }

    /// Performs a POST request with a multipart form body.
    ///
    /// # Errors
    /// Returns `CloudflareError` if the request fails, the status is not 2xx,
    /// or the body is not a valid envelope.
    pub async fn post_multipart<T>(&self, path: &str, form: Form) -> CloudflareResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let response = self
            .execute(Method::POST, path, &[], RequestBody::Multipart(form))
            .await?;
        Self::parse_envelope(response).await
    }

    /// Performs a PUT request with a JSON body.
    ///
    /// # Errors
    /// Returns `CloudflareError` if the body cannot be encoded, the request fails,
    /// the status is not 2xx, or the body is not a valid envelope.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> CloudflareResult<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .execute(Method::PUT, path, &[], Self::json_body(body)?)
            .await?;
        Self::parse_envelope(response).await
    }

    /// Performs a DELETE request.
    ///
    /// # Errors
    /// Returns `CloudflareError` if the request fails, the status is not 2xx,
    /// or the body is not a valid envelope.
    pub async fn delete<T>(&self, path: &str) -> CloudflareResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let response = self
            .execute(Method::DELETE, path, &[], RequestBody::Empty)
            .await?;
        Self::parse_envelope(response).await
    }

    /// Core request execution method. Builds the URL, attaches credentials,
    /// sends the request and turns non-2xx statuses into errors.
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: RequestBody,
    ) -> CloudflareResult<Response> {
        let mut url = self.connection.endpoint_url(path)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }

        debug!("{} {}", method, url);

        let mut req_builder = self
            .http_client
            .request(method.clone(), url.clone())
            .header(ACCEPT, "application/json");

        for (name, value) in self.connection.authentication().headers() {
            let mut value = HeaderValue::from_str(&value).map_err(|_| ValidationError::Field {
                field: name.to_string(),
                message: "Credential is not a valid header value".to_string(),
            })?;
            value.set_sensitive(true);
            req_builder = req_builder.header(name, value);
        }

        req_builder = match body {
            RequestBody::Empty => req_builder,
            RequestBody::Json(json) => req_builder.json(&json),
            RequestBody::Multipart(form) => req_builder.multipart(form),
        };

        let response = req_builder
            .send()
            .await
            .map_err(|e| CloudflareError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        debug!("{} {} -> {}", method, url.path(), status);

        if !status.is_success() {
            let body = Self::read_body(response).await?;
            warn!("{} {} failed with {}", method, url.path(), status);
            return Err(Self::http_error(status, &body));
        }

        Ok(response)
    }

    fn json_body<B>(body: &B) -> CloudflareResult<RequestBody>
    where
        B: Serialize + ?Sized,
    {
        serde_json::to_value(body)
            .map(RequestBody::Json)
            .map_err(|e| CloudflareError::Serialization(e.to_string()))
    }

    async fn read_body(response: Response) -> CloudflareResult<String> {
        response
            .text()
            .await
            .map_err(|e| CloudflareError::Transport(format!("Failed to read response body: {}", e)))
    }

    async fn parse_envelope<T>(response: Response) -> CloudflareResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let body = Self::read_body(response).await?;
        ApiResponse::parse(&body).inspect_err(|e| error!("Invalid response envelope: {}", e))
    }

    /// Builds the error for a non-2xx response, keeping the envelope when the body has one.
    fn http_error(status: StatusCode, body: &str) -> CloudflareError {
        match ApiResponse::<serde_json::Value>::parse(body) {
            Ok(envelope) => CloudflareError::Http {
                status,
                message: join_messages(&envelope.errors),
                envelope: Some(Box::new(envelope)),
            },
            Err(_) => {
                let trimmed = body.trim();
                let message = if trimmed.is_empty() {
                    status.canonical_reason().unwrap_or("empty response").to_string()
                } else {
                    trimmed.chars().take(MAX_ERROR_BODY_LEN).collect()
                };
                CloudflareError::Http {
                    status,
                    message,
                    envelope: None,
                }
            }
        }
    }
}
