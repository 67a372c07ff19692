use crate::core::domain::value_object::{ApiKey, ApiToken, AuthEmail};

pub(crate) const AUTH_EMAIL_HEADER: &str = "X-Auth-Email";
pub(crate) const AUTH_KEY_HEADER: &str = "X-Auth-Key";
pub(crate) const AUTHORIZATION_HEADER: &str = "Authorization";

/// Credentials attached to every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authentication {
    /// Account email plus global API key.
    ApiKey { email: AuthEmail, key: ApiKey },
    /// Scoped API token.
    ApiToken(ApiToken),
}

impl Authentication {
    /// Returns the header name/value pairs for these credentials.
    #[must_use]
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        match self {
            Authentication::ApiKey { email, key } => vec![
                (AUTH_EMAIL_HEADER, email.as_str().to_string()),
                (AUTH_KEY_HEADER, key.as_str().to_string()),
            ],
            Authentication::ApiToken(token) => vec![(AUTHORIZATION_HEADER, token.as_bearer())],
        }
    }
}
