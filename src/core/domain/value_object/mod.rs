mod api_base_url;
mod api_key;
mod api_token;
mod auth_email;
pub(crate) mod serde_helpers;

pub use api_base_url::ApiBaseUrl;
pub use api_key::ApiKey;
pub use api_token::ApiToken;
pub use auth_email::AuthEmail;
