pub mod api_client;
pub(crate) mod endpoints;
pub(crate) mod query_builder;
