pub mod api_response;
pub mod authentication;
pub mod connection_info;
pub mod display_options;
pub mod dns_record;
pub mod dns_record_filter;
