pub mod dns_records_context;
pub mod zones_context;
