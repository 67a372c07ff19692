pub mod context;
pub mod request;
