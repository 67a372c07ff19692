pub mod import_request;
