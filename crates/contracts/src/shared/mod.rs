pub mod api_error;
pub mod config;
pub mod csrf;
pub mod csv;
pub mod number_format;
pub mod serde_ids;
