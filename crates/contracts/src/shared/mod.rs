pub mod api_error;
pub mod list_engine;
pub mod payload;
