pub mod api;
pub mod api_utils;
pub mod config;
pub mod edit_session;
pub mod form_generator;
pub mod list_columns;
