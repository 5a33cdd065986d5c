pub mod aggregate;
pub mod metadata;

pub use aggregate::{DecodingPlugin, PostgreSQLSourceDto, DEFAULT_PORT, SOURCE_STATUS_LOCKED};
pub use metadata::PostgreSQLSource;
