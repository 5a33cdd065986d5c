pub mod a001_postgresql_source;
pub mod common;
