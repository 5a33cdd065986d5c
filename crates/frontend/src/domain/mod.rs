pub mod a001_postgresql_source;
