//! PostgreSQL source details UI module
//!
//! MVVM pattern without a rendering layer:
//! - view_model.rs: ViewModel with commands and state management
//!
//! Field table and codec come from `contracts::domain::a001_postgresql_source`.

mod view_model;

pub use view_model::PostgreSQLSourceDetailsViewModel;
