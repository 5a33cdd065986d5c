//! User details UI module
//!
//! - view_model.rs: ViewModel with commands and state management

mod view_model;

pub use view_model::UserDetailsViewModel;
