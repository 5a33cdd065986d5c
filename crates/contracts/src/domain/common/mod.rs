//! Common types and traits for all entity classes

pub mod entity_class;

// Re-exports
pub use entity_class::{EntityClass, Endpoints};
