//! Shared contracts of the data-integration console
//!
//! Declarative metadata (field registry, status tables, localization keys)
//! and the entity codec that maps backend wire records to form records.
//! Nothing in this crate performs I/O.

pub mod domain;
pub mod shared;
pub mod system;
