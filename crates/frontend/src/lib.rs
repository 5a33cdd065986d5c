//! Console frontend glue: configuration, backend boundary, generated forms
//! and per-entity edit sessions.

pub mod domain;
pub mod shared;
pub mod system;
