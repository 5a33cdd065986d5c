//! Metadata types for describing entity classes
//!
//! Every entity class exposes a static, ordered table of [`FieldDescriptor`]s.
//! Generic form and list renderers read that table through a [`FieldRegistry`],
//! which validates it once (duplicate names and malformed descriptors are
//! configuration errors).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::common::EntityClass;
//! use contracts::domain::a001_postgresql_source::PostgreSQLSource;
//!
//! let registry = PostgreSQLSource::registry()?;
//! for field in registry.columns() {
//!     println!("{}: {}", field.name, field.localization_key);
//! }
//! ```

mod entity_registry;
mod field_type;
mod registry;
mod types;
mod validation;

pub use entity_registry::{get_registry, EntityRegistry, RegisteredEntity};
pub use field_type::{FormMode, RenderType, StaticValue};
pub use registry::FieldRegistry;
pub use types::{
    DynamicProps,
    EntityMetadataInfo,
    FieldDescriptor,
    RenderOptions,
    SelectOption,
};
pub use validation::ValidationRules;
