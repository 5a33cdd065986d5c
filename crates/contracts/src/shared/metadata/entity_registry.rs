//! Registry of all entity classes
//!
//! Built once, on first access. Every class's descriptor table is validated
//! during the build; a broken table aborts registration of the whole
//! registry with a [`ConfigurationError`].

use std::collections::HashMap;
use std::sync::OnceLock;

use super::registry::FieldRegistry;
use super::types::EntityMetadataInfo;
use crate::domain::a001_postgresql_source::PostgreSQLSource;
use crate::domain::common::EntityClass;
use crate::shared::codec::FieldCodec;
use crate::shared::error::ConfigurationError;
use crate::system::users::UserAccount;

/// Information about a registered entity class
#[derive(Debug, Clone)]
pub struct RegisteredEntity {
    pub entity: &'static EntityMetadataInfo,
    pub fields: FieldRegistry,
    pub codec: FieldCodec,
}

/// Entity classes keyed by entity index
#[derive(Debug, Default)]
pub struct EntityRegistry {
    entities: HashMap<&'static str, RegisteredEntity>,
}

impl EntityRegistry {
    /// Create a registry with all entity classes of the console
    pub fn new() -> Result<Self, ConfigurationError> {
        let mut registry = Self::default();
        registry.register::<PostgreSQLSource>()?;
        registry.register::<UserAccount>()?;
        Ok(registry)
    }

    /// Validate and register one entity class
    pub fn register<E: EntityClass>(&mut self) -> Result<(), ConfigurationError> {
        let entity = E::entity_metadata_info();
        if self.entities.contains_key(entity.entity_index) {
            return Err(ConfigurationError::DuplicateEntity(entity.entity_index));
        }

        let fields = E::registry()?;
        for transform in E::codec().transforms() {
            if !fields.contains(transform.field()) {
                return Err(ConfigurationError::MalformedDescriptor {
                    entity: entity.entity_name,
                    field: transform.field(),
                    reason: "codec transform for an undeclared field",
                });
            }
        }

        self.entities.insert(
            entity.entity_index,
            RegisteredEntity {
                entity,
                fields,
                codec: E::codec(),
            },
        );
        Ok(())
    }

    pub fn get(&self, entity_index: &str) -> Option<&RegisteredEntity> {
        self.entities.get(entity_index)
    }

    /// Entity indexes, sorted
    pub fn list_all(&self) -> Vec<&'static str> {
        let mut result: Vec<_> = self.entities.keys().copied().collect();
        result.sort_unstable();
        result
    }
}

/// Global entity registry instance
static REGISTRY: OnceLock<Result<EntityRegistry, ConfigurationError>> = OnceLock::new();

/// Get global entity registry
pub fn get_registry() -> Result<&'static EntityRegistry, ConfigurationError> {
    REGISTRY
        .get_or_init(EntityRegistry::new)
        .as_ref()
        .map_err(Clone::clone)
}
