//! Field registry: ordered, validated view over an entity's descriptor table

use std::collections::{HashMap, HashSet};

use super::field_type::FormMode;
use super::types::FieldDescriptor;
use crate::shared::error::ConfigurationError;
use crate::shared::record::Record;

/// Ordered field descriptors of one entity class
///
/// Declaration order is preserved: it drives form layout and column order.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    entity: &'static str,
    fields: &'static [FieldDescriptor],
    index: HashMap<&'static str, usize>,
}

impl FieldRegistry {
    /// Validate a descriptor table and index it by name
    pub fn build(
        entity: &'static str,
        fields: &'static [FieldDescriptor],
    ) -> Result<Self, ConfigurationError> {
        let mut index = HashMap::with_capacity(fields.len());

        for (pos, field) in fields.iter().enumerate() {
            check_descriptor(entity, field)?;
            if index.insert(field.name, pos).is_some() {
                return Err(ConfigurationError::DuplicateField {
                    entity,
                    field: field.name,
                });
            }
        }

        Ok(Self {
            entity,
            fields,
            index,
        })
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// All fields in declaration order
    pub fn fields(&self) -> &'static [FieldDescriptor] {
        self.fields
    }

    pub fn get(&self, name: &str) -> Option<&'static FieldDescriptor> {
        let fields = self.fields;
        self.index.get(name).map(|&pos| &fields[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Fields shown in list views
    pub fn columns(&self) -> impl Iterator<Item = &'static FieldDescriptor> {
        self.fields.iter().filter(|f| f.is_column)
    }

    /// Fields shown in the form for the given mode
    pub fn form_fields(&self, mode: FormMode) -> impl Iterator<Item = &'static FieldDescriptor> {
        self.fields.iter().filter(move |f| f.visible_in_form(mode))
    }

    /// Fresh UI record with every declared initial value set
    pub fn initial_record(&self) -> Record {
        self.fields
            .iter()
            .filter_map(|f| f.initial_value.map(|v| (f.name.to_string(), v.to_json())))
            .collect()
    }

    /// Drop registered fields that are not synced to the backend
    ///
    /// Keys the registry does not know (ids, base info) pass through.
    pub fn sync_filter(&self, record: &Record) -> Record {
        record
            .iter()
            .filter(|(key, _)| self.get(key).map_or(true, |f| f.syncs_to_backend))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

fn check_descriptor(
    entity: &'static str,
    field: &'static FieldDescriptor,
) -> Result<(), ConfigurationError> {
    let malformed = |reason| ConfigurationError::MalformedDescriptor {
        entity,
        field: field.name,
        reason,
    };

    if field.name.trim().is_empty() {
        return Err(malformed("empty field name"));
    }
    if field.localization_key.trim().is_empty() {
        return Err(malformed("empty localization key"));
    }

    if field.render_type.is_enumerated() {
        if field.options.is_empty() {
            return Err(malformed("enumerated field without options"));
        }
        let mut seen = HashSet::new();
        if !field.options.iter().all(|o| seen.insert(o.value)) {
            return Err(malformed("duplicate option value"));
        }
        if let Some(initial) = field.initial_value {
            if !field.options.iter().any(|o| o.value == initial) {
                return Err(malformed("initial value is not one of the options"));
            }
        }
    }

    if let (Some(min), Some(max)) = (field.rules.min, field.rules.max) {
        if min > max {
            return Err(malformed("min greater than max"));
        }
    }

    Ok(())
}
