//! Core metadata types for entity classes
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.
//! Descriptors are declared as `const` tables and never mutated.

use super::field_type::{FormMode, RenderType, StaticValue};
use super::validation::ValidationRules;
use crate::shared::record::Record;

// ============================================================================
// Entity-level metadata
// ============================================================================

/// Metadata for an entity class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityMetadataInfo {
    /// Index of the entity in the system (e.g. "a001")
    pub entity_index: &'static str,
    /// Type name (e.g. "PostgreSQLSource")
    pub entity_name: &'static str,
    /// Localization key of the singular display name
    pub element_key: &'static str,
    /// Localization key of the list display name
    pub list_key: &'static str,
}

// ============================================================================
// Field-level metadata
// ============================================================================

/// One entry of an enumerated control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub label: &'static str,
    pub value: StaticValue,
}

impl SelectOption {
    pub const fn text(label: &'static str, value: &'static str) -> Self {
        Self {
            label,
            value: StaticValue::Text(value),
        }
    }

    pub const fn integer(label: &'static str, value: i64) -> Self {
        Self {
            label,
            value: StaticValue::Integer(value),
        }
    }
}

/// Render-time overrides computed from the current record
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderOptions {
    pub disabled: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Pure function from the current record to render overrides
pub type DynamicProps = fn(&Record) -> RenderOptions;

/// Metadata for a single field
/// Copy trait enabled for efficient passing by value
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// Unique key within the entity class (also the record key)
    pub name: &'static str,
    pub render_type: RenderType,
    pub rules: ValidationRules,
    pub initial_value: Option<StaticValue>,
    /// Authoritative enumeration for select/radio fields
    pub options: &'static [SelectOption],
    pub dynamic_props: Option<DynamicProps>,
    /// Shown as a column in list views
    pub is_column: bool,
    /// Sent to the backend on submit
    pub syncs_to_backend: bool,
    /// Rendered only when creating a record
    pub create_only: bool,
    pub localization_key: &'static str,
    pub tooltip_key: Option<&'static str>,
    /// Unit text rendered after the control (e.g. "天")
    pub suffix: Option<&'static str>,
}

impl FieldDescriptor {
    /// Plain optional field, not a column, not synced
    pub const fn new(
        name: &'static str,
        render_type: RenderType,
        localization_key: &'static str,
    ) -> Self {
        Self {
            name,
            render_type,
            rules: ValidationRules::none(),
            initial_value: None,
            options: &[],
            dynamic_props: None,
            is_column: false,
            syncs_to_backend: false,
            create_only: false,
            localization_key,
            tooltip_key: None,
            suffix: None,
        }
    }

    pub const fn required(self) -> Self {
        let mut rules = self.rules;
        rules.required = true;
        Self { rules, ..self }
    }

    pub const fn rules(self, rules: ValidationRules) -> Self {
        Self { rules, ..self }
    }

    pub const fn initial(self, value: StaticValue) -> Self {
        Self {
            initial_value: Some(value),
            ..self
        }
    }

    pub const fn options(self, options: &'static [SelectOption]) -> Self {
        Self { options, ..self }
    }

    pub const fn dynamic(self, props: DynamicProps) -> Self {
        Self {
            dynamic_props: Some(props),
            ..self
        }
    }

    pub const fn column(self) -> Self {
        Self {
            is_column: true,
            ..self
        }
    }

    pub const fn synced(self) -> Self {
        Self {
            syncs_to_backend: true,
            ..self
        }
    }

    pub const fn create_only(self) -> Self {
        Self {
            create_only: true,
            ..self
        }
    }

    pub const fn tooltip(self, key: &'static str) -> Self {
        Self {
            tooltip_key: Some(key),
            ..self
        }
    }

    pub const fn suffix(self, suffix: &'static str) -> Self {
        Self {
            suffix: Some(suffix),
            ..self
        }
    }

    /// Check if field should be visible in the form for the given mode
    pub fn visible_in_form(&self, mode: FormMode) -> bool {
        !(self.create_only && mode == FormMode::Edit)
    }

    /// Evaluate dynamic props against the current record
    ///
    /// Re-evaluated on every call; static `min`/`max` rules act as defaults.
    pub fn render_options(&self, record: &Record) -> RenderOptions {
        let mut options = match self.dynamic_props {
            Some(props) => props(record),
            None => RenderOptions::default(),
        };
        options.min = options.min.or(self.rules.min);
        options.max = options.max.or(self.rules.max);
        options
    }

    /// Option whose value matches `value` (numeric strings match integers)
    pub fn option_for(&self, value: &serde_json::Value) -> Option<&'static SelectOption> {
        self.options.iter().find(|o| o.value.matches(value))
    }

    /// Label of the option whose value matches `value`
    pub fn option_label(&self, value: &serde_json::Value) -> Option<&'static str> {
        self.option_for(value).map(|o| o.label)
    }
}
