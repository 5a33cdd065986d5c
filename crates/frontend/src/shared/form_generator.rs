//! Form generator: registry + current record -> renderable form model
//!
//! The model is rebuilt from the record on every call, so dynamic props
//! (e.g. "disabled while locked") always reflect the current state.

use contracts::shared::i18n::Localizer;
use contracts::shared::metadata::{
    FieldDescriptor, FieldRegistry, FormMode, RenderOptions, RenderType,
};
use contracts::shared::record::{is_blank, Record};
use serde_json::Value;

/// One entry of a select/radio control, label already localized
#[derive(Debug, Clone, PartialEq)]
pub struct ControlOption {
    pub label: String,
    pub value: Value,
}

/// One input control of the generated form
#[derive(Debug, Clone, PartialEq)]
pub struct FormControl {
    pub name: &'static str,
    pub label: String,
    pub tooltip: Option<String>,
    pub suffix: Option<&'static str>,
    pub render_type: RenderType,
    pub required: bool,
    pub options: Vec<ControlOption>,
    pub props: RenderOptions,
    pub value: Option<Value>,
}

/// Controls in declaration order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormModel {
    pub controls: Vec<FormControl>,
}

impl FormModel {
    pub fn control(&self, name: &str) -> Option<&FormControl> {
        self.controls.iter().find(|c| c.name == name)
    }

    /// True when every control is disabled (read-only form)
    pub fn is_read_only(&self) -> bool {
        !self.controls.is_empty() && self.controls.iter().all(|c| c.props.disabled)
    }
}

/// Inline validation failure of one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

pub fn build_form(
    registry: &FieldRegistry,
    mode: FormMode,
    record: &Record,
    localizer: &dyn Localizer,
) -> FormModel {
    let controls = registry
        .form_fields(mode)
        .map(|field| FormControl {
            name: field.name,
            label: localizer.t(field.localization_key).into_owned(),
            tooltip: field.tooltip_key.map(|k| localizer.t(k).into_owned()),
            suffix: field.suffix,
            render_type: field.render_type,
            required: field.rules.required,
            options: field
                .options
                .iter()
                .map(|o| ControlOption {
                    label: localizer.t(o.label).into_owned(),
                    value: o.value.to_json(),
                })
                .collect(),
            props: field.render_options(record),
            value: record.get(field.name).cloned(),
        })
        .collect();

    FormModel { controls }
}

/// Validate every field visible in `mode`; errors are collected, not fatal
pub fn validate_fields(
    registry: &FieldRegistry,
    mode: FormMode,
    record: &Record,
    localizer: &dyn Localizer,
) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = registry
        .form_fields(mode)
        .filter_map(|field| {
            validate_field(field, record.get(field.name), localizer)
                .err()
                .map(|message| FieldError {
                    field: field.name,
                    message,
                })
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_field(
    field: &FieldDescriptor,
    value: Option<&Value>,
    localizer: &dyn Localizer,
) -> Result<(), String> {
    let label = localizer.t(field.localization_key);
    field
        .rules
        .validate(value, &label)
        .map_err(|e| e.message)?;

    // Enumerated values must come from the declared options
    if field.render_type.is_enumerated() && !is_blank(value) {
        if let Some(v) = value {
            if field.option_label(v).is_none() {
                return Err(format!("{} has an unknown value {}", label, v));
            }
        }
    }

    Ok(())
}

/// Convert raw control input to the value type the field expects
///
/// Number inputs deliver text; it is stored as a JSON number when it parses.
/// Select/radio input is replaced by the declared value of the matching option.
pub fn coerce_input(field: &FieldDescriptor, value: Value) -> Value {
    if field.render_type.is_enumerated() {
        return match field.option_for(&value) {
            Some(option) => option.value.to_json(),
            None => value,
        };
    }

    match &value {
        Value::String(s) if field.render_type.is_numeric() => {
            let s = s.trim();
            if s.is_empty() {
                Value::Null
            } else if let Ok(n) = s.parse::<i64>() {
                Value::from(n)
            } else if let Ok(f) = s.parse::<f64>() {
                Value::from(f)
            } else {
                value
            }
        }
        _ => value,
    }
}
