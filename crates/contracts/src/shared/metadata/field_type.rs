//! Render type enumeration and static values for the metadata system

use serde_json::Value;

/// Input control used to render a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderType {
    #[default]
    Input,
    InputNumber,
    Password,
    Select,
    Radio,
    TextArea,
    Switch,
}

impl RenderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::InputNumber => "inputnumber",
            Self::Password => "password",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::TextArea => "textarea",
            Self::Switch => "switch",
        }
    }

    /// Enumerated controls take their values from `options`
    pub fn is_enumerated(&self) -> bool {
        matches!(self, Self::Select | Self::Radio)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::InputNumber)
    }
}

/// Compile-time value used for initial values and option values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaticValue {
    Text(&'static str),
    Integer(i64),
    Bool(bool),
}

impl StaticValue {
    pub fn to_json(&self) -> Value {
        match *self {
            Self::Text(s) => Value::from(s),
            Self::Integer(n) => Value::from(n),
            Self::Bool(b) => Value::from(b),
        }
    }

    /// Loose comparison against a record value (numeric strings match integers)
    pub fn matches(&self, value: &Value) -> bool {
        match (*self, value) {
            (Self::Text(s), Value::String(v)) => s == v,
            (Self::Integer(n), Value::Number(v)) => v.as_i64() == Some(n),
            (Self::Integer(n), Value::String(v)) => v.trim().parse::<i64>().ok() == Some(n),
            (Self::Bool(b), Value::Bool(v)) => b == *v,
            _ => false,
        }
    }
}

/// Whether the form is creating a new record or editing an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    pub fn from_id<T>(id: Option<T>) -> Self {
        if id.is_some() {
            Self::Edit
        } else {
            Self::Create
        }
    }
}
