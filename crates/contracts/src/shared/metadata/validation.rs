//! Validation rules for metadata fields

use serde_json::Value;

use crate::shared::error::ValidationError;
use crate::shared::record::{is_blank, value_kind};

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            custom_error: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn with_range(self, min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max, ..self }
    }

    pub const fn with_length(self, min_length: Option<usize>, max_length: Option<usize>) -> Self {
        Self {
            min_length,
            max_length,
            ..self
        }
    }

    /// Validate a record value against the rules
    ///
    /// Blank optional values pass without further checks.
    pub fn validate(&self, value: Option<&Value>, field_label: &str) -> Result<(), ValidationError> {
        if is_blank(value) {
            if self.required {
                return Err(self.error_or(format!("{} is required", field_label)));
            }
            return Ok(());
        }

        match value {
            Some(Value::String(s)) => self.validate_string(s, field_label),
            Some(Value::Number(n)) => match n.as_f64() {
                Some(v) => self.validate_number(v, field_label),
                None => Err(self.error_or(format!("{} is not a valid number", field_label))),
            },
            Some(Value::Array(items)) => self.validate_length(items.len(), field_label),
            Some(Value::Bool(_)) => Ok(()),
            Some(other) => Err(self.error_or(format!(
                "{} has unsupported value of type {}",
                field_label,
                value_kind(other)
            ))),
            None => Ok(()),
        }
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), ValidationError> {
        if self.required && value.trim().is_empty() {
            return Err(self.error_or(format!("{} is required", field_label)));
        }

        self.validate_length(value.chars().count(), field_label)?;

        // Numeric rules on a string value mean the control sent text for a number
        if self.min.is_some() || self.max.is_some() {
            let parsed: f64 = value
                .trim()
                .parse()
                .map_err(|_| self.error_or(format!("{} must be a number", field_label)))?;
            self.validate_number(parsed, field_label)?;
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), ValidationError> {
        if let Some(min) = self.min {
            if value < min {
                return Err(self.error_or(format!("{} must be at least {}", field_label, min)));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(self.error_or(format!("{} must be at most {}", field_label, max)));
            }
        }

        Ok(())
    }

    fn validate_length(&self, len: usize, field_label: &str) -> Result<(), ValidationError> {
        if let Some(min) = self.min_length {
            if len < min {
                return Err(self.error_or(format!(
                    "{} must contain at least {} characters",
                    field_label, min
                )));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(self.error_or(format!(
                    "{} must not exceed {} characters",
                    field_label, max
                )));
            }
        }

        Ok(())
    }

    fn error_or(&self, fallback: String) -> ValidationError {
        ValidationError::new(self.custom_error.map(str::to_string).unwrap_or(fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_rejects_blank() {
        let rules = ValidationRules::required();
        assert!(rules.validate(None, "Hostname").is_err());
        assert!(rules.validate(Some(&json!("")), "Hostname").is_err());
        assert!(rules.validate(Some(&json!(null)), "Hostname").is_err());
        assert!(rules.validate(Some(&json!("db.local")), "Hostname").is_ok());
    }

    #[test]
    fn test_optional_blank_passes() {
        let rules = ValidationRules::none().with_length(Some(3), None);
        assert!(rules.validate(None, "Primary key").is_ok());
        assert!(rules.validate(Some(&json!("")), "Primary key").is_ok());
        assert!(rules.validate(Some(&json!("id")), "Primary key").is_err());
    }

    #[test]
    fn test_number_range() {
        let rules = ValidationRules::required().with_range(Some(1.0), Some(65535.0));
        assert!(rules.validate(Some(&json!(5432)), "Port").is_ok());
        assert!(rules.validate(Some(&json!(0)), "Port").is_err());
        assert!(rules.validate(Some(&json!(70000)), "Port").is_err());
        assert!(rules.validate(Some(&json!("8080")), "Port").is_ok());
        assert!(rules.validate(Some(&json!("abc")), "Port").is_err());
    }

    #[test]
    fn test_custom_error_message() {
        let rules = ValidationRules {
            custom_error: Some("port out of range"),
            ..ValidationRules::required().with_range(Some(1.0), None)
        };
        let err = rules.validate(Some(&json!(0)), "Port").unwrap_err();
        assert_eq!(err.message, "port out of range");
    }
}
