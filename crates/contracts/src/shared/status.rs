//! Static status tables and status tags
//!
//! A status table is declared once as a `'static` slice of
//! [`StatusDescriptor`]s and indexed by value. Lookups are O(1); unknown
//! values render as a neutral tag titled with the raw value.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shared::error::ConfigurationError;

/// Status key: either a code string or a number
///
/// Keys are typed: `Number(1)` and `Text("1")` are different statuses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatusValue {
    Number(i64),
    Text(Cow<'static, str>),
}

impl StatusValue {
    pub const fn text(value: &'static str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl fmt::Display for StatusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for StatusValue {
    fn from(value: &str) -> Self {
        Self::Text(Cow::Owned(value.to_string()))
    }
}

impl From<String> for StatusValue {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl From<i64> for StatusValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// Visual style of a status tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusType {
    #[default]
    Default,
    Primary,
    Success,
    Warning,
    Error,
}

impl StatusType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// One registered status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDescriptor {
    pub value: StatusValue,
    pub label: &'static str,
    pub kind: StatusType,
    pub icon: Option<&'static str>,
}

/// Render-ready status tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusTag {
    pub kind: StatusType,
    pub title: String,
    pub icon: Option<&'static str>,
}

impl From<&StatusDescriptor> for StatusTag {
    fn from(d: &StatusDescriptor) -> Self {
        Self {
            kind: d.kind,
            title: d.label.to_string(),
            icon: d.icon,
        }
    }
}

/// Indexed, immutable status table
#[derive(Debug, Clone)]
pub struct StatusTable {
    name: &'static str,
    entries: &'static [StatusDescriptor],
    index: HashMap<StatusValue, usize>,
}

impl StatusTable {
    pub fn new(
        name: &'static str,
        entries: &'static [StatusDescriptor],
    ) -> Result<Self, ConfigurationError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            if index.insert(entry.value.clone(), pos).is_some() {
                return Err(ConfigurationError::DuplicateStatus {
                    table: name,
                    value: entry.value.to_string(),
                });
            }
        }
        Ok(Self {
            name,
            entries,
            index,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Entries in declaration order (e.g. for filter dropdowns)
    pub fn entries(&self) -> &'static [StatusDescriptor] {
        self.entries
    }

    pub fn lookup(&self, value: &StatusValue) -> Option<&'static StatusDescriptor> {
        let entries = self.entries;
        self.index.get(value).map(|&pos| &entries[pos])
    }

    /// Tag for a value; unknown values get a default tag titled with the value
    pub fn gen_status_tag(&self, value: impl Into<StatusValue>) -> StatusTag {
        let value = value.into();
        match self.lookup(&value) {
            Some(descriptor) => descriptor.into(),
            None => StatusTag {
                kind: StatusType::Default,
                title: value.to_string(),
                icon: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static ENTRIES: [StatusDescriptor; 2] = [
        StatusDescriptor {
            value: StatusValue::text("ON"),
            label: "On",
            kind: StatusType::Success,
            icon: None,
        },
        StatusDescriptor {
            value: StatusValue::Number(0),
            label: "Off",
            kind: StatusType::Error,
            icon: Some("stop"),
        },
    ];

    static DUPLICATED: [StatusDescriptor; 2] = [
        StatusDescriptor {
            value: StatusValue::text("ON"),
            label: "On",
            kind: StatusType::Success,
            icon: None,
        },
        StatusDescriptor {
            value: StatusValue::text("ON"),
            label: "Again",
            kind: StatusType::Default,
            icon: None,
        },
    ];

    #[test]
    fn test_lookup_text_and_number() {
        let table = StatusTable::new("test", &ENTRIES).unwrap();
        assert_eq!(table.lookup(&"ON".into()).unwrap().label, "On");
        assert_eq!(table.lookup(&0_i64.into()).unwrap().label, "Off");
        assert!(table.lookup(&"0".into()).is_none());
    }

    #[test]
    fn test_fallback_tag() {
        let table = StatusTable::new("test", &ENTRIES).unwrap();
        let tag = table.gen_status_tag(42_i64);
        assert_eq!(tag.title, "42");
        assert_eq!(tag.kind, StatusType::Default);
        assert_eq!(tag.icon, None);

        let tag = table.gen_status_tag(0_i64);
        assert_eq!(tag.kind, StatusType::Error);
        assert_eq!(tag.icon, Some("stop"));
    }

    #[test]
    fn test_duplicate_value_rejected() {
        assert!(matches!(
            StatusTable::new("dup", &DUPLICATED),
            Err(ConfigurationError::DuplicateStatus { .. })
        ));
    }

    #[test]
    fn test_status_value_from_json() {
        let v: StatusValue = serde_json::from_str("\"COMPLETED\"").unwrap();
        assert_eq!(v, StatusValue::text("COMPLETED"));
        let v: StatusValue = serde_json::from_str("3").unwrap();
        assert_eq!(v, StatusValue::Number(3));
    }
}
