//! Статусы заявок на согласование

use once_cell::sync::Lazy;

use crate::shared::error::ConfigurationError;
use crate::shared::status::{StatusDescriptor, StatusTable, StatusTag, StatusType, StatusValue};

pub static APPLY_STATUS_LIST: [StatusDescriptor; 5] = [
    StatusDescriptor {
        value: StatusValue::text("COMPLETED"),
        label: "已完成",
        kind: StatusType::Success,
        icon: None,
    },
    StatusDescriptor {
        value: StatusValue::text("PROCESSING"),
        label: "待审批",
        kind: StatusType::Warning,
        icon: None,
    },
    StatusDescriptor {
        value: StatusValue::text("REJECTED"),
        label: "已驳回",
        kind: StatusType::Error,
        icon: None,
    },
    StatusDescriptor {
        value: StatusValue::text("CANCELED"),
        label: "已取消",
        kind: StatusType::Default,
        icon: Some("close-circle-filled"),
    },
    StatusDescriptor {
        value: StatusValue::text("TERMINATED"),
        label: "已终止",
        kind: StatusType::Error,
        icon: None,
    },
];

static APPLY_STATUS: Lazy<Result<StatusTable, ConfigurationError>> =
    Lazy::new(|| StatusTable::new("apply_status", &APPLY_STATUS_LIST));

/// Таблица статусов, проиндексированная по значению
pub fn apply_status_table() -> Result<&'static StatusTable, ConfigurationError> {
    APPLY_STATUS.as_ref().map_err(Clone::clone)
}

/// Тег статуса заявки; неизвестное значение отображается как есть
pub fn gen_status_tag(value: impl Into<StatusValue>) -> StatusTag {
    let value = value.into();
    match apply_status_table() {
        Ok(table) => table.gen_status_tag(value),
        Err(e) => {
            log::error!("{}", e);
            StatusTag {
                kind: StatusType::Default,
                title: value.to_string(),
                icon: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_valid() {
        let table = apply_status_table().unwrap();
        assert_eq!(table.entries().len(), 5);
        assert_eq!(table.name(), "apply_status");
    }

    #[test]
    fn test_completed() {
        let tag = gen_status_tag("COMPLETED");
        assert_eq!(tag.title, "已完成");
        assert_eq!(tag.kind, StatusType::Success);
    }

    #[test]
    fn test_unknown_falls_back_to_raw_value() {
        let tag = gen_status_tag("UNKNOWN");
        assert_eq!(tag.title, "UNKNOWN");
        assert_eq!(tag.kind, StatusType::Default);
        assert_eq!(tag.icon, None);
    }

    #[test]
    fn test_every_registered_value_returns_its_descriptor() {
        for entry in APPLY_STATUS_LIST.iter() {
            assert_eq!(gen_status_tag(entry.value.clone()), StatusTag::from(entry));
        }
        assert_eq!(gen_status_tag("CANCELED").icon, Some("close-circle-filled"));
    }
}
