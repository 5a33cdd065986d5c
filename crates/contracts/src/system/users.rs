//! Учётные записи пользователей консоли

use serde::{Deserialize, Serialize};

use crate::domain::common::{Endpoints, EntityClass};
use crate::shared::metadata::{
    EntityMetadataInfo, FieldDescriptor, RenderType, SelectOption, StaticValue, ValidationRules,
};

/// Тип учётной записи: обычный пользователь
pub const ACCOUNT_TYPE_USER: i64 = 1;
/// Тип учётной записи: системный администратор
pub const ACCOUNT_TYPE_ADMIN: i64 = 0;

/// Пользователь в формате backend (wire)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub account_type: i64,
    pub username: String,
    /// Пароль передаётся только при регистрации
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub valid_days: u32,
}

impl UserDto {
    pub fn is_admin(&self) -> bool {
        self.account_type == ACCOUNT_TYPE_ADMIN
    }
}

/// Пользователь (класс сущности)
pub struct UserAccount;

const ENTITY: EntityMetadataInfo = EntityMetadataInfo {
    entity_index: "sys_user",
    entity_name: "UserAccount",
    element_key: "meta.Users.Element",
    list_key: "meta.Users.List",
};

const ACCOUNT_TYPES: &[SelectOption] = &[
    SelectOption::integer("meta.Users.TypeUser", ACCOUNT_TYPE_USER),
    SelectOption::integer("meta.Users.TypeAdmin", ACCOUNT_TYPE_ADMIN),
];

static FIELDS: [FieldDescriptor; 4] = [
    FieldDescriptor::new("type", RenderType::Radio, "meta.Users.Type")
        .required()
        .options(ACCOUNT_TYPES)
        .initial(StaticValue::Integer(ACCOUNT_TYPE_USER))
        .column()
        .synced(),
    FieldDescriptor::new("username", RenderType::Input, "meta.Users.Name")
        .required()
        .column()
        .synced(),
    // При редактировании пароль не показывается и не отправляется
    FieldDescriptor::new("password", RenderType::Password, "meta.Users.Password")
        .required()
        .create_only()
        .synced(),
    FieldDescriptor::new("validDays", RenderType::InputNumber, "meta.Users.ValidDays")
        .rules(ValidationRules::required().with_range(Some(1.0), None))
        .suffix("天")
        .column()
        .synced(),
];

impl EntityClass for UserAccount {
    type Wire = UserDto;

    fn entity_metadata_info() -> &'static EntityMetadataInfo {
        &ENTITY
    }

    fn field_descriptors() -> &'static [FieldDescriptor] {
        &FIELDS
    }

    fn endpoints() -> Endpoints {
        Endpoints {
            get: "/user/get/{id}",
            create: "/user/register",
            update: "/user/update",
        }
    }
}
