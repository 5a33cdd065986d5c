//! Field table and codec of the PostgreSQL source

use super::aggregate::{PostgreSQLSourceDto, DEFAULT_PORT, SOURCE_STATUS_LOCKED};
use crate::domain::common::{Endpoints, EntityClass};
use crate::shared::codec::{FieldCodec, FieldTransform};
use crate::shared::metadata::{
    EntityMetadataInfo, FieldDescriptor, RenderOptions, RenderType, SelectOption, StaticValue,
    ValidationRules,
};
use crate::shared::record::{field_as_i64, Record};

/// Источник данных PostgreSQL (класс сущности)
pub struct PostgreSQLSource;

const ENTITY: EntityMetadataInfo = EntityMetadataInfo {
    entity_index: "a001",
    entity_name: "PostgreSQLSource",
    element_key: "meta.Sources.PostgreSQL.Element",
    list_key: "meta.Sources.PostgreSQL.List",
};

/// Все поля блокируются, пока источник в статусе `SOURCE_STATUS_LOCKED`
fn locked_props(record: &Record) -> RenderOptions {
    RenderOptions {
        disabled: field_as_i64(record, "status") == Some(SOURCE_STATUS_LOCKED),
        ..RenderOptions::default()
    }
}

const DECODING_PLUGINS: &[SelectOption] = &[
    SelectOption::text("decoderbufs", "decoderbufs"),
    SelectOption::text("wal2json", "wal2json"),
    SelectOption::text("wal2json_rds", "wal2json_rds"),
    SelectOption::text("wal2json_streaming", "wal2json_streaming"),
    SelectOption::text("wal2json_rds_streaming", "wal2json_rds_streaming"),
    SelectOption::text("pgoutput", "pgoutput"),
];

static FIELDS: [FieldDescriptor; 9] = [
    FieldDescriptor::new("hostname", RenderType::Input, "meta.Sources.PostgreSQL.Hostname")
        .required()
        .dynamic(locked_props)
        .column()
        .synced(),
    FieldDescriptor::new("port", RenderType::InputNumber, "meta.Sources.PostgreSQL.Port")
        .rules(ValidationRules::required().with_range(Some(1.0), Some(65535.0)))
        .initial(StaticValue::Integer(DEFAULT_PORT as i64))
        .dynamic(locked_props)
        .column()
        .synced(),
    FieldDescriptor::new("database", RenderType::Input, "meta.Sources.PostgreSQL.Database")
        .required()
        .dynamic(locked_props)
        .synced(),
    FieldDescriptor::new("schema", RenderType::Input, "meta.Sources.PostgreSQL.SchemaName")
        .required()
        .dynamic(locked_props)
        .synced(),
    FieldDescriptor::new("username", RenderType::Input, "meta.Sources.PostgreSQL.Username")
        .required()
        .dynamic(locked_props)
        .synced()
        .column(),
    FieldDescriptor::new("password", RenderType::Password, "meta.Sources.PostgreSQL.Password")
        .required()
        .dynamic(locked_props)
        .synced(),
    FieldDescriptor::new("tableNameList", RenderType::Input, "meta.Sources.PostgreSQL.TableName")
        .required()
        .tooltip("meta.Sources.PostgreSQL.TableNameHelp")
        .dynamic(locked_props)
        .synced(),
    FieldDescriptor::new("primaryKey", RenderType::Input, "meta.Sources.PostgreSQL.PrimaryKey")
        .dynamic(locked_props)
        .synced(),
    FieldDescriptor::new(
        "decodingPluginName",
        RenderType::Select,
        "meta.Sources.PostgreSQL.decodingPluginName",
    )
    .options(DECODING_PLUGINS)
    .initial(StaticValue::Text("decoderbufs"))
    .dynamic(locked_props)
    .synced(),
];

const TRANSFORMS: &[FieldTransform] = &[FieldTransform::comma_list("tableNameList")];

impl EntityClass for PostgreSQLSource {
    type Wire = PostgreSQLSourceDto;

    fn entity_metadata_info() -> &'static EntityMetadataInfo {
        &ENTITY
    }

    fn field_descriptors() -> &'static [FieldDescriptor] {
        &FIELDS
    }

    fn endpoints() -> Endpoints {
        Endpoints {
            get: "/source/get/{id}",
            create: "/source/save",
            update: "/source/update",
        }
    }

    fn codec() -> FieldCodec {
        FieldCodec::new(TRANSFORMS)
    }
}
