use serde::{Deserialize, Serialize};

use crate::shared::record::Record;

/// Статус источника, при котором параметры подключения нельзя менять
/// (конфигурация уже передана агенту сбора)
pub const SOURCE_STATUS_LOCKED: i64 = 101;

/// Порт PostgreSQL по умолчанию
pub const DEFAULT_PORT: u16 = 5432;

// ============================================================================
// Enums
// ============================================================================

/// Плагин логического декодирования WAL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecodingPlugin {
    #[serde(rename = "decoderbufs")]
    Decoderbufs,
    #[serde(rename = "wal2json")]
    Wal2json,
    #[serde(rename = "wal2json_rds")]
    Wal2jsonRds,
    #[serde(rename = "wal2json_streaming")]
    Wal2jsonStreaming,
    #[serde(rename = "wal2json_rds_streaming")]
    Wal2jsonRdsStreaming,
    #[serde(rename = "pgoutput")]
    Pgoutput,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Источник данных PostgreSQL в формате backend (wire)
///
/// `table_name_list` передаётся массивом; в форме он редактируется строкой
/// через запятую (см. кодек в `metadata.rs`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostgreSQLSourceDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,

    // Специфичные поля источника
    pub hostname: String,
    pub port: u16,
    pub database: String,
    pub schema: String,
    pub username: String,
    pub password: String,
    pub table_name_list: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<String>,
    /// Backend may send `null` for sources created before the field existed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoding_plugin_name: Option<DecodingPlugin>,

    /// Общие поля источника (группа, поток, имя источника и т.п.)
    #[serde(flatten)]
    pub extra: Record,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dto_from_backend_json() {
        let dto: PostgreSQLSourceDto = serde_json::from_value(json!({
            "id": 3,
            "status": 101,
            "inlongGroupId": "g1",
            "hostname": "pg.local",
            "port": 5432,
            "database": "shop",
            "schema": "public",
            "username": "reader",
            "password": "secret",
            "tableNameList": ["orders", "items"],
            "decodingPluginName": "wal2json_rds"
        }))
        .unwrap();

        assert_eq!(dto.status, Some(SOURCE_STATUS_LOCKED));
        assert_eq!(dto.table_name_list, ["orders", "items"]);
        assert_eq!(dto.decoding_plugin_name, Some(DecodingPlugin::Wal2jsonRds));
        assert_eq!(dto.primary_key, None);
        assert_eq!(dto.extra["inlongGroupId"], json!("g1"));
    }

    #[test]
    fn test_null_plugin_accepted() {
        let dto: PostgreSQLSourceDto = serde_json::from_value(json!({
            "hostname": "pg.local",
            "port": 5432,
            "database": "shop",
            "schema": "public",
            "username": "reader",
            "password": "secret",
            "tableNameList": [],
            "decodingPluginName": null
        }))
        .unwrap();
        assert_eq!(dto.decoding_plugin_name, None);
        assert!(serde_json::to_value(&dto)
            .unwrap()
            .get("decodingPluginName")
            .is_none());
    }
}
