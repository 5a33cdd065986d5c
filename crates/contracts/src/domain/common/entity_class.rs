use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::codec::{decode_wire, EntityCodec, FieldCodec};
use crate::shared::error::{CodecError, ConfigurationError};
use crate::shared::metadata::{EntityMetadataInfo, FieldDescriptor, FieldRegistry};
use crate::shared::record::Record;

/// REST-пути сущности на стороне backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    /// Путь чтения, `{id}` заменяется идентификатором
    pub get: &'static str,
    /// Путь создания
    pub create: &'static str,
    /// Путь обновления
    pub update: &'static str,
}

impl Endpoints {
    pub fn get_path(&self, id: i64) -> String {
        self.get.replace("{id}", &id.to_string())
    }

    /// Путь сохранения: обновление при наличии id, иначе создание
    pub fn save_path(&self, id: Option<i64>) -> &'static str {
        match id {
            Some(_) => self.update,
            None => self.create,
        }
    }
}

/// Трейт для класса сущности
///
/// Описывает статическую таблицу полей, кодек записи и REST-пути.
/// Таблица полей строится один раз в момент объявления (const) и не меняется.
pub trait EntityClass {
    /// Типизированная форма записи в том виде, в каком её принимает backend
    type Wire: Serialize + DeserializeOwned;

    // ============================================================================
    // Метаданные класса (статические данные)
    // ============================================================================

    /// Метаданные сущности (индекс, имя, ключи локализации)
    fn entity_metadata_info() -> &'static EntityMetadataInfo;

    /// Поля в порядке объявления (порядок = порядок в форме)
    fn field_descriptors() -> &'static [FieldDescriptor];

    /// REST-пути сущности
    fn endpoints() -> Endpoints;

    /// Кодек записи; по умолчанию без преобразований
    fn codec() -> FieldCodec {
        FieldCodec::identity()
    }

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Проверенный реестр полей; дубликаты имён дают ошибку конфигурации
    fn registry() -> Result<FieldRegistry, ConfigurationError> {
        FieldRegistry::build(
            Self::entity_metadata_info().entity_name,
            Self::field_descriptors(),
        )
    }

    /// Запись backend -> запись формы
    fn parse(wire: &Record) -> Result<Record, CodecError> {
        Self::codec().parse(wire)
    }

    /// Запись формы -> запись backend
    fn stringify(ui: &Record) -> Result<Record, CodecError> {
        Self::codec().stringify(ui)
    }

    /// Проверить, что запись соответствует типизированной форме backend
    fn decode_wire(record: &Record) -> Result<Self::Wire, CodecError> {
        decode_wire(Self::entity_metadata_info().entity_name, record)
    }
}
