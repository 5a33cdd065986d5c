//! Column model for generic list views

use contracts::shared::i18n::Localizer;
use contracts::shared::metadata::{FieldDescriptor, FieldRegistry};
use contracts::shared::record::Record;
use serde_json::Value;

/// One list column, title already localized
#[derive(Debug, Clone)]
pub struct ListColumn {
    pub key: &'static str,
    pub title: String,
    field: &'static FieldDescriptor,
}

impl ListColumn {
    /// Display text of this column for a row
    ///
    /// Enumerated fields show the (localized) option label instead of the raw value.
    pub fn cell_text(&self, row: &Record, localizer: &dyn Localizer) -> String {
        match row.get(self.key) {
            None | Some(Value::Null) => String::new(),
            Some(value) => match self.field.option_label(value) {
                Some(label) => localizer.t(label).into_owned(),
                None => display_value(value),
            },
        }
    }
}

/// Columns of the registry in declaration order
pub fn build_columns(registry: &FieldRegistry, localizer: &dyn Localizer) -> Vec<ListColumn> {
    registry
        .columns()
        .map(|field| ListColumn {
            key: field.name,
            title: localizer.t(field.localization_key).into_owned(),
            field,
        })
        .collect()
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(display_value).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_postgresql_source::PostgreSQLSource;
    use contracts::domain::common::EntityClass;
    use contracts::shared::i18n::{Catalog, Locale};
    use contracts::shared::record::record_from;
    use contracts::system::users::UserAccount;
    use serde_json::json;

    #[test]
    fn test_pg_columns() {
        let registry = PostgreSQLSource::registry().unwrap();
        let catalog = Catalog::builtin(Locale::ZhCn);
        let columns = build_columns(&registry, catalog);
        let titles: Vec<_> = columns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["服务器主机", "端口", "用户名"]);

        let row = record_from([("hostname", json!("pg.local")), ("port", json!(5432))]);
        assert_eq!(columns[0].cell_text(&row, catalog), "pg.local");
        assert_eq!(columns[1].cell_text(&row, catalog), "5432");
        assert_eq!(columns[2].cell_text(&row, catalog), "");
    }

    #[test]
    fn test_enumerated_cell_shows_option_label() {
        let registry = UserAccount::registry().unwrap();
        let catalog = Catalog::builtin(Locale::EnUs);
        let columns = build_columns(&registry, catalog);
        assert_eq!(columns[0].key, "type");

        let admin = record_from([("type", json!(0))]);
        assert_eq!(columns[0].cell_text(&admin, catalog), "Administrator");
        let unknown = record_from([("type", json!(7))]);
        assert_eq!(columns[0].cell_text(&unknown, catalog), "7");
    }
}
