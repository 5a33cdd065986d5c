//! Entity codec: wire record <-> UI record
//!
//! The backend exchanges some fields in a shape that is awkward to edit in a
//! single control (a list of table names, for example). An entity class
//! declares those fields as [`FieldTransform`]s; [`FieldCodec`] applies them
//! on the load (`parse`) and submit (`stringify`) boundaries.
//!
//! Both directions work on a shallow copy of the input and never mutate it.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::shared::error::CodecError;
use crate::shared::record::{value_kind, Record};

/// Transforms records at the load/submit boundary
pub trait EntityCodec {
    /// Wire record (backend shape) -> UI record (form shape)
    fn parse(&self, wire: &Record) -> Result<Record, CodecError>;

    /// UI record -> wire record; fields already in wire shape are left as is
    fn stringify(&self, ui: &Record) -> Result<Record, CodecError>;
}

// ============================================================================
// Explicit field shapes
// ============================================================================

/// Shape of a list-like field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListShape {
    /// Wire shape: JSON array of strings
    Wire(Vec<String>),
    /// UI shape: delimited string for a single-line control
    Ui(String),
}

impl ListShape {
    /// Classify a record field; absent, null or foreign shapes are errors
    pub fn classify(record: &Record, field: &'static str) -> Result<Self, CodecError> {
        match record.get(field) {
            None | Some(Value::Null) => Err(CodecError::MissingField { field }),
            Some(Value::String(s)) => Ok(Self::Ui(s.clone())),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(CodecError::MalformedField {
                        field,
                        expected: "array of strings",
                        found: format!("array containing {}", value_kind(other)),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Wire),
            Some(other) => Err(CodecError::MalformedField {
                field,
                expected: "array of strings or delimited string",
                found: value_kind(other).to_string(),
            }),
        }
    }

    /// Convert to wire shape, splitting on `delimiter`
    ///
    /// Segments are trimmed and empty segments dropped, so `""` becomes `[]`.
    pub fn into_wire(self, delimiter: char) -> Vec<String> {
        match self {
            Self::Wire(items) => items,
            Self::Ui(text) => text
                .split(delimiter)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

// ============================================================================
// Declarative codec
// ============================================================================

/// One field transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTransform {
    /// Wire list of strings <-> UI delimited string
    DelimitedList {
        field: &'static str,
        delimiter: char,
    },
}

impl FieldTransform {
    pub const fn comma_list(field: &'static str) -> Self {
        Self::DelimitedList {
            field,
            delimiter: ',',
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            Self::DelimitedList { field, .. } => *field,
        }
    }

    fn parse_into(&self, wire: &Record, out: &mut Record) -> Result<(), CodecError> {
        match *self {
            Self::DelimitedList { field, delimiter } => match ListShape::classify(wire, field)? {
                ListShape::Wire(items) => {
                    let separator = delimiter.to_string();
                    let joined = items.join(separator.as_str());
                    out.insert(field.to_string(), Value::String(joined));
                    Ok(())
                }
                ListShape::Ui(_) => Err(CodecError::MalformedField {
                    field,
                    expected: "array of strings",
                    found: "string".to_string(),
                }),
            },
        }
    }

    fn stringify_into(&self, ui: &Record, out: &mut Record) -> Result<(), CodecError> {
        match *self {
            Self::DelimitedList { field, delimiter } => {
                let items = ListShape::classify(ui, field)?.into_wire(delimiter);
                out.insert(
                    field.to_string(),
                    Value::Array(items.into_iter().map(Value::String).collect()),
                );
                Ok(())
            }
        }
    }
}

/// Codec built from a static table of field transforms
///
/// Fields without a transform are copied through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCodec {
    transforms: &'static [FieldTransform],
}

impl FieldCodec {
    pub const fn new(transforms: &'static [FieldTransform]) -> Self {
        Self { transforms }
    }

    /// Codec with no transforms
    pub const fn identity() -> Self {
        Self { transforms: &[] }
    }

    pub fn transforms(&self) -> &'static [FieldTransform] {
        self.transforms
    }
}

impl EntityCodec for FieldCodec {
    fn parse(&self, wire: &Record) -> Result<Record, CodecError> {
        let mut out = wire.clone();
        for transform in self.transforms {
            transform.parse_into(wire, &mut out)?;
        }
        Ok(out)
    }

    fn stringify(&self, ui: &Record) -> Result<Record, CodecError> {
        let mut out = ui.clone();
        for transform in self.transforms {
            transform.stringify_into(ui, &mut out)?;
        }
        Ok(out)
    }
}

/// Check that a wire record deserializes into the entity's typed wire DTO
pub fn decode_wire<T: DeserializeOwned>(
    entity: &'static str,
    record: &Record,
) -> Result<T, CodecError> {
    serde_json::from_value(Value::Object(record.clone())).map_err(|e| CodecError::WireShape {
        entity,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record::record_from;
    use serde_json::json;

    const TABLES: &[FieldTransform] = &[FieldTransform::comma_list("tableNameList")];
    const CODEC: FieldCodec = FieldCodec::new(TABLES);

    #[test]
    fn test_parse_joins_list() {
        let wire = record_from([("tableNameList", json!(["a", "b"]))]);
        let ui = CODEC.parse(&wire).unwrap();
        assert_eq!(ui["tableNameList"], json!("a,b"));
        // input untouched
        assert_eq!(wire["tableNameList"], json!(["a", "b"]));
    }

    #[test]
    fn test_stringify_splits_string() {
        let ui = record_from([("tableNameList", json!("a,b"))]);
        let wire = CODEC.stringify(&ui).unwrap();
        assert_eq!(wire["tableNameList"], json!(["a", "b"]));
        assert_eq!(ui["tableNameList"], json!("a,b"));
    }

    #[test]
    fn test_stringify_keeps_wire_shape() {
        let ui = record_from([("tableNameList", json!(["a", "b"]))]);
        assert_eq!(CODEC.stringify(&ui).unwrap(), ui);
    }

    #[test]
    fn test_stringify_is_idempotent() {
        let ui = record_from([("tableNameList", json!(" a, b ,,c")), ("port", json!(5432))]);
        let once = CODEC.stringify(&ui).unwrap();
        let twice = CODEC.stringify(&once).unwrap();
        assert_eq!(once, twice);
        assert_eq!(once["tableNameList"], json!(["a", "b", "c"]));
        assert_eq!(once["port"], json!(5432));
    }

    #[test]
    fn test_round_trip() {
        for tables in [json!([]), json!(["orders"]), json!(["public.a", "public.b", "c"])] {
            let wire = record_from([("tableNameList", tables), ("hostname", json!("h"))]);
            let back = CODEC.stringify(&CODEC.parse(&wire).unwrap()).unwrap();
            assert_eq!(back, wire);
        }
    }

    #[test]
    fn test_round_trip_normalizes_segments() {
        let wire = record_from([("tableNameList", json!(["a ", " b", ""]))]);
        let back = CODEC.stringify(&CODEC.parse(&wire).unwrap()).unwrap();
        assert_eq!(back["tableNameList"], json!(["a", "b"]));

        let ui = record_from([("tableNameList", json!(""))]);
        assert_eq!(CODEC.stringify(&ui).unwrap()["tableNameList"], json!([]));
    }

    #[test]
    fn test_missing_field_is_error() {
        let empty = Record::new();
        assert_eq!(
            CODEC.parse(&empty),
            Err(CodecError::MissingField {
                field: "tableNameList"
            })
        );
        let null = record_from([("tableNameList", json!(null))]);
        assert!(matches!(
            CODEC.stringify(&null),
            Err(CodecError::MissingField { .. })
        ));
    }

    #[test]
    fn test_malformed_field_is_error() {
        let number = record_from([("tableNameList", json!(42))]);
        assert!(matches!(
            CODEC.parse(&number),
            Err(CodecError::MalformedField { .. })
        ));

        let mixed = record_from([("tableNameList", json!(["a", 1]))]);
        assert!(matches!(
            CODEC.stringify(&mixed),
            Err(CodecError::MalformedField { .. })
        ));

        // parse expects wire shape only
        let already_ui = record_from([("tableNameList", json!("a,b"))]);
        assert!(matches!(
            CODEC.parse(&already_ui),
            Err(CodecError::MalformedField { .. })
        ));
    }

    #[test]
    fn test_identity_codec() {
        let rec = record_from([("x", json!(1))]);
        assert_eq!(FieldCodec::identity().parse(&rec).unwrap(), rec);
        assert_eq!(FieldCodec::identity().stringify(&rec).unwrap(), rec);
    }
}
