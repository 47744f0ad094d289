use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use seq_reflect::{AttributeError, Format, Scalar, ScalarKind};
use serde_json::{Map, Number, Value};

use super::JsonError;

// -----------------------------------------------------------------------------
// JsonFormat

/// A [`Format`] holding one JSON document.
///
/// Object keys keep their insertion order, so a serialized struct lists its
/// attributes in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonFormat {
    value: Value,
}

impl JsonFormat {
    /// Parses a JSON text.
    pub fn parse(text: &str) -> Result<Self, JsonError> {
        Ok(Self {
            value: serde_json::from_str(text)?,
        })
    }

    /// Returns the wrapped document.
    #[inline]
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// Renders the document as compact JSON text.
    #[inline]
    pub fn to_text(&self) -> String {
        self.value.to_string()
    }

    /// Renders the document as indented JSON text.
    #[inline]
    pub fn to_text_pretty(&self) -> String {
        alloc::format!("{:#}", self.value)
    }

    fn entry(&self, name: &str) -> Option<&Value> {
        self.value.get(name).filter(|value| !value.is_null())
    }

    fn insert(&mut self, name: &str, value: Value) {
        match &mut self.value {
            Value::Object(map) => {
                map.insert(name.to_string(), value);
            }
            other => log::warn!(
                "cannot write `{name}` into a JSON {}, the value is dropped",
                json_kind(other)
            ),
        }
    }
}

impl From<Value> for JsonFormat {
    #[inline]
    fn from(value: Value) -> Self {
        Self { value }
    }
}

impl From<JsonFormat> for Value {
    #[inline]
    fn from(format: JsonFormat) -> Self {
        format.value
    }
}

impl FromStr for JsonFormat {
    type Err = JsonError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for JsonFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

// -----------------------------------------------------------------------------
// Format

impl Format for JsonFormat {
    type Document = Value;
    type Error = JsonError;

    #[inline]
    fn new_empty() -> Self {
        Self {
            value: Value::Object(Map::new()),
        }
    }

    #[inline]
    fn from_document(document: Value) -> Result<Self, JsonError> {
        Ok(Self { value: document })
    }

    fn write(&mut self, name: &str, value: Scalar) {
        let value = match value {
            Scalar::Real(v) if !v.is_finite() => {
                log::warn!("`{name}` holds the non-finite real {v}, written as null");
                Value::Null
            }
            other => scalar_to_value(other),
        };
        self.insert(name, value);
    }

    #[inline]
    fn write_document(&mut self, name: &str, document: Value) {
        self.insert(name, document);
    }

    #[inline]
    fn write_documents(&mut self, name: &str, documents: Vec<Value>) {
        self.insert(name, Value::Array(documents));
    }

    fn read(&self, name: &str, kind: ScalarKind) -> Result<Option<Scalar>, JsonError> {
        match self.entry(name) {
            Some(value) => Ok(Some(value_to_scalar(value, kind)?)),
            None => Ok(None),
        }
    }

    fn read_document(&self, name: &str) -> Result<Option<Value>, JsonError> {
        match self.entry(name) {
            Some(value @ (Value::Object(_) | Value::Array(_))) => Ok(Some(value.clone())),
            Some(other) => Err(JsonError::NotDocument {
                name: name.to_string(),
                found: json_kind(other),
            }),
            None => Ok(None),
        }
    }

    #[inline]
    fn output(&self) -> Value {
        self.value.clone()
    }

    #[inline]
    fn into_output(self) -> Value {
        self.value
    }

    #[inline]
    fn length(&self) -> Option<usize> {
        self.value.as_array().map(Vec::len)
    }

    fn at(&self, index: usize) -> Result<Self, JsonError> {
        let len = self.length().unwrap_or(0);
        match self.value.get(index) {
            Some(value) => Ok(Self::from(value.clone())),
            None => Err(JsonError::Index { index, len }),
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "real",
        Value::Number(_) => "integer",
        Value::String(_) => "text",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn scalar_to_value(scalar: Scalar) -> Value {
    match scalar {
        Scalar::Integer(v) => Value::from(v),
        Scalar::Real(v) => Number::from_f64(v).map_or(Value::Null, Value::Number),
        Scalar::Text(v) => Value::String(v),
        Scalar::Boolean(v) => Value::Bool(v),
        Scalar::Binary(v) => Value::Array(v.into_iter().map(Value::from).collect()),
    }
}

fn value_to_scalar(value: &Value, kind: ScalarKind) -> Result<Scalar, AttributeError> {
    let mismatch = || AttributeError::Mismatch {
        expected: kind,
        found: json_kind(value),
    };

    match (kind, value) {
        (ScalarKind::Integer, Value::Number(n)) => match n.as_i64() {
            Some(v) => Ok(Scalar::Integer(v)),
            None if n.is_u64() => Err(AttributeError::OutOfRange {
                target: "i64",
                value: n.to_string(),
            }),
            None => Err(mismatch()),
        },
        (ScalarKind::Real, Value::Number(n)) => n.as_f64().map(Scalar::Real).ok_or_else(mismatch),
        (ScalarKind::Text, Value::String(s)) => Ok(Scalar::Text(s.clone())),
        (ScalarKind::Boolean, Value::Bool(b)) => Ok(Scalar::Boolean(*b)),
        (ScalarKind::Binary, Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_u64()
                    .and_then(|byte| u8::try_from(byte).ok())
                    .ok_or_else(|| AttributeError::OutOfRange {
                        target: "u8",
                        value: item.to_string(),
                    })
            })
            .collect::<Result<Vec<u8>, _>>()
            .map(Scalar::Binary),
        _ => Err(mismatch()),
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use seq_reflect::{
        AttributeError, DocumentShape, Format, ReadOptions, Schema, ScalarKind, from_format,
        from_format_with, to_format,
    };
    use serde_json::json;

    use super::{JsonError, JsonFormat};
    use crate::fixtures::{Abc, Account, Inner, Outer, Point, Sample};

    fn written<S: Schema>(value: &S) -> JsonFormat {
        let mut format = JsonFormat::new_empty();
        to_format(&mut format, value);
        format
    }

    fn read<S: Schema>(format: &JsonFormat) -> Result<S, JsonError> {
        let mut value = S::default();
        from_format(format, &mut value)?;
        Ok(value)
    }

    #[test]
    fn scalar_round_trip() {
        let account = Account {
            id: 42,
            name: String::from("hello"),
            active: true,
        };
        let format = written(&account);
        assert_eq!(format.to_text(), r#"{"id":42,"name":"hello","active":true}"#);
        assert_eq!(read::<Account>(&format).unwrap(), account);
    }

    #[test]
    fn nested_struct_is_an_object() {
        let outer = Outer::sample();
        let format = written(&outer);

        assert_eq!(format.as_value()["inner"], json!({ "x": 3, "y": "abc" }));
        assert_eq!(read::<Outer>(&format).unwrap(), outer);
    }

    #[test]
    fn sequence_is_an_ordered_array() {
        let format = written(&Outer::sample());

        assert_eq!(
            format.as_value()["points"],
            json!([{ "x": 1, "y": 2 }, { "x": 3, "y": 4 }, { "x": 5, "y": 6 }])
        );

        let outer = read::<Outer>(&format).unwrap();
        assert_eq!(
            outer.points,
            [
                Point { x: 1, y: 2 },
                Point { x: 3, y: 4 },
                Point { x: 5, y: 6 },
            ]
        );
    }

    #[test]
    fn keys_follow_declaration_order() {
        assert!(Abc::attribute_names().eq(["a", "b", "c"]));

        let format = written(&Abc::default());
        let keys = format.as_value().as_object().unwrap().keys();
        assert!(keys.eq(["a", "b", "c"]));
    }

    #[test]
    fn missing_key_yields_default() {
        let format: JsonFormat = r#"{"a":1,"c":"z"}"#.parse().unwrap();
        let abc = read::<Abc>(&format).unwrap();
        assert_eq!(abc.a, 1);
        assert_eq!(abc.b, 0);
        assert_eq!(abc.c, "z");

        let format: JsonFormat = r#"{"a":1,"b":null,"c":"z"}"#.parse().unwrap();
        assert_eq!(read::<Abc>(&format).unwrap().b, 0);
    }

    #[test]
    fn strict_read_rejects_missing_key() {
        let format: JsonFormat = r#"{"a":1,"c":"z"}"#.parse().unwrap();
        let mut abc = Abc::default();
        let err = from_format_with(&format, &mut abc, &ReadOptions::strict()).unwrap_err();
        assert!(matches!(
            err,
            JsonError::Attribute(AttributeError::Missing { ref name }) if name == "b"
        ));
    }

    #[test]
    fn binary_and_reals() {
        let sample = Sample {
            ratio: 0.125,
            small: 200,
            blob: vec![0, 127, 255],
        };
        let format = written(&sample);
        assert_eq!(format.as_value()["blob"], json!([0, 127, 255]));
        assert_eq!(read::<Sample>(&format).unwrap(), sample);
    }

    #[test]
    fn non_finite_real_is_written_as_null() {
        let format = written(&Sample {
            ratio: f64::NAN,
            ..Sample::default()
        });
        assert!(format.as_value()["ratio"].is_null());
        assert_eq!(read::<Sample>(&format).unwrap().ratio, 0.0);
    }

    #[test]
    fn narrowing_and_mismatch_errors() {
        let format: JsonFormat = r#"{"ratio":1.5,"small":300,"blob":[]}"#.parse().unwrap();
        assert!(matches!(
            read::<Sample>(&format),
            Err(JsonError::Attribute(AttributeError::OutOfRange { target: "u8", .. }))
        ));

        let format: JsonFormat = r#"{"id":"7"}"#.parse().unwrap();
        assert!(matches!(
            read::<Account>(&format),
            Err(JsonError::Attribute(AttributeError::Mismatch {
                expected: ScalarKind::Integer,
                found: "text",
            }))
        ));
    }

    #[test]
    fn scalar_in_place_of_document() {
        let format: JsonFormat = r#"{"id":1,"inner":5}"#.parse().unwrap();
        let err = read::<Outer>(&format).unwrap_err();
        assert!(matches!(err, JsonError::NotDocument { found: "integer", .. }));
    }

    #[test]
    fn malformed_text_is_a_parse_error() {
        assert!(matches!(
            "{\"a\": 1,".parse::<JsonFormat>(),
            Err(JsonError::Parse(_))
        ));
    }

    #[test]
    fn positional_access() {
        let format = JsonFormat::from(json!([{ "x": 1 }, { "x": 2 }]));
        assert_eq!(format.length(), Some(2));
        assert_eq!(format.at(1).unwrap().get::<i64>("x").unwrap(), 2);
        assert!(matches!(
            format.at(2),
            Err(JsonError::Index { index: 2, len: 2 })
        ));
        assert_eq!(JsonFormat::new_empty().length(), None);
    }

    #[test]
    fn pretty_text_parses_back() {
        let format = written(&Outer::sample());
        let text = format.to_text_pretty();
        assert!(text.contains('\n'));
        assert_eq!(JsonFormat::parse(&text).unwrap(), format);
    }

    #[test]
    fn structural_schemas_share_documents() {
        let format = written(&Inner {
            x: 9,
            y: String::from("q"),
        });
        let other: JsonFormat = format.to_text().parse().unwrap();
        assert_eq!(read::<Inner>(&other).unwrap().x, 9);
    }

    #[test]
    fn sequence_stored_as_object_is_rejected() {
        let format: JsonFormat =
            r#"{"id":1,"inner":{"x":3,"y":"abc"},"points":{"x":1,"y":2}}"#.parse().unwrap();
        let mut outer = Outer::default();
        let err = from_format_with(&format, &mut outer, &ReadOptions::strict()).unwrap_err();
        assert!(matches!(
            err,
            JsonError::Attribute(AttributeError::Shape {
                ref name,
                expected: DocumentShape::Array,
                found: DocumentShape::Object,
            }) if name == "points"
        ));
    }

    #[test]
    fn nested_stored_as_array_is_rejected() {
        let format: JsonFormat = r#"{"id":1,"inner":[1,2],"points":[]}"#.parse().unwrap();
        let err = read::<Outer>(&format).unwrap_err();
        assert!(matches!(
            err,
            JsonError::Attribute(AttributeError::Shape {
                ref name,
                expected: DocumentShape::Object,
                found: DocumentShape::Array,
            }) if name == "inner"
        ));
    }
}
