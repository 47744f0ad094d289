//! Nested documents stored as JSON text in a single column.
//!
//! A [`Row`] becomes an object keyed by column name, a sequence of rows an
//! array of such objects. Blobs become arrays of byte numbers and booleans
//! are already integers, so every cell value has exactly one encoding.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use rusqlite::types::Value;
use serde_json::{Map, Number, Value as Json};

use super::{Affinity, Cell, Record, Row, RowError};

// -----------------------------------------------------------------------------
// Encoding

pub(super) fn encode(record: &Record) -> String {
    record_to_json(record).to_string()
}

pub(super) fn encode_all(records: &[Record]) -> String {
    Json::Array(records.iter().map(record_to_json).collect()).to_string()
}

fn record_to_json(record: &Record) -> Json {
    match record {
        Record::Row(row) => row_to_json(row),
        Record::Rows(rows) => Json::Array(rows.iter().map(row_to_json).collect()),
    }
}

fn row_to_json(row: &Row) -> Json {
    let map = row
        .cells()
        .iter()
        .map(|cell| (cell.name().to_string(), value_to_json(cell)))
        .collect::<Map<_, _>>();
    Json::Object(map)
}

fn value_to_json(cell: &Cell) -> Json {
    match cell.value() {
        Value::Null => Json::Null,
        Value::Integer(v) => Json::from(*v),
        Value::Real(v) => Number::from_f64(*v).map_or_else(
            || {
                log::warn!(
                    "`{}` holds the non-finite real {v}, embedded as null",
                    cell.name()
                );
                Json::Null
            },
            Json::Number,
        ),
        Value::Text(v) => Json::String(v.clone()),
        Value::Blob(v) => Json::Array(v.iter().copied().map(Json::from).collect()),
    }
}

// -----------------------------------------------------------------------------
// Decoding

pub(super) fn decode(name: &str, payload: &str) -> Result<Record, RowError> {
    let json: Json = serde_json::from_str(payload).map_err(|e| embedded(name, e))?;
    match json {
        Json::Object(map) => Ok(Record::Row(row_from_json(name, map)?)),
        Json::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Json::Object(map) => row_from_json(name, map),
                _ => Err(embedded(name, "sequence element is not an object")),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Record::Rows),
        _ => Err(embedded(name, "payload is neither an object nor an array")),
    }
}

fn row_from_json(name: &str, map: Map<String, Json>) -> Result<Row, RowError> {
    map.into_iter()
        .map(|(column, json)| {
            let value = value_from_json(name, json)?;
            Ok(Cell::new(column, Affinity::of_value(&value), value))
        })
        .collect()
}

fn value_from_json(name: &str, json: Json) -> Result<Value, RowError> {
    Ok(match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Integer(i64::from(b)),
        Json::Number(n) => match n.as_i64() {
            Some(v) => Value::Integer(v),
            None => Value::Real(n.as_f64().unwrap_or(f64::NAN)),
        },
        Json::String(s) => Value::Text(s),
        Json::Array(items) => Value::Blob(
            items
                .iter()
                .map(|item| item.as_u64().and_then(|b| u8::try_from(b).ok()))
                .collect::<Option<Vec<u8>>>()
                .ok_or_else(|| embedded(name, "array is not a byte string"))?,
        ),
        Json::Object(_) => return Err(embedded(name, "unexpected object in a cell")),
    })
}

#[inline]
fn embedded(name: &str, reason: impl ToString) -> RowError {
    RowError::Embedded {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

// -----------------------------------------------------------------------------
// Tests
