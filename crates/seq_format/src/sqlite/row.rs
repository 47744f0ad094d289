use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use rusqlite::types::Value;
use seq_reflect::{AttributeError, Format, Scalar, ScalarKind};

use super::{RowError, embed};

// -----------------------------------------------------------------------------
// Affinity

/// The declared type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Affinity {
    Integer,
    Real,
    Text,
    Blob,
}

impl Affinity {
    /// Returns the column type as written in `CREATE TABLE`.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
            Self::Text => "TEXT",
            Self::Blob => "BLOB",
        }
    }

    /// Returns the column type a scalar of `kind` is stored in.
    #[inline]
    pub const fn of(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::Integer | ScalarKind::Boolean => Self::Integer,
            ScalarKind::Real => Self::Real,
            ScalarKind::Text => Self::Text,
            ScalarKind::Binary => Self::Blob,
        }
    }

    /// Guesses the column type from a stored value.
    #[inline]
    pub const fn of_value(value: &Value) -> Self {
        match value {
            Value::Integer(_) => Self::Integer,
            Value::Real(_) => Self::Real,
            Value::Null | Value::Text(_) => Self::Text,
            Value::Blob(_) => Self::Blob,
        }
    }
}

impl fmt::Display for Affinity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// Cell & Row

/// One named column value.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    name: String,
    affinity: Affinity,
    value: Value,
}

impl Cell {
    #[inline]
    pub fn new(name: impl Into<String>, affinity: Affinity, value: Value) -> Self {
        Self {
            name: name.into(),
            affinity,
            value,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub const fn affinity(&self) -> Affinity {
        self.affinity
    }

    #[inline]
    pub const fn value(&self) -> &Value {
        &self.value
    }
}

/// An ordered list of cells.
///
/// The order is the column order, both in `CREATE TABLE` and in `INSERT`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    #[inline]
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell named `name`.
    pub fn get(&self, name: &str) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.name == name)
    }

    /// Appends `cell`, or replaces the cell of the same name in place.
    pub fn push(&mut self, cell: Cell) {
        match self.cells.iter_mut().find(|c| c.name == cell.name) {
            Some(slot) => *slot = cell,
            None => self.cells.push(cell),
        }
    }

    /// Returns the column names in order.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = &str> {
        self.cells.iter().map(Cell::name)
    }

    /// Returns the values in column order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &Value> {
        self.cells.iter().map(Cell::value)
    }
}

impl FromIterator<Cell> for Row {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut row = Row::new();
        iter.into_iter().for_each(|cell| row.push(cell));
        row
    }
}

// -----------------------------------------------------------------------------
// Record

/// The document type of [`RowFormat`].
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// A single struct.
    Row(Row),
    /// A sequence of structs, one row each.
    Rows(Vec<Row>),
}

impl Default for Record {
    #[inline]
    fn default() -> Self {
        Self::Row(Row::new())
    }
}

// -----------------------------------------------------------------------------
// RowFormat

/// A [`Format`] producing relational rows.
///
/// Writing a nested document stores it as a JSON payload in a `TEXT` cell;
/// reading it back decodes the payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowFormat {
    record: Record,
}

impl RowFormat {
    /// Returns the wrapped record.
    #[inline]
    pub const fn record(&self) -> &Record {
        &self.record
    }

    /// Returns the wrapped row, if this format does not hold a sequence.
    #[inline]
    pub const fn row(&self) -> Option<&Row> {
        match &self.record {
            Record::Row(row) => Some(row),
            Record::Rows(_) => None,
        }
    }

    fn cell(&self, name: &str) -> Option<&Cell> {
        self.row()?.get(name).filter(|cell| cell.value != Value::Null)
    }

    fn push(&mut self, cell: Cell) {
        match &mut self.record {
            Record::Row(row) => row.push(cell),
            Record::Rows(_) => log::warn!(
                "cannot write column `{}` into a sequence of rows, the value is dropped",
                cell.name
            ),
        }
    }
}

impl From<Row> for RowFormat {
    #[inline]
    fn from(row: Row) -> Self {
        Self {
            record: Record::Row(row),
        }
    }
}

impl Format for RowFormat {
    type Document = Record;
    type Error = RowError;

    #[inline]
    fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    fn from_document(document: Record) -> Result<Self, RowError> {
        Ok(Self { record: document })
    }

    fn write(&mut self, name: &str, value: Scalar) {
        let affinity = Affinity::of(value.kind());
        self.push(Cell::new(name, affinity, scalar_to_value(value)));
    }

    fn write_document(&mut self, name: &str, document: Record) {
        let payload = embed::encode(&document);
        self.push(Cell::new(name, Affinity::Text, Value::Text(payload)));
    }

    fn write_documents(&mut self, name: &str, documents: Vec<Record>) {
        let payload = embed::encode_all(&documents);
        self.push(Cell::new(name, Affinity::Text, Value::Text(payload)));
    }

    fn read(&self, name: &str, kind: ScalarKind) -> Result<Option<Scalar>, RowError> {
        match self.cell(name) {
            Some(cell) => Ok(Some(value_to_scalar(&cell.value, kind)?)),
            None => Ok(None),
        }
    }

    fn read_document(&self, name: &str) -> Result<Option<Record>, RowError> {
        match self.cell(name).map(Cell::value) {
            Some(Value::Text(payload)) => embed::decode(name, payload).map(Some),
            Some(other) => Err(AttributeError::Mismatch {
                expected: ScalarKind::Text,
                found: value_kind(other),
            }
            .into()),
            None => Ok(None),
        }
    }

    #[inline]
    fn output(&self) -> Record {
        self.record.clone()
    }

    #[inline]
    fn into_output(self) -> Record {
        self.record
    }

    #[inline]
    fn length(&self) -> Option<usize> {
        match &self.record {
            Record::Rows(rows) => Some(rows.len()),
            Record::Row(_) => None,
        }
    }

    fn at(&self, index: usize) -> Result<Self, RowError> {
        let len = self.length().unwrap_or(0);
        match &self.record {
            Record::Rows(rows) if index < len => Ok(Self::from(rows[index].clone())),
            _ => Err(RowError::Index { index, len }),
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

pub(super) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Integer(_) => "integer",
        Value::Real(_) => "real",
        Value::Text(_) => "text",
        Value::Blob(_) => "binary",
    }
}

fn scalar_to_value(scalar: Scalar) -> Value {
    match scalar {
        Scalar::Integer(v) => Value::Integer(v),
        Scalar::Real(v) => Value::Real(v),
        Scalar::Text(v) => Value::Text(v),
        Scalar::Boolean(v) => Value::Integer(i64::from(v)),
        Scalar::Binary(v) => Value::Blob(v),
    }
}

/// Converts a stored value, parsing text where the column held text.
fn value_to_scalar(value: &Value, kind: ScalarKind) -> Result<Scalar, AttributeError> {
    let malformed = |text: &str| AttributeError::Malformed {
        expected: kind,
        text: text.to_string(),
    };

    match (kind, value) {
        (ScalarKind::Integer, Value::Integer(v)) => Ok(Scalar::Integer(*v)),
        (ScalarKind::Integer, Value::Text(t)) => t
            .trim()
            .parse()
            .map(Scalar::Integer)
            .map_err(|_| malformed(t.as_str())),
        (ScalarKind::Real, Value::Real(v)) => Ok(Scalar::Real(*v)),
        (ScalarKind::Real, Value::Integer(v)) => Ok(Scalar::Real(*v as f64)),
        (ScalarKind::Real, Value::Text(t)) => {
            t.trim().parse().map(Scalar::Real).map_err(|_| malformed(t.as_str()))
        }
        (ScalarKind::Text, Value::Text(t)) => Ok(Scalar::Text(t.clone())),
        (ScalarKind::Boolean, Value::Integer(v)) => Ok(Scalar::Boolean(*v != 0)),
        (ScalarKind::Boolean, Value::Text(t)) => match t.trim() {
            "true" => Ok(Scalar::Boolean(true)),
            "false" => Ok(Scalar::Boolean(false)),
            other => other
                .parse::<i64>()
                .map(|v| Scalar::Boolean(v != 0))
                .map_err(|_| malformed(t.as_str())),
        },
        (ScalarKind::Binary, Value::Blob(b)) => Ok(Scalar::Binary(b.clone())),
        _ => Err(AttributeError::Mismatch {
            expected: kind,
            found: value_kind(value),
        }),
    }
}

// -----------------------------------------------------------------------------
// Tests
