use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use std::path::Path;

use rusqlite::types::Value;
use rusqlite::{Connection, params_from_iter};
use seq_reflect::{Format, ReadOptions, ScalarValue, Schema, from_format_with, to_format};

use super::{Affinity, Cell, Record, Row, RowError, RowFormat};

// -----------------------------------------------------------------------------
// SqliteTable

/// Bound for columns a later row does not have.
static NULL: Value = Value::Null;

/// A SQLite table that [`RowFormat`] rows are flushed into and read from.
///
/// The connection is opened on construction and closed when the table is
/// dropped. Rows read by [`populate`](Self::populate) are buffered; reads
/// go to the first buffered row and [`pop_front`](Self::pop_front) moves
/// on to the next one.
pub struct SqliteTable {
    connection: Connection,
    table: String,
    buffer: VecDeque<Row>,
}

impl SqliteTable {
    /// Opens or creates the database at `path`.
    ///
    /// The table itself is created by the first [`flush`](Self::flush).
    pub fn open(path: impl AsRef<Path>, table: impl Into<String>) -> Result<Self, RowError> {
        let table = identifier(table.into())?;
        let connection = Connection::open(path)?;
        Ok(Self::new(connection, table))
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory(table: impl Into<String>) -> Result<Self, RowError> {
        let table = identifier(table.into())?;
        let connection = Connection::open_in_memory()?;
        Ok(Self::new(connection, table))
    }

    #[inline]
    fn new(connection: Connection, table: String) -> Self {
        Self {
            connection,
            table,
            buffer: VecDeque::new(),
        }
    }

    /// Returns the table name.
    #[inline]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Returns the underlying connection.
    #[inline]
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Returns the number of buffered rows.
    #[inline]
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    // -------------------------------------------------------------------------
    // Writing

    /// Creates the table if needed and inserts the rows held by `format`.
    ///
    /// A format holding a sequence inserts one row per element. The table
    /// columns are taken from the first row. Everything runs in one
    /// transaction: either all rows are inserted or none is.
    pub fn flush(&mut self, format: &RowFormat) -> Result<(), RowError> {
        let rows: &[Row] = match format.record() {
            Record::Row(row) => core::slice::from_ref(row),
            Record::Rows(rows) => rows,
        };
        let Some(first) = rows.first().filter(|row| !row.is_empty()) else {
            return Err(RowError::EmptyRow);
        };

        let columns = first
            .columns()
            .map(|name| identifier(name.to_string()))
            .collect::<Result<Vec<_>, _>>()?;

        let definitions = first
            .cells()
            .iter()
            .zip(&columns)
            .map(|(cell, name)| alloc::format!("\"{name}\" {}", cell.affinity()))
            .collect::<Vec<_>>()
            .join(", ");
        let create = alloc::format!(
            "CREATE TABLE IF NOT EXISTS \"{}\" ({definitions});",
            self.table
        );

        let column_list = columns
            .iter()
            .map(|name| alloc::format!("\"{name}\""))
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = (1..=columns.len())
            .map(|i| alloc::format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let insert = alloc::format!(
            "INSERT INTO \"{}\" ({column_list}) VALUES ({placeholders});",
            self.table
        );

        log::debug!("{create}");
        log::debug!("{insert} x{}", rows.len());

        let transaction = self.connection.transaction()?;
        transaction.execute(&create, [])?;
        {
            let mut statement = transaction.prepare(&insert)?;
            for row in rows {
                let values = columns
                    .iter()
                    .map(|name| row.get(name).map_or(&NULL, Cell::value));
                statement.execute(params_from_iter(values))?;
            }
        }
        transaction.commit()?;
        Ok(())
    }

    /// Serializes `instance` and flushes it as one row.
    pub fn insert<S: Schema>(&mut self, instance: &S) -> Result<(), RowError> {
        let mut format = RowFormat::new_empty();
        to_format(&mut format, instance);
        self.flush(&format)
    }

    // -------------------------------------------------------------------------
    // Reading

    /// Runs `SELECT *` on the table and appends every row to the buffer.
    ///
    /// Returns the number of rows read.
    pub fn populate(&mut self) -> Result<usize, RowError> {
        let query = alloc::format!("SELECT * FROM \"{}\";", self.table);
        log::debug!("{query}");

        let mut statement = self.connection.prepare(&query)?;
        let names = statement
            .column_names()
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();

        let mut rows = statement.query([])?;
        let mut count = 0;
        while let Some(row) = rows.next()? {
            let mut cells = Row::new();
            for (index, name) in names.iter().enumerate() {
                let value: Value = row.get(index)?;
                cells.push(Cell::new(name.as_str(), Affinity::of_value(&value), value));
            }
            self.buffer.push_back(cells);
            count += 1;
        }
        Ok(count)
    }

    /// Returns a format over the first buffered row.
    #[inline]
    pub fn front(&self) -> Option<RowFormat> {
        self.buffer.front().cloned().map(RowFormat::from)
    }

    /// Discards the first buffered row.
    #[inline]
    pub fn pop_front(&mut self) -> Option<Row> {
        self.buffer.pop_front()
    }

    /// Reads `name` from the first buffered row.
    ///
    /// Yields `T::default()` when the buffer is empty or the column is absent.
    pub fn get<T: ScalarValue>(&self, name: &str) -> Result<T, RowError> {
        match self.buffer.front() {
            Some(row) => RowFormat::from(row.clone()).get(name),
            None => {
                log::debug!("no buffered row in `{}`, `{name}` is defaulted", self.table);
                Ok(T::default())
            }
        }
    }

    /// Deserializes the first buffered row into `instance`.
    ///
    /// Returns `false`, leaving `instance` untouched, if the buffer is empty.
    pub fn read_front<S: Schema>(
        &self,
        instance: &mut S,
        options: &ReadOptions,
    ) -> Result<bool, RowError> {
        match self.front() {
            Some(format) => {
                from_format_with(&format, instance, options)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// -----------------------------------------------------------------------------
// Identifiers

/// Accepts `[A-Za-z_][A-Za-z0-9_]*`.
fn identifier(name: String) -> Result<String, RowError> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(name)
    } else {
        Err(RowError::Identifier { name })
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use seq_reflect::{AttributeError, Format, ReadOptions, to_format};

    use super::SqliteTable;
    use crate::fixtures::{Abc, Account, Outer, Point};
    use crate::sqlite::{RowError, RowFormat};

    fn account(id: i64, name: &str, active: bool) -> Account {
        Account {
            id,
            name: String::from(name),
            active,
        }
    }

    #[test]
    fn relational_round_trip() {
        let mut table = SqliteTable::open_in_memory("accounts").unwrap();
        table.insert(&account(1, "x", true)).unwrap();

        assert_eq!(table.populate().unwrap(), 1);
        assert_eq!(table.get::<i64>("id").unwrap(), 1);
        assert_eq!(table.get::<String>("name").unwrap(), "x");
        assert!(table.get::<bool>("active").unwrap());
    }

    #[test]
    fn columns_follow_declaration_order() {
        let mut table = SqliteTable::open_in_memory("abc").unwrap();
        table.insert(&Abc::default()).unwrap();

        let mut statement = table
            .connection()
            .prepare("SELECT name, type FROM pragma_table_info('abc') ORDER BY cid")
            .unwrap();
        let columns = statement
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(
            columns,
            [
                (String::from("a"), String::from("INTEGER")),
                (String::from("b"), String::from("INTEGER")),
                (String::from("c"), String::from("TEXT")),
            ]
        );
    }

    #[test]
    fn rows_are_consumed_in_order() {
        let mut table = SqliteTable::open_in_memory("accounts").unwrap();
        table.insert(&account(1, "a", true)).unwrap();
        table.insert(&account(2, "b", false)).unwrap();

        assert_eq!(table.populate().unwrap(), 2);
        assert_eq!(table.get::<i64>("id").unwrap(), 1);
        assert!(table.pop_front().is_some());
        assert_eq!(table.get::<i64>("id").unwrap(), 2);
        assert!(!table.get::<bool>("active").unwrap());
        assert!(table.pop_front().is_some());

        assert_eq!(table.buffered(), 0);
        assert_eq!(table.get::<i64>("id").unwrap(), 0);
        assert!(table.front().is_none());
    }

    #[test]
    fn nested_struct_round_trip() {
        let outer = Outer::sample();
        let mut table = SqliteTable::open_in_memory("outer").unwrap();
        table.insert(&outer).unwrap();
        table.populate().unwrap();

        let mut target = Outer::default();
        assert!(table.read_front(&mut target, &ReadOptions::default()).unwrap());
        assert_eq!(target, outer);
    }

    #[test]
    fn sequence_flushes_one_row_per_element() {
        let mut format = RowFormat::new_empty();
        to_format(&mut format, &Outer::sample());
        let points = format.read_document("points").unwrap().unwrap();

        let mut table = SqliteTable::open_in_memory("points").unwrap();
        table
            .flush(&RowFormat::from_document(points).unwrap())
            .unwrap();
        assert_eq!(table.populate().unwrap(), 3);

        let mut xs = Vec::new();
        while let Some(row) = table.front() {
            let mut point = Point::default();
            seq_reflect::from_format(&row, &mut point).unwrap();
            xs.push(point.x);
            table.pop_front();
        }
        assert_eq!(xs, [1, 3, 5]);
    }

    #[test]
    fn malformed_stored_text() {
        let mut table = SqliteTable::open_in_memory("accounts").unwrap();
        table
            .connection()
            .execute_batch(
                "CREATE TABLE accounts (id TEXT, name TEXT, active INTEGER);
                 INSERT INTO accounts VALUES ('seven', 'x', 1);",
            )
            .unwrap();
        table.populate().unwrap();

        let mut target = Account::default();
        let err = table
            .read_front(&mut target, &ReadOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            RowError::Attribute(AttributeError::Malformed { .. })
        ));
    }

    #[test]
    fn invalid_identifiers_are_rejected() {
        assert!(matches!(
            SqliteTable::open_in_memory("users; DROP TABLE x"),
            Err(RowError::Identifier { .. })
        ));
        assert!(matches!(
            SqliteTable::open_in_memory("1st"),
            Err(RowError::Identifier { .. })
        ));
        assert!(SqliteTable::open_in_memory("_users_2").is_ok());
    }

    #[test]
    fn empty_record_is_not_flushed() {
        let mut table = SqliteTable::open_in_memory("empty").unwrap();
        assert!(matches!(
            table.flush(&RowFormat::new_empty()),
            Err(RowError::EmptyRow)
        ));
    }

    #[test]
    fn rows_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accounts.db");

        {
            let mut table = SqliteTable::open(&path, "accounts").unwrap();
            table.insert(&account(9, "persisted", true)).unwrap();
        }

        let mut table = SqliteTable::open(&path, "accounts").unwrap();
        assert_eq!(table.populate().unwrap(), 1);
        let mut target = Account::default();
        table
            .read_front(&mut target, &ReadOptions::strict())
            .unwrap();
        assert_eq!(target, account(9, "persisted", true));
    }
}
