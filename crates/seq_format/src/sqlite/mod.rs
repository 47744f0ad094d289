//! A relational-row backend over SQLite.
//!
//! [`RowFormat`] is a connection-free [`Format`](seq_reflect::Format): it
//! turns one struct into one ordered list of typed cells, and back.
//! [`SqliteTable`] owns the connection and moves rows between a
//! [`RowFormat`] and a table.
//!
//! Column types are derived from the scalar kind:
//!
//! | kind    | column    | stored as      |
//! |---------|-----------|----------------|
//! | integer | `INTEGER` | integer        |
//! | boolean | `INTEGER` | `0` or `1`     |
//! | real    | `REAL`    | real           |
//! | text    | `TEXT`    | text           |
//! | binary  | `BLOB`    | blob           |
//!
//! Nested structs and sequences of structs do not get tables of their own.
//! They are stored as a JSON payload in a single `TEXT` column.
//!
//! # Examples
//!
//! ```
//! use seq_format::sqlite::{RowFormat, SqliteTable};
//! use seq_reflect::{Format, Schema, Walk, WalkMut, to_format};
//! use seq_reflect::info::AttributeInfo;
//!
//! #[derive(Default)]
//! struct User { id: i64, name: String, active: bool }
//!
//! impl Schema for User {
//!     const NAME: &'static str = "User";
//!     const ATTRIBUTES: &'static [AttributeInfo] = &[
//!         AttributeInfo::new::<i64>("id"),
//!         AttributeInfo::new::<String>("name"),
//!         AttributeInfo::new::<bool>("active"),
//!     ];
//!     fn walk<W: Walk>(&self, w: &mut W) -> Result<(), W::Error> {
//!         w.attribute(&self.id)?;
//!         w.attribute(&self.name)?;
//!         w.attribute(&self.active)
//!     }
//!     fn walk_mut<W: WalkMut>(&mut self, w: &mut W) -> Result<(), W::Error> {
//!         w.attribute(&mut self.id)?;
//!         w.attribute(&mut self.name)?;
//!         w.attribute(&mut self.active)
//!     }
//! }
//!
//! let mut row = RowFormat::new_empty();
//! to_format(&mut row, &User { id: 1, name: "x".into(), active: true });
//!
//! let mut table = SqliteTable::open_in_memory("users")?;
//! table.flush(&row)?;
//! table.populate()?;
//!
//! assert_eq!(table.get::<i64>("id")?, 1);
//! assert_eq!(table.get::<String>("name")?, "x");
//! assert!(table.get::<bool>("active")?);
//! # Ok::<(), seq_format::sqlite::RowError>(())
//! ```

// -----------------------------------------------------------------------------
// Modules

mod embed;
mod error;
mod row;
mod table;

// -----------------------------------------------------------------------------
// Exports

pub use error::RowError;
pub use row::{Affinity, Cell, Record, Row, RowFormat};
pub use table::SqliteTable;

pub use rusqlite::types::Value;
