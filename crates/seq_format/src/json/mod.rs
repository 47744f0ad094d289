//! A document backend over [`serde_json::Value`].
//!
//! Scalars map onto JSON the obvious way, with two exceptions:
//!
//! - binary values are arrays of byte numbers,
//! - non-finite reals cannot be represented and are written as `null`.
//!
//! `null` reads back as an absent entry.
//!
//! # Examples
//!
//! ```
//! use seq_format::json::JsonFormat;
//! use seq_reflect::{Format, Schema, Walk, WalkMut, from_format, to_format};
//! use seq_reflect::info::AttributeInfo;
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Point { x: i64, y: i64 }
//!
//! impl Schema for Point {
//!     const NAME: &'static str = "Point";
//!     const ATTRIBUTES: &'static [AttributeInfo] = &[
//!         AttributeInfo::new::<i64>("x"),
//!         AttributeInfo::new::<i64>("y"),
//!     ];
//!     fn walk<W: Walk>(&self, w: &mut W) -> Result<(), W::Error> {
//!         w.attribute(&self.x)?;
//!         w.attribute(&self.y)
//!     }
//!     fn walk_mut<W: WalkMut>(&mut self, w: &mut W) -> Result<(), W::Error> {
//!         w.attribute(&mut self.x)?;
//!         w.attribute(&mut self.y)
//!     }
//! }
//!
//! let mut format = JsonFormat::new_empty();
//! to_format(&mut format, &Point { x: 1, y: 2 });
//! assert_eq!(format.to_text(), r#"{"x":1,"y":2}"#);
//!
//! let format: JsonFormat = r#"{"x":5}"#.parse().unwrap();
//! let mut point = Point::default();
//! from_format(&format, &mut point).unwrap();
//! assert_eq!(point, Point { x: 5, y: 0 });
//! ```

// -----------------------------------------------------------------------------
// Modules

mod error;
mod format;

// -----------------------------------------------------------------------------
// Exports

pub use error::JsonError;
pub use format::JsonFormat;
