//! Bridges [`Schema`] types to `serde`.
//!
//! A schema already knows its attribute names, their order and how every
//! value type is classified, so it does not need `#[derive(Serialize)]`
//! to be used with any `serde` data format.
//!
//! - [`SerializeDriver`]: serializes a schema instance as a struct, one
//!   field per attribute in declaration order. Nested structs become nested
//!   structs, sequences become sequences.
//! - [`DeserializeDriver`]: a [`DeserializeSeed`] that updates an existing
//!   instance in place. It accepts a map (fields in any order) or a
//!   sequence (fields by position). Unknown keys are ignored, duplicated
//!   keys are rejected, and absent attributes follow
//!   [`ReadOptions::missing`].
//!
//! The deserializer does not announce field names to the data format, so
//! it is meant for self-describing formats such as JSON or RON.
//!
//! # Examples
//!
//! ```
//! use seq_reflect::{Schema, Walk, WalkMut, info::AttributeInfo};
//! use seq_reflect::serde::{DeserializeDriver, SerializeDriver};
//! use serde_core::de::DeserializeSeed;
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
//! let text = serde_json::to_string(&SerializeDriver::new(&Point { x: 1, y: 2 })).unwrap();
//! assert_eq!(text, r#"{"x":1,"y":2}"#);
//!
//! let mut point = Point::default();
//! let mut de = serde_json::Deserializer::from_str(r#"{"y":4,"x":3}"#);
//! DeserializeDriver::new(&mut point).deserialize(&mut de).unwrap();
//! assert_eq!(point, Point { x: 3, y: 4 });
//! ```
//!
//! [`Schema`]: crate::Schema
//! [`DeserializeSeed`]: serde_core::de::DeserializeSeed
//! [`ReadOptions::missing`]: crate::ReadOptions::missing

// -----------------------------------------------------------------------------
// Modules

mod de;
mod ser;

// -----------------------------------------------------------------------------
// Exports

pub use de::DeserializeDriver;
pub use ser::SerializeDriver;

pub(crate) use de::deserialize_sequence;
pub(crate) use ser::serialize_sequence;
