#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod attribute;
mod classify;
mod de;
mod error;
mod scalar;
mod schema;
mod ser;

pub mod format;
pub mod info;
pub mod serde;
pub mod traverse;

#[cfg(test)]
mod fixtures;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use attribute::{Attribute, AttributeMut};
pub use classify::Classify;
pub use de::{MissingPolicy, ReadOptions, from_format, from_format_with};
pub use error::AttributeError;
pub use format::{DocumentShape, Format};
pub use scalar::{Scalar, ScalarKind, ScalarValue};
pub use schema::{Schema, Walk, WalkMut};
pub use ser::to_format;
pub use traverse::{Visitor, VisitorMut, for_each, for_each_mut};
