//! Provide compile-time schema infomation.
//!
//! ## Menu
//!
//! - [`Category`]: The shape of an attribute's value type, one of `Scalar`,
//!   `NestedStruct` and `SequenceOfNestedStruct`.
//!
//! - [`AttributeInfo`]: A static descriptor of one declared attribute,
//!   including its name and its [`ValueType`].
//!
//! - [`ValueType`]: The [`Category`] of an attribute together with its scalar
//!   kind or nested schema.
//!
//! - [`SchemaInfo`]: A view over a schema's ordered attribute list,
//!   including the schema name and lookup helpers.
//!
//! All of them are `Copy` and can be built in `const` context, so a schema's
//! attribute list lives in static memory and is never rebuilt at runtime.

// -----------------------------------------------------------------------------
// Modules

mod attribute_info;
mod category;
mod schema_info;
mod value_type;

// -----------------------------------------------------------------------------
// Exports

pub use attribute_info::AttributeInfo;
pub use category::Category;
pub use schema_info::SchemaInfo;
pub use value_type::ValueType;
