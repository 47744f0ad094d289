use alloc::string::String;

use thiserror::Error;

use crate::ScalarKind;
use crate::format::DocumentShape;

// -----------------------------------------------------------------------------
// Error

/// Failures raised while moving a single attribute value in or out of a
/// [`Format`](crate::Format).
///
/// Every backend error type converts from this one, so the traversal
/// engine never needs to know which backend it is talking to.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum AttributeError {
    /// Only raised under [`MissingPolicy::Reject`](crate::MissingPolicy::Reject).
    #[error("attribute `{name}` is missing")]
    Missing { name: String },

    #[error("expected {expected} value, found {found}")]
    Mismatch {
        expected: ScalarKind,
        found: &'static str,
    },

    #[error("cannot read `{text}` as {expected}")]
    Malformed { expected: ScalarKind, text: String },

    #[error("value {value} is out of range for `{target}`")]
    OutOfRange { target: &'static str, value: String },

    /// A nested struct stored as an array, or a sequence stored as an object.
    #[error("attribute `{name}` holds {found}, expected {expected}")]
    Shape {
        name: String,
        expected: DocumentShape,
        found: DocumentShape,
    },
}
