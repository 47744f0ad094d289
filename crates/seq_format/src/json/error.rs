use alloc::string::String;

use seq_reflect::AttributeError;
use thiserror::Error;

/// Errors raised by [`JsonFormat`](super::JsonFormat).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JsonError {
    #[error(transparent)]
    Attribute(#[from] AttributeError),

    /// The input text is not valid JSON.
    #[error("malformed JSON document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A nested struct or sequence is stored as something else.
    #[error("`{name}` holds {found}, expected an object or an array")]
    NotDocument { name: String, found: &'static str },

    #[error("index {index} is out of bounds for an array of length {len}")]
    Index { index: usize, len: usize },
}
