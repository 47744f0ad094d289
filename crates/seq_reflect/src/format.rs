//! The contract a backend implements to be driven by [`to_format`] and
//! [`from_format`].
//!
//! A [`Format`] is a transient container: one is created per call, and the
//! engine creates fresh ones of the same concrete type for every nested
//! struct and every sequence element, through [`Format::new_empty`] and
//! [`Format::from_document`]. Persistence (files, connections, flushing)
//! is the backend's own business and lives outside this trait.
//!
//! [`to_format`]: crate::to_format
//! [`from_format`]: crate::from_format

use alloc::vec::Vec;
use core::fmt;

use crate::{AttributeError, Scalar, ScalarKind, ScalarValue};

// -----------------------------------------------------------------------------
// DocumentShape

/// Whether a document is keyed by attribute name or by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentShape {
    /// Named attributes, the form of a nested struct.
    Object,
    /// Ordered elements, the form of a sequence.
    Array,
}

impl fmt::Display for DocumentShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object => f.pad("an object"),
            Self::Array => f.pad("an array"),
        }
    }
}

// -----------------------------------------------------------------------------
// Format

/// A backend able to store named scalars and named sub-documents.
///
/// # Reading absent names
///
/// [`read`](Self::read) and [`read_document`](Self::read_document) return
/// `Ok(None)` when `name` is absent. What happens then is decided by the
/// caller, see [`MissingPolicy`](crate::MissingPolicy).
///
/// # Positional access
///
/// A format constructed from an array-valued document exposes its elements
/// through [`length`](Self::length) and [`at`](Self::at). For any other
/// document `length` is `None`, which is how the engine tells a nested
/// struct from a sequence and rejects a document of the wrong shape.
pub trait Format: Sized {
    /// The backend-native document, as returned by [`output`](Self::output).
    type Document: Clone;

    /// The backend's error type.
    type Error: From<AttributeError>;

    /// Creates an empty format, ready to be written into.
    fn new_empty() -> Self;

    /// Wraps an existing document, ready to be read from.
    fn from_document(document: Self::Document) -> Result<Self, Self::Error>;

    /// Writes a scalar under `name`, replacing any previous value.
    fn write(&mut self, name: &str, value: Scalar);

    /// Writes a nested document under `name`.
    fn write_document(&mut self, name: &str, document: Self::Document);

    /// Writes an ordered array of documents under `name`.
    fn write_documents(&mut self, name: &str, documents: Vec<Self::Document>);

    /// Reads the scalar stored under `name`, converted to `kind`.
    ///
    /// Returns `Ok(None)` if the name is absent. Stored values that cannot
    /// be converted are an error, never silently defaulted.
    fn read(&self, name: &str, kind: ScalarKind) -> Result<Option<Scalar>, Self::Error>;

    /// Reads the document stored under `name`.
    fn read_document(&self, name: &str) -> Result<Option<Self::Document>, Self::Error>;

    /// Returns a snapshot of everything written so far.
    fn output(&self) -> Self::Document;

    /// Consumes the format, returning its document.
    #[inline]
    fn into_output(self) -> Self::Document {
        self.output()
    }

    /// Returns the number of elements when wrapping an array document,
    /// `None` otherwise.
    fn length(&self) -> Option<usize>;

    /// Returns the shape of the wrapped document.
    #[inline]
    fn shape(&self) -> DocumentShape {
        match self.length() {
            Some(_) => DocumentShape::Array,
            None => DocumentShape::Object,
        }
    }

    /// Returns a format wrapping the element at `index`.
    fn at(&self, index: usize) -> Result<Self, Self::Error>;

    /// Reads `name` as `T`, or `T::default()` if it is absent.
    fn get<T: ScalarValue>(&self, name: &str) -> Result<T, Self::Error> {
        match self.read(name, T::KIND)? {
            Some(scalar) => Ok(T::from_scalar(scalar)?),
            None => Ok(T::default()),
        }
    }
}
