use alloc::vec::Vec;

use crate::info::AttributeInfo;

// -----------------------------------------------------------------------------
// SchemaInfo

/// A container for compile-time schema info.
///
/// This is a cheap view over [`Schema::NAME`] and [`Schema::ATTRIBUTES`].
/// The order of attributes is fixed, it is the declaration order.
///
/// # Examples
///
/// ```
/// use seq_reflect::info::{AttributeInfo, SchemaInfo};
///
/// const ATTRIBUTES: &[AttributeInfo] = &[
///     AttributeInfo::new::<i64>("a"),
///     AttributeInfo::new::<String>("b"),
///     AttributeInfo::new::<bool>("c"),
/// ];
///
/// let info = SchemaInfo::new("Abc", ATTRIBUTES);
///
/// assert_eq!(info.len(), 3);
/// assert_eq!(info.index_of("b"), Some(1));
/// assert!(info.attribute_names().eq(["a", "b", "c"]));
/// ```
///
/// [`Schema::NAME`]: crate::Schema::NAME
/// [`Schema::ATTRIBUTES`]: crate::Schema::ATTRIBUTES
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SchemaInfo {
    name: &'static str,
    attributes: &'static [AttributeInfo],
}

impl SchemaInfo {
    /// Create a new [`SchemaInfo`].
    #[inline]
    pub const fn new(name: &'static str, attributes: &'static [AttributeInfo]) -> Self {
        Self { name, attributes }
    }

    /// Returns the schema name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the number of attributes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns the [`AttributeInfo`] at the given index, if present.
    #[inline]
    pub fn attribute(&self, index: usize) -> Option<&'static AttributeInfo> {
        self.attributes.get(index)
    }

    /// Returns all attributes in **declaration order**.
    #[inline]
    pub const fn attributes(&self) -> &'static [AttributeInfo] {
        self.attributes
    }

    /// Returns an iterator over the attributes in **declaration order**.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'static AttributeInfo> {
        self.attributes.iter()
    }

    /// Returns the attribute names in declaration order.
    #[inline]
    pub fn attribute_names(&self) -> impl ExactSizeIterator<Item = &'static str> {
        self.attributes.iter().map(AttributeInfo::name)
    }

    /// Returns the index for the given attribute `name`, if present.
    ///
    /// This is O(N) complexity.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.name() == name)
    }

    /// Returns `true` if both schemas declare the same attribute names with
    /// the same value types, in the same order.
    ///
    /// Scalars must have the same [`ScalarKind`](crate::ScalarKind). Nested
    /// and sequence attributes are compared recursively by shape, so schema
    /// names are never compared. Such schemas are interchangeable for
    /// traversal: a document written from one can be read into the other.
    pub fn same_shape(&self, other: &SchemaInfo) -> bool {
        shapes_match(*self, *other, &mut Vec::new())
    }
}

// A pair of schemas already being compared further up is assumed to match,
// so recursive schemas terminate.
fn shapes_match(a: SchemaInfo, b: SchemaInfo, pending: &mut Vec<(&str, &str)>) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if pending.contains(&(a.name, b.name)) {
        return true;
    }
    pending.push((a.name, b.name));
    let matched = a.iter().zip(b.iter()).all(|(x, y)| {
        let (p, q) = (x.value_type(), y.value_type());
        x.name() == y.name()
            && p.category() == q.category()
            && p.scalar_kind() == q.scalar_kind()
            && match (p.schema(), q.schema()) {
                (Some(s), Some(t)) => shapes_match(s, t, pending),
                _ => true,
            }
    });
    pending.pop();
    matched
}

// -----------------------------------------------------------------------------
// Tests
