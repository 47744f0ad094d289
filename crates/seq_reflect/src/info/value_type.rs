use core::fmt;
use core::hash::{Hash, Hasher};

use crate::ScalarKind;
use crate::info::{Category, SchemaInfo};

// -----------------------------------------------------------------------------
// ValueType

/// The value type of an attribute, as far as traversal can tell it apart.
///
/// Scalars carry their [`ScalarKind`]. Nested and sequence attributes carry
/// a function returning the [`SchemaInfo`] of the nested (or element) type,
/// so recursive schemas can still be described in `const` context.
#[derive(Clone, Copy)]
pub enum ValueType {
    Scalar(ScalarKind),
    NestedStruct(fn() -> SchemaInfo),
    SequenceOfNestedStruct(fn() -> SchemaInfo),
}

impl ValueType {
    /// Returns the [`Category`] of this value type.
    #[inline]
    pub const fn category(self) -> Category {
        match self {
            Self::Scalar(_) => Category::Scalar,
            Self::NestedStruct(_) => Category::NestedStruct,
            Self::SequenceOfNestedStruct(_) => Category::SequenceOfNestedStruct,
        }
    }

    /// Returns the scalar kind, if this is a scalar.
    #[inline]
    pub const fn scalar_kind(self) -> Option<ScalarKind> {
        match self {
            Self::Scalar(kind) => Some(kind),
            _ => None,
        }
    }

    /// Returns the nested schema, or the element schema of a sequence.
    #[inline]
    pub fn schema(self) -> Option<SchemaInfo> {
        match self {
            Self::Scalar(_) => None,
            Self::NestedStruct(info) | Self::SequenceOfNestedStruct(info) => Some(info()),
        }
    }
}

// Nested types compare by schema name. Function addresses are not stable
// across codegen units.
impl PartialEq for ValueType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => a == b,
            (Self::NestedStruct(a), Self::NestedStruct(b))
            | (Self::SequenceOfNestedStruct(a), Self::SequenceOfNestedStruct(b)) => {
                a().name() == b().name()
            }
            _ => false,
        }
    }
}

impl Eq for ValueType {}

impl Hash for ValueType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.category().hash(state);
        match self {
            Self::Scalar(kind) => kind.hash(state),
            Self::NestedStruct(info) | Self::SequenceOfNestedStruct(info) => {
                info().name().hash(state);
            }
        }
    }
}

impl fmt::Debug for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => f.debug_tuple("Scalar").field(kind).finish(),
            Self::NestedStruct(info) => f
                .debug_tuple("NestedStruct")
                .field(&info().name())
                .finish(),
            Self::SequenceOfNestedStruct(info) => f
                .debug_tuple("SequenceOfNestedStruct")
                .field(&info().name())
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::fixtures::{Inner, Point};
    use crate::info::Category;
    use crate::{Classify, ScalarKind};

    #[test]
    fn value_types_name_their_schema() {
        let nested = <Inner as Classify>::VALUE_TYPE;
        assert_eq!(nested.category(), Category::NestedStruct);
        assert_eq!(nested.schema().map(|s| s.name()), Some("Inner"));
        assert_eq!(nested.scalar_kind(), None);

        let sequence = <Vec<Point> as Classify>::VALUE_TYPE;
        assert_eq!(sequence.schema().map(|s| s.name()), Some("Point"));
        assert_ne!(sequence, <Point as Classify>::VALUE_TYPE);

        let text = <String as Classify>::VALUE_TYPE;
        assert_eq!(text.scalar_kind(), Some(ScalarKind::Text));
        assert!(text.schema().is_none());
        assert_ne!(text, <i64 as Classify>::VALUE_TYPE);
    }
}
