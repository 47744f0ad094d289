use core::fmt;

// -----------------------------------------------------------------------------
// Category

/// An enumeration of the "shapes" an attribute value can take.
///
/// The category of an attribute is derived from its value type alone,
/// see [`Classify::CATEGORY`], and decides how the attribute is written to
/// and read from a [`Format`].
///
/// [`Classify::CATEGORY`]: crate::Classify::CATEGORY
/// [`Format`]: crate::Format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A primitive value: integer, real, text, boolean or binary.
    Scalar,
    /// A value whose type is itself a [`Schema`](crate::Schema).
    NestedStruct,
    /// An ordered sequence of [`Schema`](crate::Schema) values.
    SequenceOfNestedStruct,
}

impl Category {
    /// Returns `true` if this is [`Category::Scalar`].
    #[inline]
    pub const fn is_scalar(self) -> bool {
        matches!(self, Self::Scalar)
    }

    /// Returns `true` if this is [`Category::NestedStruct`].
    #[inline]
    pub const fn is_nested(self) -> bool {
        matches!(self, Self::NestedStruct)
    }

    /// Returns `true` if this is [`Category::SequenceOfNestedStruct`].
    #[inline]
    pub const fn is_sequence(self) -> bool {
        matches!(self, Self::SequenceOfNestedStruct)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => f.pad("Scalar"),
            Self::NestedStruct => f.pad("NestedStruct"),
            Self::SequenceOfNestedStruct => f.pad("SequenceOfNestedStruct"),
        }
    }
}
