use crate::Classify;
use crate::info::{Category, ValueType};

// -----------------------------------------------------------------------------
// AttributeInfo

/// Static information for a declared attribute.
///
/// The [`ValueType`] is taken from the value type when the descriptor is
/// built, so it is resolved once per attribute instead of once per call.
///
/// # Examples
///
/// ```
/// use seq_reflect::ScalarKind;
/// use seq_reflect::info::{AttributeInfo, Category};
///
/// const ID: AttributeInfo = AttributeInfo::new::<i64>("id");
///
/// assert_eq!(ID.name(), "id");
/// assert_eq!(ID.category(), Category::Scalar);
/// assert_eq!(ID.value_type().scalar_kind(), Some(ScalarKind::Integer));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AttributeInfo {
    name: &'static str,
    value_type: ValueType,
}

impl AttributeInfo {
    /// Creates a new [`AttributeInfo`] for the given attribute `name` and value type `T`.
    #[inline]
    pub const fn new<T: Classify>(name: &'static str) -> Self {
        Self {
            name,
            value_type: T::VALUE_TYPE,
        }
    }

    /// Returns the attribute name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the category of the attribute's value type.
    #[inline]
    pub const fn category(&self) -> Category {
        self.value_type.category()
    }

    /// Returns the attribute's value type.
    #[inline]
    pub const fn value_type(&self) -> ValueType {
        self.value_type
    }
}
