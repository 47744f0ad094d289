use core::fmt;

use crate::info::{AttributeInfo, Category};

// -----------------------------------------------------------------------------
// Attribute

/// A named, typed view of one attribute value, handed to a [`Visitor`].
///
/// The name and category come from the schema's static [`AttributeInfo`];
/// the value is borrowed from the struct instance being traversed.
///
/// [`Visitor`]: crate::Visitor
pub struct Attribute<'a, T> {
    info: &'static AttributeInfo,
    index: usize,
    value: &'a T,
}

impl<'a, T> Attribute<'a, T> {
    #[inline]
    pub(crate) const fn new(info: &'static AttributeInfo, index: usize, value: &'a T) -> Self {
        Self { info, index, value }
    }

    /// Returns the attribute name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.info.name()
    }

    /// Returns the position of the attribute in declaration order.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the category of the attribute's value type.
    #[inline]
    pub const fn category(&self) -> Category {
        self.info.category()
    }

    /// Returns the static descriptor.
    #[inline]
    pub const fn info(&self) -> &'static AttributeInfo {
        self.info
    }

    /// Returns the value.
    #[inline]
    pub const fn value(&self) -> &'a T {
        self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Attribute<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("name", &self.name())
            .field("index", &self.index)
            .field("value", self.value)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// AttributeMut

/// The mutable counterpart of [`Attribute`], handed to a [`VisitorMut`].
///
/// [`VisitorMut`]: crate::VisitorMut
pub struct AttributeMut<'a, T> {
    info: &'static AttributeInfo,
    index: usize,
    value: &'a mut T,
}

impl<'a, T> AttributeMut<'a, T> {
    #[inline]
    pub(crate) const fn new(info: &'static AttributeInfo, index: usize, value: &'a mut T) -> Self {
        Self { info, index, value }
    }

    /// Returns the attribute name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.info.name()
    }

    /// Returns the position of the attribute in declaration order.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the category of the attribute's value type.
    #[inline]
    pub const fn category(&self) -> Category {
        self.info.category()
    }

    /// Returns the static descriptor.
    #[inline]
    pub const fn info(&self) -> &'static AttributeInfo {
        self.info
    }

    /// Returns the value.
    #[inline]
    pub fn value(&self) -> &T {
        self.value
    }

    /// Returns the value mutably.
    #[inline]
    pub fn value_mut(&mut self) -> &mut T {
        self.value
    }

    /// Replaces the value, without any validation.
    #[inline]
    pub fn set_value(&mut self, value: T) {
        *self.value = value;
    }

    /// Consumes the descriptor, returning the borrowed value.
    #[inline]
    pub fn into_value_mut(self) -> &'a mut T {
        self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for AttributeMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeMut")
            .field("name", &self.name())
            .field("index", &self.index)
            .field("value", &*self.value)
            .finish()
    }
}
