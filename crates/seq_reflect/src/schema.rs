use core::any::Any;
use core::convert::Infallible;

use crate::info::{AttributeInfo, SchemaInfo};
use crate::{Attribute, AttributeMut, Classify, Visitor, VisitorMut, for_each, for_each_mut};

// -----------------------------------------------------------------------------
// Walk

/// Receives attribute values from [`Schema::walk`], one call per attribute.
///
/// Implemented by the traversal engine, users only call it.
pub trait Walk {
    type Error;

    fn attribute<T: Classify>(&mut self, value: &T) -> Result<(), Self::Error>;
}

/// Receives attribute values from [`Schema::walk_mut`], one call per attribute.
///
/// Implemented by the traversal engine, users only call it.
pub trait WalkMut {
    type Error;

    fn attribute<T: Classify>(&mut self, value: &mut T) -> Result<(), Self::Error>;
}

// -----------------------------------------------------------------------------
// Schema

/// A struct type declared as an ordered, fixed list of named attributes.
///
/// [`ATTRIBUTES`](Self::ATTRIBUTES) is the registration list: one
/// [`AttributeInfo`] per field, in declaration order. [`walk`](Self::walk)
/// and [`walk_mut`](Self::walk_mut) hand the matching field values over in
/// that same order, the engine pairs them up by position.
///
/// A type either implements `Schema` or it is a leaf value, there is no
/// default schema for scalars. Implementing `Schema` makes the type usable
/// as a nested attribute, and `Vec<T>` of it as a sequence attribute.
///
/// # Examples
///
/// ```
/// use seq_reflect::{Schema, Walk, WalkMut, info::AttributeInfo};
///
/// #[derive(Default)]
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// impl Schema for Point {
///     const NAME: &'static str = "Point";
///     const ATTRIBUTES: &'static [AttributeInfo] = &[
///         AttributeInfo::new::<i64>("x"),
///         AttributeInfo::new::<i64>("y"),
///     ];
///
///     fn walk<W: Walk>(&self, walker: &mut W) -> Result<(), W::Error> {
///         walker.attribute(&self.x)?;
///         walker.attribute(&self.y)
///     }
///
///     fn walk_mut<W: WalkMut>(&mut self, walker: &mut W) -> Result<(), W::Error> {
///         walker.attribute(&mut self.x)?;
///         walker.attribute(&mut self.y)
///     }
/// }
///
/// assert!(Point::attribute_names().eq(["x", "y"]));
/// ```
pub trait Schema: Default + 'static {
    /// The schema name, usually the type ident.
    const NAME: &'static str;

    /// The attribute list in declaration order.
    const ATTRIBUTES: &'static [AttributeInfo];

    /// Passes every attribute value to `walker`, in declaration order.
    fn walk<W: Walk>(&self, walker: &mut W) -> Result<(), W::Error>;

    /// Passes every attribute value to `walker` mutably, in declaration order.
    fn walk_mut<W: WalkMut>(&mut self, walker: &mut W) -> Result<(), W::Error>;

    /// Returns the [`SchemaInfo`] of this type.
    #[inline]
    fn info() -> SchemaInfo {
        SchemaInfo::new(Self::NAME, Self::ATTRIBUTES)
    }

    /// Returns the attribute names in declaration order.
    #[inline]
    fn attribute_names() -> impl ExactSizeIterator<Item = &'static str> {
        Self::ATTRIBUTES.iter().map(AttributeInfo::name)
    }

    /// Returns a copy of the attribute `name`, if it exists and holds a `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seq_reflect::{Schema, Walk, WalkMut, info::AttributeInfo};
    /// # #[derive(Default)]
    /// # struct Account { id: i64, name: String }
    /// # impl Schema for Account {
    /// #     const NAME: &'static str = "Account";
    /// #     const ATTRIBUTES: &'static [AttributeInfo] = &[
    /// #         AttributeInfo::new::<i64>("id"),
    /// #         AttributeInfo::new::<String>("name"),
    /// #     ];
    /// #     fn walk<W: Walk>(&self, w: &mut W) -> Result<(), W::Error> {
    /// #         w.attribute(&self.id)?;
    /// #         w.attribute(&self.name)
    /// #     }
    /// #     fn walk_mut<W: WalkMut>(&mut self, w: &mut W) -> Result<(), W::Error> {
    /// #         w.attribute(&mut self.id)?;
    /// #         w.attribute(&mut self.name)
    /// #     }
    /// # }
    /// let mut account = Account::default();
    /// assert!(account.set_value("name", String::from("ada")));
    ///
    /// assert_eq!(account.value_of::<String>("name").as_deref(), Some("ada"));
    /// assert_eq!(account.value_of::<String>("id"), None);
    /// ```
    fn value_of<T: Classify + Clone>(&self, name: &str) -> Option<T> {
        let mut lookup = ValueOf { name, found: None };
        let Ok(()) = for_each(self, &mut lookup);
        lookup.found
    }

    /// Replaces the attribute `name` with `value`.
    ///
    /// Returns `false`, dropping `value`, if there is no such attribute or
    /// it does not hold a `T`.
    fn set_value<T: Classify>(&mut self, name: &str, value: T) -> bool {
        let mut update = SetValue {
            name,
            value: Some(value),
        };
        let Ok(()) = for_each_mut(self, &mut update);
        update.value.is_none()
    }
}

// -----------------------------------------------------------------------------
// Single attribute access

struct ValueOf<'n, T> {
    name: &'n str,
    found: Option<T>,
}

impl<T: Classify + Clone> Visitor for ValueOf<'_, T> {
    type Error = Infallible;

    fn visit<U: Classify>(&mut self, attribute: Attribute<'_, U>) -> Result<(), Infallible> {
        if attribute.name() == self.name {
            let value: &dyn Any = attribute.value();
            self.found = value.downcast_ref::<T>().cloned();
        }
        Ok(())
    }
}

struct SetValue<'n, T> {
    name: &'n str,
    value: Option<T>,
}

impl<T: Classify> VisitorMut for SetValue<'_, T> {
    type Error = Infallible;

    fn visit_mut<U: Classify>(&mut self, attribute: AttributeMut<'_, U>) -> Result<(), Infallible> {
        if attribute.name() != self.name {
            return Ok(());
        }
        let slot: &mut dyn Any = attribute.into_value_mut();
        if let Some(slot) = slot.downcast_mut::<T>()
            && let Some(value) = self.value.take()
        {
            *slot = value;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Tests
