//! The traversal engine: the only place that knows how to walk a [`Schema`].
//!
//! [`for_each`] and [`for_each_mut`] visit every attribute of an instance
//! exactly once, in declaration order, passing a descriptor to a visitor.
//! All attributes of one instance are produced by a single walk, so any
//! positional output built from it (document keys, column lists, value
//! lists) stays index-aligned.
//!
//! # Examples
//!
//! ```
//! use seq_reflect::{Attribute, Classify, Schema, Visitor, Walk, WalkMut, for_each};
//! use seq_reflect::info::AttributeInfo;
//!
//! #[derive(Default)]
//! struct Abc { a: i32, b: String, c: bool }
//!
//! impl Schema for Abc {
//!     const NAME: &'static str = "Abc";
//!     const ATTRIBUTES: &'static [AttributeInfo] = &[
//!         AttributeInfo::new::<i32>("a"),
//!         AttributeInfo::new::<String>("b"),
//!         AttributeInfo::new::<bool>("c"),
//!     ];
//!     fn walk<W: Walk>(&self, w: &mut W) -> Result<(), W::Error> {
//!         w.attribute(&self.a)?;
//!         w.attribute(&self.b)?;
//!         w.attribute(&self.c)
//!     }
//!     fn walk_mut<W: WalkMut>(&mut self, w: &mut W) -> Result<(), W::Error> {
//!         w.attribute(&mut self.a)?;
//!         w.attribute(&mut self.b)?;
//!         w.attribute(&mut self.c)
//!     }
//! }
//!
//! struct Names(Vec<&'static str>);
//!
//! impl Visitor for Names {
//!     type Error = core::convert::Infallible;
//!     fn visit<T: Classify>(&mut self, attribute: Attribute<'_, T>) -> Result<(), Self::Error> {
//!         self.0.push(attribute.name());
//!         Ok(())
//!     }
//! }
//!
//! let mut names = Names(Vec::new());
//! let Ok(()) = for_each(&Abc::default(), &mut names);
//! assert_eq!(names.0, ["a", "b", "c"]);
//! ```

use crate::info::AttributeInfo;
use crate::{Attribute, AttributeMut, Classify, Schema, Walk, WalkMut};

// -----------------------------------------------------------------------------
// Visitor

/// Called once per attribute by [`for_each`].
pub trait Visitor {
    type Error;

    fn visit<T: Classify>(&mut self, attribute: Attribute<'_, T>) -> Result<(), Self::Error>;
}

/// Called once per attribute by [`for_each_mut`].
pub trait VisitorMut {
    type Error;

    fn visit_mut<T: Classify>(&mut self, attribute: AttributeMut<'_, T>)
    -> Result<(), Self::Error>;
}

// -----------------------------------------------------------------------------
// Cursor

/// Pairs the values produced by a walk with the schema's attribute list.
struct Cursor<'v, V> {
    schema: &'static str,
    attributes: &'static [AttributeInfo],
    index: usize,
    visitor: &'v mut V,
}

impl<'v, V> Cursor<'v, V> {
    #[inline]
    fn new<S: Schema>(visitor: &'v mut V) -> Self {
        Self {
            schema: S::NAME,
            attributes: S::ATTRIBUTES,
            index: 0,
            visitor,
        }
    }

    fn advance<T: Classify>(&mut self) -> (&'static AttributeInfo, usize) {
        let index = self.index;
        let Some(info) = self.attributes.get(index) else {
            panic!(
                "schema `{}` walked more attributes than the {} it declares",
                self.schema,
                self.attributes.len(),
            );
        };
        debug_assert_eq!(
            info.category(),
            T::CATEGORY,
            "attribute `{}` of schema `{}` is declared as {} but walked as {}",
            info.name(),
            self.schema,
            info.category(),
            T::CATEGORY,
        );
        self.index += 1;
        (info, index)
    }

    #[inline]
    fn finish(self) {
        debug_assert_eq!(
            self.index,
            self.attributes.len(),
            "schema `{}` walked fewer attributes than it declares",
            self.schema,
        );
    }
}

impl<V: Visitor> Walk for Cursor<'_, V> {
    type Error = V::Error;

    #[inline]
    fn attribute<T: Classify>(&mut self, value: &T) -> Result<(), Self::Error> {
        let (info, index) = self.advance::<T>();
        log::trace!("visit `{}.{}` ({})", self.schema, info.name(), info.category());
        self.visitor.visit(Attribute::new(info, index, value))
    }
}

impl<V: VisitorMut> WalkMut for Cursor<'_, V> {
    type Error = V::Error;

    #[inline]
    fn attribute<T: Classify>(&mut self, value: &mut T) -> Result<(), Self::Error> {
        let (info, index) = self.advance::<T>();
        log::trace!("visit_mut `{}.{}` ({})", self.schema, info.name(), info.category());
        self.visitor.visit_mut(AttributeMut::new(info, index, value))
    }
}

// -----------------------------------------------------------------------------
// Entry points

/// Visits every attribute of `instance` in declaration order.
///
/// The first error returned by `visitor` stops the traversal and is
/// returned unmodified.
///
/// # Panics
///
/// Panics if the [`Schema::walk`] implementation produces more values than
/// [`Schema::ATTRIBUTES`] declares.
pub fn for_each<S: Schema, V: Visitor>(instance: &S, visitor: &mut V) -> Result<(), V::Error> {
    let mut cursor = Cursor::new::<S>(visitor);
    instance.walk(&mut cursor)?;
    cursor.finish();
    Ok(())
}

/// Visits every attribute of `instance` mutably, in declaration order.
///
/// The first error returned by `visitor` stops the traversal and is
/// returned unmodified; attributes visited before it keep their new values.
///
/// # Panics
///
/// Panics if the [`Schema::walk_mut`] implementation produces more values
/// than [`Schema::ATTRIBUTES`] declares.
pub fn for_each_mut<S: Schema, V: VisitorMut>(
    instance: &mut S,
    visitor: &mut V,
) -> Result<(), V::Error> {
    let mut cursor = Cursor::new::<S>(visitor);
    instance.walk_mut(&mut cursor)?;
    cursor.finish();
    Ok(())
}

// -----------------------------------------------------------------------------
// Tests
