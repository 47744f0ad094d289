use alloc::vec::Vec;
use core::convert::Infallible;

use crate::{Attribute, Classify, Format, ScalarValue, Schema, Visitor, for_each};

// -----------------------------------------------------------------------------
// Writer

/// Writes each visited attribute into a format.
struct Writer<'f, F> {
    format: &'f mut F,
}

impl<F: Format> Visitor for Writer<'_, F> {
    type Error = Infallible;

    #[inline]
    fn visit<T: Classify>(&mut self, attribute: Attribute<'_, T>) -> Result<(), Infallible> {
        attribute.value().write_to(self.format, attribute.name());
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Entry point

/// Serializes `instance` into `format`.
///
/// Attributes are written in declaration order. Nested structs and
/// sequence elements are serialized into fresh formats of the same type
/// and written as documents. This never fails: the result is read back
/// through the format's own accessors, e.g. [`Format::output`].
pub fn to_format<F: Format, S: Schema>(format: &mut F, instance: &S) {
    let Ok(()) = for_each(instance, &mut Writer { format });
}

// -----------------------------------------------------------------------------
// Per-category writers

#[inline]
pub(crate) fn write_scalar<F: Format, T: ScalarValue>(format: &mut F, name: &str, value: &T) {
    format.write(name, value.to_scalar());
}

pub(crate) fn write_nested<F: Format, T: Schema>(format: &mut F, name: &str, value: &T) {
    let mut nested = F::new_empty();
    to_format(&mut nested, value);
    format.write_document(name, nested.into_output());
}

pub(crate) fn write_sequence<F: Format, T: Schema>(format: &mut F, name: &str, values: &[T]) {
    let documents = values
        .iter()
        .map(|value| {
            let mut element = F::new_empty();
            to_format(&mut element, value);
            element.into_output()
        })
        .collect::<Vec<_>>();
    format.write_documents(name, documents);
}

// -----------------------------------------------------------------------------
// Tests
