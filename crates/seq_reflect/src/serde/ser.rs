use serde_core::ser::SerializeStruct;
use serde_core::{Serialize, Serializer};

use crate::{Attribute, Classify, Schema, Visitor, for_each};

// -----------------------------------------------------------------------------
// SerializeDriver

/// Serializes a [`Schema`] instance through `serde`.
///
/// The output is a struct named [`Schema::NAME`] with one field per
/// attribute, in declaration order.
pub struct SerializeDriver<'a, T> {
    value: &'a T,
}

impl<'a, T: Schema> SerializeDriver<'a, T> {
    /// Creates a driver borrowing `value`.
    #[inline]
    pub const fn new(value: &'a T) -> Self {
        Self { value }
    }
}

impl<T: Schema> Serialize for SerializeDriver<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct(T::NAME, T::ATTRIBUTES.len())?;
        for_each(self.value, &mut FieldSerializer::<S> { state: &mut state })?;
        state.end()
    }
}

// -----------------------------------------------------------------------------
// Fields

struct FieldSerializer<'s, S: Serializer> {
    state: &'s mut S::SerializeStruct,
}

impl<S: Serializer> Visitor for FieldSerializer<'_, S> {
    type Error = S::Error;

    #[inline]
    fn visit<T: Classify>(&mut self, attribute: Attribute<'_, T>) -> Result<(), S::Error> {
        self.state
            .serialize_field(attribute.name(), &ValueSerializer(attribute.value()))
    }
}

/// Routes a value to [`Classify::serialize_value`].
struct ValueSerializer<'a, T>(&'a T);

impl<T: Classify> Serialize for ValueSerializer<'_, T> {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize_value(serializer)
    }
}

// -----------------------------------------------------------------------------
// Sequence

pub(crate) fn serialize_sequence<T: Schema, S: Serializer>(
    values: &[T],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(values.iter().map(SerializeDriver::new))
}

// -----------------------------------------------------------------------------
// Tests
