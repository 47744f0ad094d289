use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use serde_core::de::{DeserializeSeed, Error, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde_core::{Deserialize, Deserializer};

use crate::de::on_missing;
use crate::{AttributeMut, Classify, ReadOptions, Schema, VisitorMut, for_each_mut};

// -----------------------------------------------------------------------------
// DeserializeDriver

/// Deserializes into an existing [`Schema`] instance through `serde`.
///
/// Accepts either a map keyed by attribute name, in any order, or a
/// sequence holding the attributes by position. Attributes that do not
/// appear in the input are handled according to [`ReadOptions::missing`].
pub struct DeserializeDriver<'a, T> {
    value: &'a mut T,
    options: ReadOptions,
}

impl<'a, T: Schema> DeserializeDriver<'a, T> {
    /// Creates a driver with [`ReadOptions::default`].
    #[inline]
    pub fn new(value: &'a mut T) -> Self {
        Self::with_options(value, ReadOptions::default())
    }

    /// Creates a driver with the given options.
    #[inline]
    pub const fn with_options(value: &'a mut T, options: ReadOptions) -> Self {
        Self { value, options }
    }
}

impl<'de, T: Schema> DeserializeSeed<'de> for DeserializeDriver<'_, T> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        deserializer.deserialize_struct(
            T::NAME,
            &[],
            SchemaVisitor {
                value: self.value,
                options: self.options,
            },
        )
    }
}

// -----------------------------------------------------------------------------
// Ident parser

#[derive(Debug, Clone, Eq, PartialEq)]
struct Ident(String);

impl<'de> Deserialize<'de> for Ident {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdentVisitor;

        impl<'de> Visitor<'de> for IdentVisitor {
            type Value = Ident;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("identifier")
            }

            #[inline]
            fn visit_str<E: Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Ident(value.to_string()))
            }

            #[inline]
            fn visit_string<E: Error>(self, value: String) -> Result<Self::Value, E> {
                Ok(Ident(value))
            }
        }

        deserializer.deserialize_identifier(IdentVisitor)
    }
}

// -----------------------------------------------------------------------------
// Struct visitor

struct SchemaVisitor<'a, T> {
    value: &'a mut T,
    options: ReadOptions,
}

impl<'de, T: Schema> Visitor<'de> for SchemaVisitor<'_, T> {
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "schema `{}`", T::NAME)
    }

    fn visit_map<V: MapAccess<'de>>(self, mut map: V) -> Result<(), V::Error> {
        let Self { value, options } = self;
        let info = T::info();
        let mut seen = vec![false; info.len()];

        while let Some(Ident(key)) = map.next_key::<Ident>()? {
            let Some(index) = info.index_of(&key) else {
                log::debug!("ignoring unknown key `{key}` of schema `{}`", T::NAME);
                map.next_value::<IgnoredAny>()?;
                continue;
            };

            if seen[index] {
                return Err(Error::duplicate_field(T::ATTRIBUTES[index].name()));
            }
            seen[index] = true;

            map.next_value_seed(FieldSeed {
                value: &mut *value,
                index,
                options: &options,
            })?;
        }

        reset_unseen(value, &seen, &options)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<(), A::Error> {
        let Self { value, options } = self;
        let len = T::ATTRIBUTES.len();
        let mut seen = vec![false; len];

        for index in 0..len {
            let seed = FieldSeed {
                value: &mut *value,
                index,
                options: &options,
            };
            if seq.next_element_seed(seed)?.is_none() {
                break;
            }
            seen[index] = true;
        }

        reset_unseen(value, &seen, &options)
    }
}

// -----------------------------------------------------------------------------
// Single field

/// Deserializes the attribute at `index` of `value`.
struct FieldSeed<'a, T> {
    value: &'a mut T,
    index: usize,
    options: &'a ReadOptions,
}

impl<'de, T: Schema> DeserializeSeed<'de> for FieldSeed<'_, T> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        let mut field = FieldDeserializer {
            index: self.index,
            deserializer: Some(deserializer),
            options: self.options,
            marker: PhantomData,
        };
        for_each_mut(self.value, &mut field)?;

        match field.deserializer {
            None => Ok(()),
            Some(_) => Err(Error::custom(format!(
                "schema `{}` has no attribute at index {}",
                T::NAME,
                self.index,
            ))),
        }
    }
}

struct FieldDeserializer<'a, 'de, D> {
    index: usize,
    deserializer: Option<D>,
    options: &'a ReadOptions,
    marker: PhantomData<&'de ()>,
}

impl<'de, D: Deserializer<'de>> VisitorMut for FieldDeserializer<'_, 'de, D> {
    type Error = D::Error;

    fn visit_mut<T: Classify>(&mut self, attribute: AttributeMut<'_, T>) -> Result<(), D::Error> {
        if attribute.index() != self.index {
            return Ok(());
        }
        match self.deserializer.take() {
            Some(deserializer) => attribute
                .into_value_mut()
                .deserialize_value(deserializer, self.options),
            None => Ok(()),
        }
    }
}

// -----------------------------------------------------------------------------
// Absent fields

fn reset_unseen<T: Schema, E: Error>(
    value: &mut T,
    seen: &[bool],
    options: &ReadOptions,
) -> Result<(), E> {
    for_each_mut(
        value,
        &mut ResetUnseen {
            seen,
            options,
            marker: PhantomData,
        },
    )
}

struct ResetUnseen<'a, E> {
    seen: &'a [bool],
    options: &'a ReadOptions,
    marker: PhantomData<fn() -> E>,
}

impl<E: Error> VisitorMut for ResetUnseen<'_, E> {
    type Error = E;

    fn visit_mut<T: Classify>(&mut self, mut attribute: AttributeMut<'_, T>) -> Result<(), E> {
        if self.seen[attribute.index()] {
            return Ok(());
        }
        let name = attribute.name();
        on_missing(name, self.options).map_err(|_| E::missing_field(name))?;
        attribute.set_value(T::default());
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Sequence

pub(crate) fn deserialize_sequence<'de, T: Schema, D: Deserializer<'de>>(
    values: &mut Vec<T>,
    deserializer: D,
    options: &ReadOptions,
) -> Result<(), D::Error> {
    deserializer.deserialize_seq(SequenceVisitor { values, options })
}

struct SequenceVisitor<'a, T> {
    values: &'a mut Vec<T>,
    options: &'a ReadOptions,
}

impl<'de, T: Schema> Visitor<'de> for SequenceVisitor<'_, T> {
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a sequence of `{}`", T::NAME)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<(), A::Error> {
        self.values.clear();
        if let Some(hint) = seq.size_hint() {
            self.values.reserve(hint);
        }

        loop {
            let mut element = T::default();
            let seed = DeserializeDriver::with_options(&mut element, *self.options);
            if seq.next_element_seed(seed)?.is_none() {
                return Ok(());
            }
            self.values.push(element);
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
