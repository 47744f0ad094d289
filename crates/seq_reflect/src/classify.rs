use alloc::string::String;
use alloc::vec::Vec;

use serde_core::de::DeserializeSeed;
use serde_core::{Deserialize, Deserializer, Serialize, Serializer};

use crate::info::{Category, ValueType};
use crate::serde::{DeserializeDriver, SerializeDriver};
use crate::{Format, ReadOptions, ScalarValue, Schema, de, ser};

// -----------------------------------------------------------------------------
// Classify

/// The type classifier: sorts an attribute's value type into a [`Category`]
/// and routes it to the matching serialization path.
///
/// Classification is resolved from the type alone, at compile time:
///
/// 1. a type implementing [`Schema`] is a [`Category::NestedStruct`];
/// 2. a `Vec<T>` whose `T` implements [`Schema`] is a
///    [`Category::SequenceOfNestedStruct`];
/// 3. every [`ScalarValue`](crate::ScalarValue) type is a [`Category::Scalar`].
///
/// All three are implemented here; downstream crates get the first two
/// for free by implementing [`Schema`].
pub trait Classify: Default + 'static {
    /// The value type: a scalar kind, or the schema of the nested type.
    const VALUE_TYPE: ValueType;

    /// The category of this type.
    const CATEGORY: Category = Self::VALUE_TYPE.category();

    /// Writes `self` into `format` under `name`.
    fn write_to<F: Format>(&self, format: &mut F, name: &str);

    /// Reads `self` back from `format` under `name`.
    fn read_from<F: Format>(
        &mut self,
        format: &F,
        name: &str,
        options: &ReadOptions,
    ) -> Result<(), F::Error>;

    /// Serializes `self` with a `serde` serializer.
    fn serialize_value<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>;

    /// Deserializes into `self` with a `serde` deserializer.
    fn deserialize_value<'de, D: Deserializer<'de>>(
        &mut self,
        deserializer: D,
        options: &ReadOptions,
    ) -> Result<(), D::Error>;
}

// -----------------------------------------------------------------------------
// Scalar

macro_rules! impl_classify_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Classify for $ty {
                const VALUE_TYPE: ValueType = ValueType::Scalar(<$ty as ScalarValue>::KIND);

                #[inline]
                fn write_to<F: Format>(&self, format: &mut F, name: &str) {
                    ser::write_scalar(format, name, self);
                }

                #[inline]
                fn read_from<F: Format>(
                    &mut self,
                    format: &F,
                    name: &str,
                    options: &ReadOptions,
                ) -> Result<(), F::Error> {
                    de::read_scalar(format, name, self, options)
                }

                #[inline]
                fn serialize_value<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    Serialize::serialize(self, serializer)
                }

                #[inline]
                fn deserialize_value<'de, D: Deserializer<'de>>(
                    &mut self,
                    deserializer: D,
                    _options: &ReadOptions,
                ) -> Result<(), D::Error> {
                    *self = <$ty as Deserialize>::deserialize(deserializer)?;
                    Ok(())
                }
            }
        )*
    };
}

impl_classify_scalar!(bool, i8, i16, i32, i64, u8, u16, u32, f32, f64, String, Vec<u8>);

// -----------------------------------------------------------------------------
// NestedStruct

impl<T: Schema> Classify for T {
    const VALUE_TYPE: ValueType = ValueType::NestedStruct(<T as Schema>::info);

    #[inline]
    fn write_to<F: Format>(&self, format: &mut F, name: &str) {
        ser::write_nested(format, name, self);
    }

    #[inline]
    fn read_from<F: Format>(
        &mut self,
        format: &F,
        name: &str,
        options: &ReadOptions,
    ) -> Result<(), F::Error> {
        de::read_nested(format, name, self, options)
    }

    #[inline]
    fn serialize_value<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SerializeDriver::new(self).serialize(serializer)
    }

    #[inline]
    fn deserialize_value<'de, D: Deserializer<'de>>(
        &mut self,
        deserializer: D,
        options: &ReadOptions,
    ) -> Result<(), D::Error> {
        DeserializeDriver::with_options(self, *options).deserialize(deserializer)
    }
}

// -----------------------------------------------------------------------------
// SequenceOfNestedStruct

impl<T: Schema> Classify for Vec<T> {
    const VALUE_TYPE: ValueType = ValueType::SequenceOfNestedStruct(<T as Schema>::info);

    #[inline]
    fn write_to<F: Format>(&self, format: &mut F, name: &str) {
        ser::write_sequence(format, name, self);
    }

    #[inline]
    fn read_from<F: Format>(
        &mut self,
        format: &F,
        name: &str,
        options: &ReadOptions,
    ) -> Result<(), F::Error> {
        de::read_sequence(format, name, self, options)
    }

    #[inline]
    fn serialize_value<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        crate::serde::serialize_sequence(self, serializer)
    }

    #[inline]
    fn deserialize_value<'de, D: Deserializer<'de>>(
        &mut self,
        deserializer: D,
        options: &ReadOptions,
    ) -> Result<(), D::Error> {
        crate::serde::deserialize_sequence(self, deserializer, options)
    }
}

// -----------------------------------------------------------------------------
// Tests
