use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::AttributeError;

// -----------------------------------------------------------------------------
// ScalarKind

/// The primitive kinds a [`Format`](crate::Format) must be able to store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Integer,
    Real,
    Text,
    Boolean,
    Binary,
}

impl ScalarKind {
    /// Returns a lowercase, human-readable name of the kind.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Real => "real",
            Self::Text => "text",
            Self::Boolean => "boolean",
            Self::Binary => "binary",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// Scalar

/// An owned primitive value, as exchanged with a [`Format`](crate::Format).
///
/// Integers are widened to `i64` and reals to `f64` on the way out;
/// narrowing back is range-checked, see [`ScalarValue::from_scalar`].
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Integer(i64),
    Real(f64),
    Text(String),
    Boolean(bool),
    Binary(Vec<u8>),
}

impl Scalar {
    /// Returns the kind of this value.
    #[inline]
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::Integer(_) => ScalarKind::Integer,
            Self::Real(_) => ScalarKind::Real,
            Self::Text(_) => ScalarKind::Text,
            Self::Boolean(_) => ScalarKind::Boolean,
            Self::Binary(_) => ScalarKind::Binary,
        }
    }
}

// -----------------------------------------------------------------------------
// ScalarValue

/// A leaf value type that maps onto exactly one [`ScalarKind`].
///
/// Implemented for `bool`, `i8`-`i64`, `u8`-`u32`, `f32`, `f64`,
/// `String` and `Vec<u8>`. `u64`, `usize` and `isize` are left out because
/// they cannot always be widened into an `i64` without loss.
pub trait ScalarValue: Sized + Default {
    /// The kind this type is stored as.
    const KIND: ScalarKind;

    /// Converts the value into its stored representation.
    fn to_scalar(&self) -> Scalar;

    /// Converts a stored representation back.
    ///
    /// Fails with [`AttributeError::Mismatch`] if `scalar` is not of
    /// [`Self::KIND`], and with [`AttributeError::OutOfRange`] if the value
    /// does not fit into `Self`.
    fn from_scalar(scalar: Scalar) -> Result<Self, AttributeError>;
}

#[inline]
fn mismatch(expected: ScalarKind, found: &Scalar) -> AttributeError {
    AttributeError::Mismatch {
        expected,
        found: found.kind().as_str(),
    }
}

macro_rules! impl_scalar_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ScalarValue for $ty {
                const KIND: ScalarKind = ScalarKind::Integer;

                #[inline]
                fn to_scalar(&self) -> Scalar {
                    Scalar::Integer(i64::from(*self))
                }

                fn from_scalar(scalar: Scalar) -> Result<Self, AttributeError> {
                    match scalar {
                        Scalar::Integer(v) => <$ty>::try_from(v).map_err(|_| {
                            AttributeError::OutOfRange {
                                target: stringify!($ty),
                                value: v.to_string(),
                            }
                        }),
                        other => Err(mismatch(Self::KIND, &other)),
                    }
                }
            }
        )*
    };
}

impl_scalar_integer!(i8, i16, i32, i64, u8, u16, u32);

impl ScalarValue for f64 {
    const KIND: ScalarKind = ScalarKind::Real;

    #[inline]
    fn to_scalar(&self) -> Scalar {
        Scalar::Real(*self)
    }

    fn from_scalar(scalar: Scalar) -> Result<Self, AttributeError> {
        match scalar {
            Scalar::Real(v) => Ok(v),
            other => Err(mismatch(Self::KIND, &other)),
        }
    }
}

impl ScalarValue for f32 {
    const KIND: ScalarKind = ScalarKind::Real;

    #[inline]
    fn to_scalar(&self) -> Scalar {
        Scalar::Real(f64::from(*self))
    }

    fn from_scalar(scalar: Scalar) -> Result<Self, AttributeError> {
        match scalar {
            Scalar::Real(v) if v.is_finite() && (v < f32::MIN as f64 || v > f32::MAX as f64) => {
                Err(AttributeError::OutOfRange {
                    target: "f32",
                    value: v.to_string(),
                })
            }
            Scalar::Real(v) => Ok(v as f32),
            other => Err(mismatch(Self::KIND, &other)),
        }
    }
}

impl ScalarValue for bool {
    const KIND: ScalarKind = ScalarKind::Boolean;

    #[inline]
    fn to_scalar(&self) -> Scalar {
        Scalar::Boolean(*self)
    }

    fn from_scalar(scalar: Scalar) -> Result<Self, AttributeError> {
        match scalar {
            Scalar::Boolean(v) => Ok(v),
            other => Err(mismatch(Self::KIND, &other)),
        }
    }
}

impl ScalarValue for String {
    const KIND: ScalarKind = ScalarKind::Text;

    #[inline]
    fn to_scalar(&self) -> Scalar {
        Scalar::Text(self.clone())
    }

    fn from_scalar(scalar: Scalar) -> Result<Self, AttributeError> {
        match scalar {
            Scalar::Text(v) => Ok(v),
            other => Err(mismatch(Self::KIND, &other)),
        }
    }
}

impl ScalarValue for Vec<u8> {
    const KIND: ScalarKind = ScalarKind::Binary;

    #[inline]
    fn to_scalar(&self) -> Scalar {
        Scalar::Binary(self.clone())
    }

    fn from_scalar(scalar: Scalar) -> Result<Self, AttributeError> {
        match scalar {
            Scalar::Binary(v) => Ok(v),
            other => Err(mismatch(Self::KIND, &other)),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::{Scalar, ScalarKind, ScalarValue};
    use crate::AttributeError;

    #[test]
    fn narrowing_is_range_checked() {
        assert_eq!(i8::from_scalar(Scalar::Integer(-128)), Ok(-128));
        assert_eq!(
            u8::from_scalar(Scalar::Integer(300)),
            Err(AttributeError::OutOfRange {
                target: "u8",
                value: String::from("300"),
            })
        );
        assert!(u32::from_scalar(Scalar::Integer(-1)).is_err());
        assert!(f32::from_scalar(Scalar::Real(1e300)).is_err());
        assert_eq!(f32::from_scalar(Scalar::Real(0.5)), Ok(0.5));
    }

    #[test]
    fn kind_mismatch() {
        let err = bool::from_scalar(Scalar::Text(String::from("true"))).unwrap_err();
        assert_eq!(
            err,
            AttributeError::Mismatch {
                expected: ScalarKind::Boolean,
                found: "text",
            }
        );
    }

    #[test]
    fn widening() {
        assert_eq!(7_u32.to_scalar(), Scalar::Integer(7));
        assert_eq!(true.to_scalar().kind(), ScalarKind::Boolean);
        assert_eq!(1.5_f32.to_scalar(), Scalar::Real(1.5));
    }
}
