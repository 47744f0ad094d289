use alloc::string::ToString;
use alloc::vec::Vec;

use crate::format::DocumentShape;
use crate::{AttributeError, AttributeMut, Classify, Format, ScalarValue, Schema};
use crate::{VisitorMut, for_each_mut};

// -----------------------------------------------------------------------------
// Options

/// What to do when a format has no entry for a declared attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Reset the attribute to its type's default value and carry on.
    ///
    /// An absent entry cannot be told apart from a present default value.
    /// Each occurrence is logged at `debug` level.
    #[default]
    Default,
    /// Fail with [`AttributeError::Missing`].
    Reject,
}

/// Options for [`from_format_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    pub missing: MissingPolicy,
}

impl ReadOptions {
    /// Options that reject absent attributes.
    #[inline]
    pub const fn strict() -> Self {
        Self {
            missing: MissingPolicy::Reject,
        }
    }
}

// -----------------------------------------------------------------------------
// Reader

/// Reads each visited attribute back from a format.
struct Reader<'f, F> {
    format: &'f F,
    options: &'f ReadOptions,
}

impl<F: Format> VisitorMut for Reader<'_, F> {
    type Error = F::Error;

    #[inline]
    fn visit_mut<T: Classify>(&mut self, attribute: AttributeMut<'_, T>) -> Result<(), F::Error> {
        let name = attribute.name();
        attribute
            .into_value_mut()
            .read_from(self.format, name, self.options)
    }
}

// -----------------------------------------------------------------------------
// Entry points

/// Deserializes `format` into `instance` with [`ReadOptions::default`].
///
/// See [`from_format_with`].
#[inline]
pub fn from_format<F: Format, S: Schema>(format: &F, instance: &mut S) -> Result<(), F::Error> {
    from_format_with(format, instance, &ReadOptions::default())
}

/// Deserializes `format` into `instance`.
///
/// Attributes are read in declaration order. Any error raised by the
/// format is returned unmodified; attributes read before the failure keep
/// their new values, later ones keep their previous values.
///
/// Sequence attributes are rebuilt: the target `Vec` is cleared, then one
/// element is appended per document element, in order.
pub fn from_format_with<F: Format, S: Schema>(
    format: &F,
    instance: &mut S,
    options: &ReadOptions,
) -> Result<(), F::Error> {
    for_each_mut(instance, &mut Reader { format, options })
}

// -----------------------------------------------------------------------------
// Per-category readers

/// Applies the missing policy for an absent `name`.
pub(crate) fn on_missing(name: &str, options: &ReadOptions) -> Result<(), AttributeError> {
    match options.missing {
        MissingPolicy::Default => {
            log::debug!("attribute `{name}` is absent, using the default value");
            Ok(())
        }
        MissingPolicy::Reject => Err(AttributeError::Missing {
            name: name.to_string(),
        }),
    }
}

fn expect_shape<F: Format>(
    format: &F,
    name: &str,
    expected: DocumentShape,
) -> Result<(), AttributeError> {
    let found = format.shape();
    if found == expected {
        Ok(())
    } else {
        Err(AttributeError::Shape {
            name: name.to_string(),
            expected,
            found,
        })
    }
}

pub(crate) fn read_scalar<F: Format, T: ScalarValue>(
    format: &F,
    name: &str,
    value: &mut T,
    options: &ReadOptions,
) -> Result<(), F::Error> {
    match format.read(name, T::KIND)? {
        Some(scalar) => *value = T::from_scalar(scalar)?,
        None => {
            on_missing(name, options)?;
            *value = T::default();
        }
    }
    Ok(())
}

pub(crate) fn read_nested<F: Format, T: Schema>(
    format: &F,
    name: &str,
    value: &mut T,
    options: &ReadOptions,
) -> Result<(), F::Error> {
    match format.read_document(name)? {
        Some(document) => {
            let nested = F::from_document(document)?;
            expect_shape(&nested, name, DocumentShape::Object)?;
            from_format_with(&nested, value, options)
        }
        None => {
            on_missing(name, options)?;
            *value = T::default();
            Ok(())
        }
    }
}

pub(crate) fn read_sequence<F: Format, T: Schema>(
    format: &F,
    name: &str,
    values: &mut Vec<T>,
    options: &ReadOptions,
) -> Result<(), F::Error> {
    let Some(document) = format.read_document(name)? else {
        on_missing(name, options)?;
        values.clear();
        return Ok(());
    };

    let list = F::from_document(document)?;
    expect_shape(&list, name, DocumentShape::Array)?;
    let len = list.length().unwrap_or(0);

    values.clear();
    values.reserve(len);

    for index in 0..len {
        let element_format = list.at(index)?;
        let mut element = T::default();
        from_format_with(&element_format, &mut element, options)?;
        values.push(element);
    }

    Ok(())
}

// -----------------------------------------------------------------------------
// Tests
