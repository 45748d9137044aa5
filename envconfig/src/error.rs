//! Error types for environment variable processing

use std::fmt;

/// A single problem found while populating one field.
///
/// Field errors are soft: processing continues with the next field and every
/// error is reported together in a [`MultiError`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum FieldError {
    /// A field marked `required = "true"` resolved to an empty value.
    ///
    /// The value is empty after both the environment lookup and the
    /// `default` substitution.
    #[error("required key {key} not found")]
    Required {
        /// Environment variable that was looked up
        key: String,
    },

    /// A non-empty value could not be converted to the field's type.
    ///
    /// The field keeps the value it had before processing.
    #[error("assigning {key} to {field}: converting '{value}' to type {type_name}")]
    Parse {
        /// Environment variable that was looked up
        key: String,
        /// Key suffix from the field's `key` attribute
        field: String,
        /// Name of the Rust type the value was converted to
        type_name: String,
        /// Raw value that failed to convert
        value: String,
    },
}

impl FieldError {
    /// Create a required-missing error
    pub fn required(key: impl Into<String>) -> Self {
        Self::Required { key: key.into() }
    }

    /// Create a parse error, recording `T` as the target type
    pub fn parse<T: ?Sized>(
        key: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::Parse {
            key: key.into(),
            field: field.into(),
            type_name: std::any::type_name::<T>().to_string(),
            value: value.into(),
        }
    }

    /// Environment variable this error refers to
    pub fn key(&self) -> &str {
        match self {
            Self::Required { key } | Self::Parse { key, .. } => key,
        }
    }
}

/// Every [`FieldError`] collected during one processing pass, in field
/// declaration order.
///
/// Renders as a bracketed block with one ` - ` line per error:
///
/// ```text
/// [
///  - required key APP_HOST not found
///  - assigning APP_PORT to port: converting 'http' to type u16
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MultiError(Vec<FieldError>);

impl MultiError {
    /// Number of collected errors
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no error was collected
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the collected errors in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Borrow the collected errors as a slice
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Consume the aggregate and return the collected errors
    pub fn into_errors(self) -> Vec<FieldError> {
        self.0
    }

    pub(crate) fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// `Ok(())` when nothing was collected, `Err(self)` otherwise
    pub(crate) fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for error in &self.0 {
            writeln!(f, " - {error}")?;
        }
        write!(f, "]")
    }
}

impl std::error::Error for MultiError {}

impl From<Vec<FieldError>> for MultiError {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl FromIterator<FieldError> for MultiError {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MultiError {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MultiError {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
