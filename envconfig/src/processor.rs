//! The field population pass

use std::env::{self, VarError};

use url::Url;

use crate::de;
use crate::error::{FieldError, MultiError};
use crate::field::{Field, Slot, Specification};

type Lookup<'a> = Box<dyn Fn(&str) -> Option<String> + 'a>;

/// Populates [`Specification`] structs from a key/value source.
///
/// [`Processor::new`] reads the process environment. [`Processor::with_lookup`]
/// resolves keys through any function instead, which keeps tests free of
/// global state.
pub struct Processor<'a> {
    lookup: Lookup<'a>,
}

impl Default for Processor<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Processor<'a> {
    /// Processor backed by the process environment
    pub fn new() -> Self {
        Self {
            lookup: Box::new(read_env),
        }
    }

    /// Processor backed by `lookup`; `None` means the key is unset.
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use envconfig::{Envconfig, Processor};
    ///
    /// #[derive(Default, Envconfig)]
    /// struct Config {
    ///     #[envconfig(key = "port")]
    ///     port: u16,
    /// }
    ///
    /// let vars = HashMap::from([("APP_PORT".to_string(), "8080".to_string())]);
    /// let processor = Processor::with_lookup(|key| vars.get(key).cloned());
    ///
    /// let mut config = Config::default();
    /// processor.process("app", &mut config).unwrap();
    /// assert_eq!(config.port, 8080);
    /// ```
    pub fn with_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + 'a,
    {
        Self {
            lookup: Box::new(lookup),
        }
    }

    /// Populate `spec` from keys of the form `PREFIX_KEY`.
    ///
    /// Fields are visited in declaration order. Conversion failures and
    /// missing required values are collected and returned together; fields
    /// assigned before a failure stay assigned. A failure inside a nested
    /// structure is returned immediately, discarding errors collected so far
    /// for the enclosing struct.
    ///
    /// # Errors
    ///
    /// - A field marked `required = "true"` resolved to an empty value
    /// - A value could not be converted to its field's type
    pub fn process<T>(&self, prefix: &str, spec: &mut T) -> Result<(), MultiError>
    where
        T: Specification + ?Sized,
    {
        let mut errors = MultiError::default();

        for field in spec.fields() {
            if field.key.is_empty() {
                continue;
            }
            let key = format!("{prefix}_{}", field.key).to_uppercase();
            let value = self.resolve(&key, &field);

            if value.is_empty() && !field.slot.is_struct() {
                if field.is_required() {
                    errors.push(FieldError::required(key));
                } else {
                    tracing::trace!(key = %key, field = field.name, "skipping unset field");
                }
                continue;
            }

            if let Some(error) = self.assign(field, key, value)? {
                errors.push(error);
            }
        }

        if !errors.is_empty() {
            tracing::debug!(prefix, count = errors.len(), "environment processing failed");
        }
        errors.into_result()
    }

    fn resolve(&self, key: &str, field: &Field<'_>) -> String {
        let value = (self.lookup)(key).unwrap_or_default();
        if value.is_empty() && !field.default.is_empty() {
            tracing::debug!(key, default = field.default, "using default value");
            return field.default.to_string();
        }
        value
    }

    /// Store `value` into the field, returning the conversion error if any.
    fn assign(
        &self,
        field: Field<'_>,
        key: String,
        value: String,
    ) -> Result<Option<FieldError>, MultiError> {
        let Field {
            key: suffix, slot, ..
        } = field;
        let parse = ParseContext {
            key: &key,
            suffix,
            value: &value,
        };

        let error = match slot {
            Slot::Str(target) => {
                *target = value.clone();
                None
            }
            Slot::I8(target) => parse.store(target, de::parse_signed(&value)),
            Slot::I16(target) => parse.store(target, de::parse_signed(&value)),
            Slot::I32(target) => parse.store(target, de::parse_signed(&value)),
            Slot::I64(target) => parse.store(target, de::parse_signed(&value)),
            Slot::Isize(target) => parse.store(target, de::parse_signed(&value)),
            Slot::U8(target) => parse.store(target, de::parse_unsigned(&value)),
            Slot::U16(target) => parse.store(target, de::parse_unsigned(&value)),
            Slot::U32(target) => parse.store(target, de::parse_unsigned(&value)),
            Slot::U64(target) => parse.store(target, de::parse_unsigned(&value)),
            Slot::Usize(target) => parse.store(target, de::parse_unsigned(&value)),
            Slot::Bool(target) => parse.store(target, de::parse_bool(&value)),
            Slot::F32(target) => parse.store(target, de::parse_float(&value)),
            Slot::F64(target) => parse.store(target, de::parse_float(&value)),
            Slot::Url(target) => {
                match Url::parse(&value) {
                    Ok(url) => *target = Some(url),
                    // Not reported: an unparsable URL leaves the field unset.
                    Err(e) => tracing::warn!(key = %key, error = %e, "ignoring invalid URL"),
                }
                None
            }
            Slot::Struct(nested) => {
                tracing::trace!(prefix = %key, "processing nested structure");
                nested.process_nested(self, &key)?;
                None
            }
            Slot::Opaque => None,
        };

        Ok(error)
    }
}

struct ParseContext<'a> {
    key: &'a str,
    suffix: &'a str,
    value: &'a str,
}

impl ParseContext<'_> {
    fn store<T>(&self, target: &mut T, parsed: Option<T>) -> Option<FieldError> {
        match parsed {
            Some(parsed) => {
                *target = parsed;
                None
            }
            None => Some(FieldError::parse::<T>(self.key, self.suffix, self.value)),
        }
    }
}

fn read_env(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) => Some(value),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(_)) => {
            tracing::warn!(key, "environment variable is not valid unicode, treating it as unset");
            None
        }
    }
}
