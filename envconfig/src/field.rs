//! Field descriptors produced by `#[derive(Envconfig)]`

use url::Url;

use crate::error::MultiError;
use crate::processor::Processor;

/// A struct whose fields can be populated from the environment.
///
/// Normally implemented with `#[derive(Envconfig)]`. A hand-written
/// implementation lists the participating fields in declaration order:
///
/// ```rust
/// use envconfig::{Field, Specification};
///
/// #[derive(Default)]
/// struct Server {
///     host: String,
///     port: u16,
/// }
///
/// impl Specification for Server {
///     fn fields(&mut self) -> Vec<Field<'_>> {
///         vec![
///             Field::new("host", &mut self.host).key("host").default("localhost"),
///             Field::new("port", &mut self.port).key("port").required("true"),
///         ]
///     }
/// }
/// ```
pub trait Specification {
    /// Describe the fields that take part in processing.
    fn fields(&mut self) -> Vec<Field<'_>>;
}

/// One struct field together with its `#[envconfig(...)]` metadata.
pub struct Field<'a> {
    pub(crate) name: &'a str,
    pub(crate) key: &'a str,
    pub(crate) default: &'a str,
    pub(crate) required: &'a str,
    pub(crate) slot: Slot<'a>,
}

impl<'a> Field<'a> {
    /// Describe the field `name` stored at `value`.
    ///
    /// Without a [`key`](Self::key) the field is skipped.
    pub fn new<S: Settable + ?Sized>(name: &'a str, value: &'a mut S) -> Self {
        Self {
            name,
            key: "",
            default: "",
            required: "",
            slot: value.slot(),
        }
    }

    /// Key suffix appended to the prefix to form the environment variable
    pub fn key(mut self, key: &'a str) -> Self {
        self.key = key;
        self
    }

    /// Literal used when the environment variable is unset or empty
    pub fn default(mut self, default: &'a str) -> Self {
        self.default = default;
        self
    }

    /// Required flag; only the literal `"true"` makes the field required
    pub fn required(mut self, required: &'a str) -> Self {
        self.required = required;
        self
    }

    /// Declared field name
    pub fn name(&self) -> &str {
        self.name
    }

    pub(crate) fn is_required(&self) -> bool {
        self.required == "true"
    }
}

/// Mutable access to a field, tagged by how its value is converted.
pub enum Slot<'a> {
    Str(&'a mut String),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    Usize(&'a mut usize),
    Bool(&'a mut bool),
    F32(&'a mut f32),
    F64(&'a mut f64),
    /// Set when the value parses as an absolute URL, otherwise left alone.
    ///
    /// Relative references such as `/api` or `db.internal` have no base to
    /// resolve against and are skipped like any other unparsable value.
    Url(&'a mut Option<Url>),
    /// A nested structure, processed with the field's key as prefix.
    Struct(&'a mut dyn Nested),
    /// A type with no conversion; the field is never modified.
    Opaque,
}

impl Slot<'_> {
    pub(crate) fn is_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }
}

/// Types that can back a described field.
///
/// Implemented for the supported scalar types, for `Option<Url>`, and by
/// `#[derive(Envconfig)]` for nested structures. Other types may implement
/// it by returning [`Slot::Opaque`].
pub trait Settable {
    /// Borrow the value as a typed slot
    fn slot(&mut self) -> Slot<'_>;
}

macro_rules! impl_settable {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Settable for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::$variant(self)
                }
            }
        )*
    };
}

impl_settable! {
    String => Str,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    bool => Bool,
    f32 => F32,
    f64 => F64,
    Option<Url> => Url,
}

/// A nested structure field.
///
/// The field is replaced by a freshly processed `Default::default()` value,
/// so nested settings never carry over values set before processing.
pub trait Nested {
    /// Process a fresh instance under `prefix` and store it on success.
    ///
    /// On failure the field is left unchanged.
    fn process_nested(&mut self, processor: &Processor<'_>, prefix: &str)
        -> Result<(), MultiError>;
}

impl<T: Specification + Default> Nested for T {
    fn process_nested(
        &mut self,
        processor: &Processor<'_>,
        prefix: &str,
    ) -> Result<(), MultiError> {
        let mut fresh = T::default();
        processor.process(prefix, &mut fresh)?;
        *self = fresh;
        Ok(())
    }
}
