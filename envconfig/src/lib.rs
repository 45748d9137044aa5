//! Populate struct fields from environment variables
//!
//! `envconfig` fills an existing struct in place. Each participating field
//! names a key suffix with `#[envconfig(key = "...")]`; the environment
//! variable read for it is `PREFIX_KEY`, upper-cased.
//!
//! # Features
//!
//! - **Declarative**: field metadata via `#[derive(Envconfig)]`
//! - **Defaults and required fields**: `default = "..."`, `required = "true"`
//! - **Nested structs**: processed under the parent field's key as prefix
//! - **Every problem at once**: conversion and missing-value errors are
//!   collected into one [`MultiError`]
//!
//! # Example
//!
//! ```rust
//! use envconfig::Envconfig;
//!
//! #[derive(Debug, Default, Envconfig)]
//! struct Config {
//!     #[envconfig(key = "host", required = "true")]
//!     pub host: String,
//!
//!     #[envconfig(key = "port", default = "8080")]
//!     pub port: u16,
//!
//!     // Not read from the environment
//!     pub retries: u32,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("MYAPP_HOST", "localhost");
//! let mut config = Config::default();
//! envconfig::process("myapp", &mut config)?; // reads MYAPP_HOST and MYAPP_PORT
//! #     assert_eq!(config.host, "localhost");
//! #     assert_eq!(config.port, 8080);
//! #     Ok(())
//! # }
//! ```
//!
//! # Value Parsing
//!
//! | Field type | Accepted values |
//! |---|---|
//! | `String` | anything, verbatim |
//! | `i8`..`i64`, `isize` | `42`, `-42`, `0x2A`, `052`, `0o52`, `0b101010`, `1_000` |
//! | `u8`..`u64`, `usize` | as above, without a sign |
//! | `bool` | `1 t T TRUE true True`, `0 f F FALSE false False` |
//! | `f32`, `f64` | `3.14`, `1e-3`, `inf`, `NaN` |
//! | `Option<Url>` | absolute URLs; anything else leaves the field as is |
//! | `#[derive(Envconfig)]` struct | nested, see below |
//!
//! Values that do not fit the field's width (`300` for a `u8`) are errors.
//!
//! # Attributes
//!
//! ## `#[envconfig(key = "suffix")]`
//!
//! Opts the field in. Fields without a key are never touched.
//!
//! ## `#[envconfig(default = "value")]`
//!
//! Used when the variable is unset or empty. Number and bool literals are
//! accepted too: `default = 8080`.
//!
//! ## `#[envconfig(required = "true")]`
//!
//! Report [`FieldError::Required`] when no value resolves. Only the literal
//! `"true"` counts; `required` on its own is shorthand for it.
//!
//! ## Nested structs
//!
//! A field whose type derives `Envconfig` is processed with the field's key
//! as the new prefix. The field is replaced by a freshly processed
//! `Default::default()` value, so a struct used as a nested field must also
//! implement `Default`. Top-level targets need not.
//!
//! ```rust
//! use envconfig::Envconfig;
//!
//! #[derive(Default, Envconfig)]
//! struct Database {
//!     #[envconfig(key = "host")]
//!     pub host: String,
//! }
//!
//! #[derive(Default, Envconfig)]
//! struct Config {
//!     #[envconfig(key = "db")]
//!     pub db: Database,
//! }
//!
//! # std::env::set_var("SHOP_DB_HOST", "db.internal");
//! let mut config = Config::default();
//! envconfig::process("shop", &mut config).unwrap(); // reads SHOP_DB_HOST
//! # assert_eq!(config.db.host, "db.internal");
//! ```
//!
//! # Errors
//!
//! Only structs can be processed. Anything else is rejected at compile time:
//!
//! ```compile_fail
//! let mut port = 5_i32;
//! envconfig::process("app", &mut port).unwrap();
//! ```
//!
//! ```compile_fail
//! #[derive(envconfig::Envconfig)]
//! enum Mode {
//!     Fast,
//!     Slow,
//! }
//! ```

mod de;
mod error;
mod field;
mod processor;

pub use envconfig_derive::Envconfig;
pub use error::{FieldError, MultiError};
pub use field::{Field, Nested, Settable, Slot, Specification};
pub use processor::Processor;
pub use url::Url;

/// Populate `spec` from the process environment.
///
/// Shorthand for [`Processor::new`] followed by [`Processor::process`].
///
/// # Errors
///
/// Returns every [`FieldError`] found, in field declaration order.
pub fn process<T>(prefix: &str, spec: &mut T) -> Result<(), MultiError>
where
    T: Specification + ?Sized,
{
    Processor::new().process(prefix, spec)
}
