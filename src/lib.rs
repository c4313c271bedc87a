//! # tomlify
//!
//! A serialization library that renders dynamic value trees and
//! `serde`-serializable Rust types as TOML configuration text.
//!
//! ## What does it do?
//!
//! `tomlify` is a one-way serializer: values in, TOML out. It turns nested
//! mappings, arrays, and scalars into assignment lines, inline arrays, and
//! dotted `[section]` headers in a single recursive pass. There is no
//! parser and no file I/O; the entire surface is "give me a value, get back
//! a string".
//!
//! ## Key Features
//!
//! - **Insertion-order output**: tables remember the order keys were added,
//!   and the document reflects it — assignments first, sections after, each
//!   group in author order
//! - **Serde Compatible**: works with existing Rust types via
//!   `#[derive(Serialize)]`
//! - **Dynamic Values**: build documents at runtime with [`TomlValue`] and
//!   the [`toml!`] macro
//! - **Never fails by default**: values the format cannot express are
//!   dropped silently; an opt-in strict mode rejects them instead
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tomlify = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Serializing a struct
//!
//! ```rust
//! use serde::Serialize;
//! use tomlify::to_string;
//!
//! #[derive(Serialize)]
//! struct Server {
//!     host: String,
//!     port: u16,
//! }
//!
//! #[derive(Serialize)]
//! struct Config {
//!     title: String,
//!     debug: bool,
//!     server: Server,
//! }
//!
//! let config = Config {
//!     title: "demo".to_string(),
//!     debug: false,
//!     server: Server {
//!         host: "localhost".to_string(),
//!         port: 8080,
//!     },
//! };
//!
//! let toml = to_string(&config).unwrap();
//! assert_eq!(
//!     toml,
//!     "title = 'demo'\ndebug = false\n\n[server]\nhost = 'localhost'\nport = 8080\n"
//! );
//! ```
//!
//! ### Dynamic documents with the toml! macro
//!
//! ```rust
//! use tomlify::{toml, to_string};
//!
//! let doc = toml!({
//!     "name": "alice",
//!     "tags": ["admin", "ops"],
//!     "limits": { "rps": 50 }
//! });
//!
//! let out = to_string(&doc).unwrap();
//! assert_eq!(
//!     out,
//!     "name = 'alice'\ntags = [ 'admin', 'ops' ]\n\n[limits]\nrps = 50\n"
//! );
//! ```
//!
//! ### Datetimes
//!
//! [`TomlValue::Datetime`] renders unquoted in ISO-8601 form. Build it
//! directly (or via `From<DateTime<Utc>>`); a `chrono` field inside a
//! derived struct serializes through serde as a plain — quoted — string.
//!
//! ```rust
//! use chrono::TimeZone;
//! use tomlify::{to_string, TomlMap, TomlValue};
//!
//! let mut doc = TomlMap::new();
//! let born = chrono::Utc.with_ymd_and_hms(1979, 5, 27, 7, 32, 0).unwrap();
//! doc.insert("born".to_string(), TomlValue::from(born));
//!
//! let out = to_string(&TomlValue::Table(doc)).unwrap();
//! assert_eq!(out, "born = 1979-05-27T07:32:00.000Z\n");
//! ```
//!
//! ## Format Reference
//!
//! The emitted dialect — quoting ladder, array padding, inline tables,
//! section-header rules, and the deliberate quirks of each — is documented
//! in the [`format`] module.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Proper error propagation with `Result` types
//! - The default (lenient) rendering path returns `Ok` for every value
//!   shape; only strict mode, serde ingestion, and writers can fail

pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use map::TomlMap;
pub use options::TomlOptions;
pub use ser::{Serializer, TomlValueSerializer};
pub use value::{Number, TomlValue};

use serde::Serialize;
use std::io;

/// Serialize any `T: Serialize` to a TOML string.
///
/// # Examples
///
/// ```rust
/// use tomlify::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// let toml = to_string(&point).unwrap();
/// assert_eq!(toml, "x = 1\ny = 2\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be converted into a [`TomlValue`]
/// (e.g., a map with non-string keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, TomlOptions::default())
}

/// Serialize any `T: Serialize` to a TOML string with custom options.
///
/// Options control strictness and the dotted prefix applied to section
/// headers.
///
/// # Examples
///
/// ```rust
/// use tomlify::{to_string_with_options, toml, TomlOptions};
///
/// let doc = toml!({ "limits": { "rps": 50 } });
/// let options = TomlOptions::new().with_table_prefix("server");
/// let out = to_string_with_options(&doc, options).unwrap();
/// assert_eq!(out, "\n[server.limits]\nrps = 50\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be converted into a [`TomlValue`],
/// or, in strict mode, if the tree holds a value the format cannot express.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: TomlOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    let mut serializer = Serializer::new(options);
    serializer.serialize(&value)?;
    Ok(serializer.into_inner())
}

/// Convert any `T: Serialize` to a [`TomlValue`].
///
/// Useful for inspecting or reshaping a document before rendering it.
///
/// # Examples
///
/// ```rust
/// use tomlify::{to_value, TomlValue};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: TomlValue = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_table());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented (non-string map
/// keys, enum variants carrying payloads).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<TomlValue>
where
    T: ?Sized + Serialize,
{
    value.serialize(TomlValueSerializer)
}

/// Serialize any `T: Serialize` to a writer as TOML.
///
/// # Examples
///
/// ```rust
/// use tomlify::to_writer;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Point { x: 1, y: 2 }).unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, TomlOptions::default())
}

/// Serialize any `T: Serialize` to a writer as TOML with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: TomlOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let toml_string = to_string_with_options(value, options)?;
    writer
        .write_all(toml_string.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
