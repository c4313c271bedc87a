//! Error types for TOML serialization.
//!
//! The default rendering path is deliberately permissive: any value tree
//! serializes without error, with unrepresentable entries dropped from the
//! output. Errors arise in exactly three places:
//!
//! - **Strict mode**: [`TomlOptions::strict`](fn@crate::TomlOptions::strict)
//!   turns a dropped entry into [`Error::UnsupportedValue`], naming the key.
//! - **Serde ingestion**: converting a Rust value into a
//!   [`TomlValue`](crate::TomlValue) can hit shapes the value model has no
//!   spot for (non-string map keys, enum variants with payloads).
//! - **Writers**: [`to_writer`](crate::to_writer) surfaces I/O failures.
//!
//! ## Examples
//!
//! ```rust
//! use tomlify::{toml, to_string_with_options, Error, TomlOptions};
//!
//! let doc = toml!({ "missing": null });
//! let result = to_string_with_options(&doc, TomlOptions::strict());
//! assert!(matches!(result, Err(Error::UnsupportedValue { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during TOML serialization.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while writing serialized output
    #[error("IO error: {0}")]
    Io(String),

    /// A Rust type the value model cannot represent
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Strict-mode rejection of a value the format cannot express
    #[error("key `{key}` holds a {found} value, which cannot be rendered here")]
    UnsupportedValue { key: String, found: &'static str },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported type error for Rust types that cannot be
    /// converted into a [`TomlValue`](crate::TomlValue).
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a strict-mode rejection for the named key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tomlify::Error;
    ///
    /// let err = Error::unsupported_value("retries", "null");
    /// assert!(err.to_string().contains("retries"));
    /// ```
    pub fn unsupported_value(key: &str, found: &'static str) -> Self {
        Error::UnsupportedValue {
            key: key.to_string(),
            found,
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
