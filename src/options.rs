//! Configuration options for TOML serialization.
//!
//! This module provides [`TomlOptions`], the knobs accepted by the
//! serializer:
//!
//! - `table_prefix`: a dotted path prepended to every section header emitted
//!   at the top level of this call. This is the serializer's own recursion
//!   parameter, exposed for advanced callers that stitch fragments together.
//! - `strict`: whether unrepresentable values fail the call instead of being
//!   dropped silently.
//!
//! ## Examples
//!
//! ```rust
//! use tomlify::{toml, to_string_with_options, TomlOptions};
//!
//! let doc = toml!({ "server": { "port": 8080 } });
//!
//! let options = TomlOptions::new().with_table_prefix("app");
//! let out = to_string_with_options(&doc, options).unwrap();
//! assert!(out.contains("[app.server]"));
//! ```

/// Configuration options for TOML serialization.
///
/// The default is lenient rendering with no header prefix, which never fails
/// for any value shape.
///
/// # Examples
///
/// ```rust
/// use tomlify::TomlOptions;
///
/// // Default lenient options
/// let options = TomlOptions::new();
///
/// // Fail on values the format cannot express
/// let options = TomlOptions::strict();
///
/// // Custom configuration
/// let options = TomlOptions::new()
///     .with_table_prefix("app")
///     .with_strict(true);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TomlOptions {
    /// Dotted path prepended to section headers emitted by this call.
    /// Primarily the serializer's internal recursion hook; leave unset for
    /// whole-document output.
    pub table_prefix: Option<String>,
    /// When `true`, an unrepresentable value (a null assignment, a table
    /// nested inside an inline table) is an error instead of a silent drop.
    pub strict: bool,
}

impl TomlOptions {
    /// Creates default options (lenient, no prefix).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tomlify::TomlOptions;
    ///
    /// let options = TomlOptions::new();
    /// assert!(!options.strict);
    /// assert!(options.table_prefix.is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that reject unrepresentable values with
    /// [`Error::UnsupportedValue`](crate::Error::UnsupportedValue).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tomlify::TomlOptions;
    ///
    /// let options = TomlOptions::strict();
    /// assert!(options.strict);
    /// ```
    #[must_use]
    pub fn strict() -> Self {
        TomlOptions {
            strict: true,
            ..Default::default()
        }
    }

    /// Sets the dotted path prepended to top-level section headers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tomlify::TomlOptions;
    ///
    /// let options = TomlOptions::new().with_table_prefix("app");
    /// assert_eq!(options.table_prefix.as_deref(), Some("app"));
    /// ```
    #[must_use]
    pub fn with_table_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.table_prefix = Some(prefix.into());
        self
    }

    /// Sets strict-mode behavior.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
