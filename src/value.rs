//! Dynamic value representation for TOML documents.
//!
//! This module provides the [`TomlValue`] enum which represents any value the
//! serializer knows how to render. It's the type to reach for when the shape
//! of a document isn't known at compile time.
//!
//! ## Core Types
//!
//! - [`TomlValue`]: an enum covering every renderable value (null, bool,
//!   number, string, datetime, array, table)
//! - [`Number`]: a numeric scalar, integer or float
//!
//! The variant of a value is decided once, at construction time. Every
//! formatter in this crate matches exhaustively on [`TomlValue`], so the
//! "can't be rendered here" cases ([`TomlValue::Null`] in an assignment,
//! a nested table inside an inline table) are explicit match arms rather
//! than a fall-through default.
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use tomlify::TomlValue;
//!
//! // From primitives
//! let boolean = TomlValue::from(true);
//! let number = TomlValue::from(42);
//! let text = TomlValue::from("hello");
//!
//! // Using the toml! macro
//! use tomlify::toml;
//! let doc = toml!({
//!     "title": "example",
//!     "port": 8080
//! });
//! ```
//!
//! ### Type Checking and Extraction
//!
//! ```rust
//! use tomlify::TomlValue;
//!
//! let value = TomlValue::from(42);
//! assert!(value.is_number());
//! assert_eq!(value.as_i64(), Some(42));
//!
//! let num: i64 = i64::try_from(value).unwrap();
//! assert_eq!(num, 42);
//! ```

use crate::TomlMap;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

/// Marker name used to carry datetimes through the serde data model.
///
/// Serde has no native datetime type, so [`TomlValue::Datetime`] serializes
/// itself as a newtype struct with this name wrapping an RFC 3339 string.
/// [`TomlValueSerializer`](crate::TomlValueSerializer) recognizes the name
/// and reconstructs the `Datetime` variant instead of a plain string.
pub(crate) const DATETIME_TOKEN: &str = "$__tomlify_private_datetime";

/// A dynamically-typed representation of any renderable TOML value.
///
/// This enum can represent every value the serializer understands, from
/// scalars to nested tables. It's particularly useful when:
///
/// - The document structure isn't known at compile time
/// - Building configuration trees programmatically
/// - A value must carry a datetime that should render unquoted
///
/// # Examples
///
/// ```rust
/// use tomlify::{TomlValue, Number};
///
/// let num = TomlValue::Number(Number::Integer(42));
/// let text = TomlValue::String("hello".to_string());
///
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum TomlValue {
    /// The absent value. A `Null` element of an array is a hole and is
    /// skipped during rendering; a `Null` table entry is dropped (or
    /// rejected in strict mode).
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// A calendar instant. A scalar for classification purposes even though
    /// it carries structure internally.
    Datetime(DateTime<Utc>),
    Array(Vec<TomlValue>),
    Table(TomlMap),
}

/// A numeric scalar, either integer or float.
///
/// The emitted format makes no distinction between the two; both render via
/// their natural decimal form. The split exists so that integer inputs never
/// pick up a spurious fractional representation.
///
/// # Examples
///
/// ```rust
/// use tomlify::Number;
///
/// let integer = Number::Integer(42);
/// let float = Number::Float(3.5);
///
/// assert!(integer.is_integer());
/// assert_eq!(integer.as_i64(), Some(42));
/// assert_eq!(float.as_f64(), 3.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// Returns `Some(i64)` for integers and for floats with no fractional
    /// part that fit in `i64` range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tomlify::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts this number to an `f64`. Always succeeds.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl TomlValue {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, TomlValue::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, TomlValue::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, TomlValue::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, TomlValue::String(_))
    }

    /// Returns `true` if the value is a datetime.
    #[inline]
    #[must_use]
    pub const fn is_datetime(&self) -> bool {
        matches!(self, TomlValue::Datetime(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, TomlValue::Array(_))
    }

    /// Returns `true` if the value is a table.
    #[inline]
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, TomlValue::Table(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TomlValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tomlify::TomlValue;
    ///
    /// assert_eq!(TomlValue::from("hello").as_str(), Some("hello"));
    /// assert_eq!(TomlValue::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TomlValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer or a whole-number float, returns it as `i64`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            TomlValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a number, returns it as `f64`. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TomlValue::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// If the value is a datetime, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            TomlValue::Datetime(dt) => Some(dt),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<TomlValue>> {
        match self {
            TomlValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is a table, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_table(&self) -> Option<&TomlMap> {
        match self {
            TomlValue::Table(table) => Some(table),
            _ => None,
        }
    }

    /// A short name for the variant, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            TomlValue::Null => "null",
            TomlValue::Bool(_) => "boolean",
            TomlValue::Number(_) => "number",
            TomlValue::String(_) => "string",
            TomlValue::Datetime(_) => "datetime",
            TomlValue::Array(_) => "array",
            TomlValue::Table(_) => "table",
        }
    }
}

/// Diagnostic rendering of a value, not TOML output.
///
/// Strings print raw and tables collapse to a placeholder; use
/// [`to_string`](crate::to_string) or a [`Serializer`](crate::Serializer)
/// for real document output.
impl fmt::Display for TomlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TomlValue::Null => Ok(()),
            TomlValue::Bool(b) => write!(f, "{}", b),
            TomlValue::Number(n) => write!(f, "{}", n),
            TomlValue::String(s) => write!(f, "{}", s),
            TomlValue::Datetime(dt) => write!(
                f,
                "{}",
                dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
            ),
            TomlValue::Array(arr) => {
                write!(
                    f,
                    "[{}]",
                    arr.iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
            TomlValue::Table(table) => write!(f, "{{table:{}}}", table.len()),
        }
    }
}

impl Serialize for TomlValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TomlValue::Null => serializer.serialize_unit(),
            TomlValue::Bool(b) => serializer.serialize_bool(*b),
            TomlValue::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            TomlValue::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            TomlValue::String(s) => serializer.serialize_str(s),
            TomlValue::Datetime(dt) => {
                serializer.serialize_newtype_struct(DATETIME_TOKEN, &dt.to_rfc3339())
            }
            TomlValue::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            TomlValue::Table(table) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(table.len()))?;
                for (k, v) in table.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

// TryFrom implementations for extracting values from TomlValue
impl TryFrom<TomlValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: TomlValue) -> crate::Result<Self> {
        match value {
            TomlValue::Number(Number::Integer(i)) => Ok(i),
            TomlValue::Number(Number::Float(f)) => {
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                    Ok(f as i64)
                } else {
                    Err(crate::Error::custom(format!(
                        "cannot convert float {} to i64",
                        f
                    )))
                }
            }
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {}",
                value.kind()
            ))),
        }
    }
}

impl TryFrom<TomlValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: TomlValue) -> crate::Result<Self> {
        match value {
            TomlValue::Number(n) => Ok(n.as_f64()),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {}",
                value.kind()
            ))),
        }
    }
}

impl TryFrom<TomlValue> for bool {
    type Error = crate::Error;

    fn try_from(value: TomlValue) -> crate::Result<Self> {
        match value {
            TomlValue::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {}",
                value.kind()
            ))),
        }
    }
}

impl TryFrom<TomlValue> for String {
    type Error = crate::Error;

    fn try_from(value: TomlValue) -> crate::Result<Self> {
        match value {
            TomlValue::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {}",
                value.kind()
            ))),
        }
    }
}

// From implementations for creating TomlValue from primitives
impl From<bool> for TomlValue {
    fn from(value: bool) -> Self {
        TomlValue::Bool(value)
    }
}

impl From<Number> for TomlValue {
    fn from(value: Number) -> Self {
        TomlValue::Number(value)
    }
}

impl From<i8> for TomlValue {
    fn from(value: i8) -> Self {
        TomlValue::Number(Number::Integer(value as i64))
    }
}

impl From<i16> for TomlValue {
    fn from(value: i16) -> Self {
        TomlValue::Number(Number::Integer(value as i64))
    }
}

impl From<i32> for TomlValue {
    fn from(value: i32) -> Self {
        TomlValue::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for TomlValue {
    fn from(value: i64) -> Self {
        TomlValue::Number(Number::Integer(value))
    }
}

impl From<u8> for TomlValue {
    fn from(value: u8) -> Self {
        TomlValue::Number(Number::Integer(value as i64))
    }
}

impl From<u16> for TomlValue {
    fn from(value: u16) -> Self {
        TomlValue::Number(Number::Integer(value as i64))
    }
}

impl From<u32> for TomlValue {
    fn from(value: u32) -> Self {
        TomlValue::Number(Number::Integer(value as i64))
    }
}

impl From<f32> for TomlValue {
    fn from(value: f32) -> Self {
        TomlValue::Number(Number::Float(value as f64))
    }
}

impl From<f64> for TomlValue {
    fn from(value: f64) -> Self {
        TomlValue::Number(Number::Float(value))
    }
}

impl From<String> for TomlValue {
    fn from(value: String) -> Self {
        TomlValue::String(value)
    }
}

impl From<&str> for TomlValue {
    fn from(value: &str) -> Self {
        TomlValue::String(value.to_string())
    }
}

impl From<DateTime<Utc>> for TomlValue {
    fn from(value: DateTime<Utc>) -> Self {
        TomlValue::Datetime(value)
    }
}

impl From<Vec<TomlValue>> for TomlValue {
    fn from(value: Vec<TomlValue>) -> Self {
        TomlValue::Array(value)
    }
}

impl From<TomlMap> for TomlValue {
    fn from(value: TomlMap) -> Self {
        TomlValue::Table(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_tryfrom_i64() {
        let value = TomlValue::Number(Number::Integer(42));
        let result: i64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42);

        let value = TomlValue::Number(Number::Float(42.0));
        let result: i64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42);

        let value = TomlValue::String("test".to_string());
        assert!(i64::try_from(value).is_err());
    }

    #[test]
    fn test_tryfrom_f64() {
        let value = TomlValue::Number(Number::Float(3.5));
        let result: f64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 3.5);

        let value = TomlValue::Number(Number::Integer(42));
        let result: f64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42.0);
    }

    #[test]
    fn test_tryfrom_bool_and_string() {
        let value = TomlValue::Bool(true);
        let result: bool = TryFrom::try_from(value).unwrap();
        assert!(result);
        assert!(bool::try_from(TomlValue::from(1)).is_err());

        let value = TomlValue::String("hello".to_string());
        let result: String = TryFrom::try_from(value).unwrap();
        assert_eq!(result, "hello");
        assert!(String::try_from(TomlValue::from(42)).is_err());
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(TomlValue::from(true), TomlValue::Bool(true));
        assert_eq!(
            TomlValue::from(42i32),
            TomlValue::Number(Number::Integer(42))
        );
        assert_eq!(
            TomlValue::from(3.5f64),
            TomlValue::Number(Number::Float(3.5))
        );
        assert_eq!(
            TomlValue::from("test"),
            TomlValue::String("test".to_string())
        );
    }

    #[test]
    fn test_from_datetime() {
        let dt = Utc.with_ymd_and_hms(1979, 5, 27, 7, 32, 0).unwrap();
        let value = TomlValue::from(dt);
        assert!(value.is_datetime());
        assert_eq!(value.as_datetime(), Some(&dt));
    }

    #[test]
    fn test_from_collections() {
        let vec = vec![TomlValue::from(1i32), TomlValue::from(2i32)];
        let value = TomlValue::from(vec.clone());
        assert_eq!(value, TomlValue::Array(vec));

        let mut table = TomlMap::new();
        table.insert("key".to_string(), TomlValue::from(42i32));
        let value = TomlValue::from(table.clone());
        assert_eq!(value, TomlValue::Table(table));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TomlValue::Null.kind(), "null");
        assert_eq!(TomlValue::from(1).kind(), "number");
        assert_eq!(TomlValue::from("x").kind(), "string");
        assert_eq!(TomlValue::Table(TomlMap::new()).kind(), "table");
    }

    #[test]
    fn test_number_accessors() {
        let num = Number::Integer(42);
        assert!(num.is_integer());
        assert!(!num.is_float());
        assert_eq!(num.as_i64(), Some(42));
        assert_eq!(num.as_f64(), 42.0);
        assert_eq!(Number::Float(42.5).as_i64(), None);
    }
}
