//! TOML serialization.
//!
//! This module provides the [`Serializer`] that renders a
//! [`TomlValue`] tree into TOML text, and [`TomlValueSerializer`], the
//! `serde::Serializer` that converts any `T: Serialize` into a
//! [`TomlValue`] tree first.
//!
//! ## Rendering model
//!
//! Rendering is a single depth-first pass over the value tree:
//!
//! - Within a table, every scalar- and array-valued key is emitted as a
//!   `key = value` assignment line before any child table is emitted as a
//!   `[section]`, regardless of how the two kinds were interleaved at
//!   insertion time. Relative order inside each group is insertion order.
//! - Section headers carry the full dotted path of ancestor table names
//!   (`[server.limits.burst]`), accumulated as recursion descends.
//! - Arrays render inline, space-padded: `[ 1, 2, 3 ]`. Tables inside
//!   arrays render as inline tables: `{ sku = 'A-1', qty = 2 }`.
//!
//! The default mode never fails: values the format cannot express (a null
//! assignment, a table nested inside an inline table) are dropped from the
//! output. [`TomlOptions::strict`](fn@crate::TomlOptions::strict) turns those
//! drops into [`Error::UnsupportedValue`] instead.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use tomlify::to_string;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Server { host: String, port: u16 }
//!
//! let server = Server { host: "localhost".to_string(), port: 8080 };
//! let toml = to_string(&server).unwrap();
//! assert_eq!(toml, "host = 'localhost'\nport = 8080\n");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! For dynamic trees, or to supply a header prefix, drive the serializer
//! directly:
//!
//! ```rust
//! use tomlify::{toml, Serializer, TomlOptions};
//!
//! let doc = toml!({ "limits": { "burst": 10 } });
//!
//! let mut serializer = Serializer::new(TomlOptions::new().with_table_prefix("server"));
//! serializer.serialize(&doc).unwrap();
//! assert_eq!(serializer.into_inner(), "\n[server.limits]\nburst = 10\n");
//! ```

use crate::value::DATETIME_TOKEN;
use crate::{Error, Number, Result, TomlMap, TomlOptions, TomlValue};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{ser, Serialize};

/// The TOML serializer.
///
/// Owns the output buffer and the rendering options. Fragments are appended
/// during a single depth-first traversal and handed back by
/// [`into_inner`](Serializer::into_inner); no state survives between
/// [`serialize`](Serializer::serialize) calls beyond the accumulated text.
pub struct Serializer {
    output: String,
    options: TomlOptions,
}

impl Serializer {
    pub fn new(options: TomlOptions) -> Self {
        // Pre-allocate with reasonable capacity to reduce reallocations
        // 256 bytes is a good starting point for typical documents
        Serializer {
            output: String::with_capacity(256),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Renders a value into the output buffer.
    ///
    /// A table renders as a document body: assignments first, then
    /// `[section]` blocks for child tables, with
    /// [`table_prefix`](crate::TomlOptions::table_prefix) prepended to
    /// every header path. Any other value renders as a bare literal with no
    /// `key = ` prefix and no newline — a degenerate form, but a defined
    /// one.
    ///
    /// # Errors
    ///
    /// Only in strict mode, when the tree holds a value the format cannot
    /// express at its position.
    pub fn serialize(&mut self, value: &TomlValue) -> Result<()> {
        match value {
            TomlValue::Table(table) => {
                let prefix = self.options.table_prefix.clone().unwrap_or_default();
                self.write_table_body(table, &prefix)
            }
            other => match self.scalar_literal(other)? {
                Some(literal) => {
                    self.output.push_str(&literal);
                    Ok(())
                }
                None if self.options.strict => {
                    Err(Error::custom("bare null value cannot be rendered"))
                }
                None => Ok(()),
            },
        }
    }

    /// Emits the body of one table: assignment lines for every non-table
    /// entry, then a section per child table, each group in insertion order.
    fn write_table_body(&mut self, table: &TomlMap, prefix: &str) -> Result<()> {
        for (key, value) in table.iter() {
            if value.is_table() {
                continue;
            }
            match self.scalar_literal(value)? {
                Some(literal) => {
                    self.output.push_str(key);
                    self.output.push_str(" = ");
                    self.output.push_str(&literal);
                    self.output.push('\n');
                }
                None if self.options.strict => {
                    return Err(Error::unsupported_value(key, value.kind()));
                }
                None => {}
            }
        }

        for (key, value) in table.iter() {
            if let TomlValue::Table(child) = value {
                let header = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                self.output.push('\n');
                self.output.push('[');
                self.output.push_str(&header);
                self.output.push_str("]\n");
                // The child inherits the full header path, so deeper tables
                // come out fully qualified.
                self.write_table_body(child, &header)?;
            }
        }

        Ok(())
    }

    /// Renders a value for an assignment or inline-table position.
    ///
    /// Returns `Ok(None)` for the two shapes that have no literal form
    /// here: `Null` and nested tables.
    fn scalar_literal(&self, value: &TomlValue) -> Result<Option<String>> {
        match value {
            TomlValue::Null | TomlValue::Table(_) => Ok(None),
            TomlValue::Bool(b) => Ok(Some(b.to_string())),
            TomlValue::Number(n) => Ok(Some(n.to_string())),
            TomlValue::String(s) => Ok(Some(quote_string(s, true))),
            TomlValue::Datetime(dt) => Ok(Some(format_datetime(dt))),
            TomlValue::Array(elements) => Ok(Some(self.array_literal(elements)?)),
        }
    }

    /// Renders `[ e1, e2 ]` with unconditional single-space padding; an
    /// array with no rendered elements is `[  ]`.
    fn array_literal(&self, elements: &[TomlValue]) -> Result<String> {
        let mut rendered: Vec<String> = Vec::with_capacity(elements.len());
        for element in elements {
            match element {
                // Holes contribute nothing, separator included.
                TomlValue::Null => continue,
                TomlValue::Table(table) => rendered.push(self.inline_table_literal(table)?),
                TomlValue::Array(nested) => rendered.push(self.array_literal(nested)?),
                // Inside arrays the multiline escalation does not apply;
                // strings only switch between single and double quotes.
                TomlValue::String(s) => rendered.push(quote_string(s, false)),
                TomlValue::Bool(b) => rendered.push(b.to_string()),
                TomlValue::Number(n) => rendered.push(n.to_string()),
                TomlValue::Datetime(dt) => rendered.push(format_datetime(dt)),
            }
        }
        Ok(format!("[ {} ]", rendered.join(", ")))
    }

    /// Renders a table element of an array as `{ k = v, k = v }`.
    fn inline_table_literal(&self, table: &TomlMap) -> Result<String> {
        let mut entries: Vec<String> = Vec::with_capacity(table.len());
        for (key, value) in table.iter() {
            match self.scalar_literal(value)? {
                Some(literal) => entries.push(format!("{} = {}", key, literal)),
                None if self.options.strict => {
                    return Err(Error::unsupported_value(key, value.kind()));
                }
                None => {}
            }
        }
        Ok(format!("{{ {} }}", entries.join(", ")))
    }
}

/// Picks quote delimiters for a string literal.
///
/// Single quotes by default; double quotes when the string contains a
/// single quote; triple double quotes when it contains a newline and the
/// position allows multiline literals. The newline check wins over the
/// single-quote check, so a string holding both still comes out
/// triple-quoted — which is unsafe if it also embeds `"""`. That is a
/// documented limitation of the format, not something this function papers
/// over. No characters are escaped.
fn quote_string(s: &str, multiline_ok: bool) -> String {
    let quote = if multiline_ok && s.contains('\n') {
        "\"\"\""
    } else if s.contains('\'') {
        "\""
    } else {
        "'"
    };
    format!("{}{}{}", quote, s, quote)
}

/// ISO-8601 extended instant with millisecond precision: `1979-05-27T07:32:00.000Z`.
fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Converts any `T: Serialize` into a [`TomlValue`].
fn to_toml_value<T>(value: &T) -> Result<TomlValue>
where
    T: ?Sized + Serialize,
{
    value.serialize(TomlValueSerializer)
}

/// A `serde::Serializer` whose output is a [`TomlValue`] tree.
///
/// This is the ingestion half of the crate: it maps the serde data model
/// onto the closed [`TomlValue`] variant set once, so the renderer can
/// match exhaustively instead of probing types at every step. `None` and
/// unit become [`TomlValue::Null`]; sequences become arrays; maps and
/// structs become tables keyed in field order.
pub struct TomlValueSerializer;

pub struct SerializeVec {
    vec: Vec<TomlValue>,
}

pub struct SerializeTable {
    table: TomlMap,
    current_key: Option<String>,
}

impl ser::Serializer for TomlValueSerializer {
    type Ok = TomlValue;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeTable;
    type SerializeStruct = SerializeTable;
    type SerializeStructVariant = SerializeTable;

    fn serialize_bool(self, v: bool) -> Result<TomlValue> {
        Ok(TomlValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<TomlValue> {
        Ok(TomlValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i16(self, v: i16) -> Result<TomlValue> {
        Ok(TomlValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i32(self, v: i32) -> Result<TomlValue> {
        Ok(TomlValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i64(self, v: i64) -> Result<TomlValue> {
        Ok(TomlValue::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<TomlValue> {
        Ok(TomlValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u16(self, v: u16) -> Result<TomlValue> {
        Ok(TomlValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u32(self, v: u32) -> Result<TomlValue> {
        Ok(TomlValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u64(self, v: u64) -> Result<TomlValue> {
        if v <= i64::MAX as u64 {
            Ok(TomlValue::Number(Number::Integer(v as i64)))
        } else {
            Ok(TomlValue::Number(Number::Float(v as f64)))
        }
    }

    fn serialize_f32(self, v: f32) -> Result<TomlValue> {
        Ok(TomlValue::Number(Number::Float(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<TomlValue> {
        Ok(TomlValue::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<TomlValue> {
        Ok(TomlValue::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<TomlValue> {
        Ok(TomlValue::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<TomlValue> {
        let vec = v
            .iter()
            .map(|&b| TomlValue::Number(Number::Integer(b as i64)))
            .collect();
        Ok(TomlValue::Array(vec))
    }

    fn serialize_none(self) -> Result<TomlValue> {
        Ok(TomlValue::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<TomlValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<TomlValue> {
        Ok(TomlValue::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<TomlValue> {
        Ok(TomlValue::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<TomlValue> {
        Ok(TomlValue::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<TomlValue>
    where
        T: ?Sized + Serialize,
    {
        if name == DATETIME_TOKEN {
            // TomlValue::Datetime routes itself through this marker name;
            // rebuild the variant instead of keeping a quoted string.
            return match value.serialize(TomlValueSerializer)? {
                TomlValue::String(s) => DateTime::parse_from_rfc3339(&s)
                    .map(|dt| TomlValue::Datetime(dt.with_timezone(&Utc)))
                    .map_err(|e| Error::custom(format!("invalid RFC 3339 datetime: {}", e))),
                other => Err(Error::custom(format!(
                    "datetime marker wrapped a {} value",
                    other.kind()
                ))),
            };
        }
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<TomlValue>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type("newtype variants"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeVec> {
        Err(Error::unsupported_type("tuple variants"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeTable> {
        Ok(SerializeTable::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeTable> {
        Ok(SerializeTable::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeTable> {
        Err(Error::unsupported_type("struct variants"))
    }
}

impl SerializeVec {
    fn new() -> Self {
        SerializeVec { vec: Vec::new() }
    }
}

impl SerializeTable {
    fn new() -> Self {
        SerializeTable {
            table: TomlMap::new(),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = TomlValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_toml_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<TomlValue> {
        Ok(TomlValue::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = TomlValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_toml_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<TomlValue> {
        Ok(TomlValue::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = TomlValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_toml_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<TomlValue> {
        Ok(TomlValue::Array(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = TomlValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_toml_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<TomlValue> {
        Ok(TomlValue::Array(self.vec))
    }
}

impl ser::SerializeMap for SerializeTable {
    type Ok = TomlValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_toml_value(key)? {
            TomlValue::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            _ => Err(Error::custom("map keys must be strings")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.table.insert(key, to_toml_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<TomlValue> {
        Ok(TomlValue::Table(self.table))
    }
}

impl ser::SerializeStruct for SerializeTable {
    type Ok = TomlValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.table.insert(key.to_string(), to_toml_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<TomlValue> {
        Ok(TomlValue::Table(self.table))
    }
}

impl ser::SerializeStructVariant for SerializeTable {
    type Ok = TomlValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.table.insert(key.to_string(), to_toml_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<TomlValue> {
        Ok(TomlValue::Table(self.table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn render(value: &TomlValue) -> String {
        let mut serializer = Serializer::new(TomlOptions::default());
        serializer.serialize(value).unwrap();
        serializer.into_inner()
    }

    #[test]
    fn test_quote_selection() {
        assert_eq!(quote_string("plain", true), "'plain'");
        assert_eq!(quote_string("it's", true), "\"it's\"");
        assert_eq!(quote_string("a\nb", true), "\"\"\"a\nb\"\"\"");
        // Newline wins over the embedded single quote.
        assert_eq!(quote_string("it's\nhere", true), "\"\"\"it's\nhere\"\"\"");
        // Array positions never escalate to triple quotes.
        assert_eq!(quote_string("a\nb", false), "'a\nb'");
    }

    #[test]
    fn test_datetime_format() {
        let dt = Utc.with_ymd_and_hms(1979, 5, 27, 7, 32, 0).unwrap();
        assert_eq!(format_datetime(&dt), "1979-05-27T07:32:00.000Z");
    }

    #[test]
    fn test_bare_scalar_root() {
        assert_eq!(render(&TomlValue::from(42)), "42");
        assert_eq!(render(&TomlValue::from("hi")), "'hi'");
        assert_eq!(render(&TomlValue::Null), "");
    }

    #[test]
    fn test_empty_array_padding() {
        let mut table = TomlMap::new();
        table.insert("k".to_string(), TomlValue::Array(vec![]));
        assert_eq!(render(&TomlValue::Table(table)), "k = [  ]\n");
    }

    #[test]
    fn test_to_toml_value_datetime_token() {
        let dt = Utc.with_ymd_and_hms(1979, 5, 27, 7, 32, 0).unwrap();
        let value = to_toml_value(&TomlValue::Datetime(dt)).unwrap();
        assert_eq!(value, TomlValue::Datetime(dt));
    }
}
