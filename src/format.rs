//! Output Format Reference
//!
//! This module documents the TOML dialect emitted by this library.
//!
//! # Overview
//!
//! The serializer produces configuration-file text from a dynamic value
//! tree in a single recursive pass. Output is built entirely in memory and
//! returned as one string; `\n` is the only line terminator used.
//!
//! # Documents
//!
//! A document is the rendering of a table. Every entry whose value is *not*
//! a table renders as an assignment line; every table-valued entry renders
//! as a `[section]` block. All assignment lines of a table are emitted
//! before its first section, whatever the insertion order was; within each
//! group, insertion order is preserved:
//!
//! ```text
//! title = 'example'
//! debug = false
//!
//! [server]
//! host = 'localhost'
//! port = 8080
//! ```
//!
//! Section headers are always preceded by one blank line (a `\n` emitted
//! before the `[`), including for the first section of the document.
//!
//! ## Nested sections
//!
//! Section headers carry the dotted chain of ancestor table names, root
//! excluded. A table reached through `server` → `limits` → `burst` renders
//! as:
//!
//! ```text
//! [server]
//!
//! [server.limits]
//!
//! [server.limits.burst]
//! ```
//!
//! The serializer's `table_prefix` option seeds this chain, which is how
//! the recursion qualifies child headers; external callers can set it to
//! graft a fragment under an existing path.
//!
//! # Scalars
//!
//! | Type | Rendering | Example |
//! |------|-----------|---------|
//! | Boolean | `true` / `false` | `active = true` |
//! | Number | natural decimal form | `port = 8080`, `ratio = 0.5` |
//! | Datetime | ISO-8601 instant, millisecond precision, unquoted | `born = 1979-05-27T07:32:00.000Z` |
//! | String | quoted, see below | `name = 'alice'` |
//!
//! There is no integer/float distinction in the output; a whole-number
//! float renders without a fractional part.
//!
//! ## String quoting
//!
//! Strings are wrapped, never escaped. The delimiter escalates:
//!
//! 1. `'single quotes'` by default
//! 2. `"double quotes"` if the string contains `'`
//! 3. `"""triple double quotes"""` if the string contains a newline
//!
//! The newline check is independent of the single-quote check and takes
//! precedence: a string containing both renders triple-quoted. Because no
//! escaping is performed, a string that itself embeds `"""` alongside a
//! newline produces an ambiguous literal. This is a known limitation of
//! the format, kept as-is.
//!
//! Inside arrays only steps 1 and 2 apply; a string element containing a
//! newline stays in its single- or double-quoted form with the raw newline
//! embedded.
//!
//! # Arrays
//!
//! Arrays render inline, bracketed and space-padded, elements separated by
//! `, `:
//!
//! ```text
//! ports = [ 8001, 8001, 8002 ]
//! nested = [ [ 1, 2 ], [ 3 ] ]
//! empty = [  ]
//! ```
//!
//! The padding after `[` and before `]` is unconditional, which is why an
//! empty array renders with two interior spaces.
//!
//! Null elements are holes: they are skipped entirely and leave no stray
//! separator, so `[1, null, 3]` renders as `[ 1, 3 ]`.
//!
//! ## Inline tables
//!
//! A table element of an array renders as an inline table, entries in
//! insertion order:
//!
//! ```text
//! points = [ { x = 1, y = 2 }, { x = 3, y = 4 } ]
//! ```
//!
//! Inline-table entries go through the full scalar rendering, including the
//! triple-quote escalation. A table nested *inside* an inline table has no
//! representation and is dropped (or rejected in strict mode).
//!
//! # Unrepresentable values
//!
//! By default the serializer never fails. A value with no rendering at its
//! position — a null assignment, a table inside an inline table — is
//! silently omitted, key and all. With
//! [`TomlOptions::strict`](fn@crate::TomlOptions::strict) the same situations
//! produce [`Error::UnsupportedValue`](crate::Error::UnsupportedValue)
//! naming the offending key. Array holes are skipped in both modes.
//!
//! # Known limits
//!
//! - Rendering recurses as deep as the value tree nests; pathologically
//!   deep inputs can exhaust the call stack. Configuration data is rarely
//!   more than a handful of levels deep, so no trampoline is provided.
//! - Output strings are not escaped; see the quoting ladder above.
//! - Keys are emitted verbatim, with no quoting or validation.
