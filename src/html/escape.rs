//! HTML escaping.
//!
//! One escape table for both text nodes and attribute values: `&`, `<`, `>`,
//! `"`, `'`. Attribute values are always double-quoted by the serializer, but
//! single quotes are escaped too so fragments stay safe when pasted into
//! single-quoted contexts.

use std::borrow::Cow;

/// Return `true` if the byte needs escaping in HTML output.
fn needs_escape(b: u8) -> bool {
    matches!(b, b'&' | b'<' | b'>' | b'"' | b'\'')
}

/// HTML-escape a string, borrowing when no escaping is needed.
pub fn escape(input: &str) -> Cow<'_, str> {
    if input.bytes().any(needs_escape) {
        let mut out = String::with_capacity(input.len() + 8);
        escape_into(&mut out, input);
        Cow::Owned(out)
    } else {
        Cow::Borrowed(input)
    }
}

/// Append the escaped form of `input` to `out`.
///
/// Used by the serializer to avoid intermediate allocations.
pub fn escape_into(out: &mut String, input: &str) {
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
