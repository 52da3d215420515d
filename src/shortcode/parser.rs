//! Shortcode token parsing
//!
//! Tokens look like `[tag id="footer" class='wide' align=left]`. Attributes
//! are parsed into a string-keyed map; values may be double-quoted,
//! single-quoted, or bare. Bare words without `=` carry no key and are
//! skipped.

use std::collections::HashMap;

/// String-keyed attribute map handed to shortcode handlers
pub type ShortcodeAttrs = HashMap<String, String>;

/// Returns true for characters allowed in a shortcode tag name
pub(crate) fn is_tag_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Parses the attribute section of a shortcode token
pub fn parse_attrs(input: &str) -> ShortcodeAttrs {
    let mut attrs = ShortcodeAttrs::new();
    let mut rest = input.trim_start();

    while !rest.is_empty() {
        // key runs up to '=' or whitespace
        let key_end = rest
            .find(|c: char| c == '=' || c.is_whitespace())
            .unwrap_or(rest.len());
        let key = &rest[..key_end];
        rest = &rest[key_end..];

        if let Some(after_eq) = rest.strip_prefix('=') {
            let (value, remainder) = take_value(after_eq);
            if !key.is_empty() {
                attrs.insert(key.to_lowercase(), value.to_string());
            }
            rest = remainder;
        }
        // A bare word without '=' is dropped

        rest = rest.trim_start();
    }

    attrs
}

/// Takes one attribute value off the front of the input, honoring quotes
fn take_value(input: &str) -> (&str, &str) {
    if let Some(quoted) = input.strip_prefix('"') {
        match quoted.find('"') {
            Some(end) => (&quoted[..end], &quoted[end + 1..]),
            None => (quoted, ""),
        }
    } else if let Some(quoted) = input.strip_prefix('\'') {
        match quoted.find('\'') {
            Some(end) => (&quoted[..end], &quoted[end + 1..]),
            None => (quoted, ""),
        }
    } else {
        let end = input
            .find(|c: char| c.is_whitespace())
            .unwrap_or(input.len());
        (&input[..end], &input[end..])
    }
}
