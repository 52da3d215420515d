//! Content pipeline
//!
//! Scans authored content for `[tag ...]` tokens and dispatches registered
//! tags to their handlers. Unregistered tags pass through literally, so the
//! pipeline is safe to run over arbitrary prose. A registered tag whose
//! handler yields nothing is blanked, not left in place.

use std::collections::HashMap;

use anyhow::Result;

use super::parser::{is_tag_char, parse_attrs, ShortcodeAttrs};

/// A handler invoked for one shortcode tag.
///
/// `Ok(None)` means "nothing to render" and blanks the token; errors abort
/// the whole expansion.
pub trait ShortcodeHandler {
    fn render(&self, attrs: &ShortcodeAttrs) -> Result<Option<String>>;
}

/// Registered shortcode handlers keyed by tag name
#[derive(Default)]
pub struct Pipeline<'a> {
    handlers: HashMap<String, Box<dyn ShortcodeHandler + 'a>>,
}

impl<'a> Pipeline<'a> {
    /// Creates a pipeline with no registered tags
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler under a tag name, replacing any previous handler
    pub fn register(&mut self, tag: impl Into<String>, handler: impl ShortcodeHandler + 'a) {
        self.handlers.insert(tag.into(), Box::new(handler));
    }

    /// Expands every registered token in the content
    pub fn expand(&self, content: &str) -> Result<String> {
        let mut out = String::with_capacity(content.len());
        let mut rest = content;

        while let Some(open) = rest.find('[') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];

            let tag_end = after.find(|c: char| !is_tag_char(c)).unwrap_or(after.len());
            let tag = &after[..tag_end];

            // The tag must be registered and delimited by whitespace or ']'
            let delimited = after[tag_end..]
                .chars()
                .next()
                .is_none_or(|c| c == ']' || c.is_whitespace());

            let handler = if delimited { self.handlers.get(tag) } else { None };

            let (Some(handler), Some(close)) = (handler, after.find(']')) else {
                out.push('[');
                rest = after;
                continue;
            };

            let attrs = parse_attrs(&after[tag_end..close]);
            if let Some(markup) = handler.render(&attrs)? {
                out.push_str(&markup);
            }
            rest = &after[close + 1..];
        }

        out.push_str(rest);
        Ok(out)
    }
}
