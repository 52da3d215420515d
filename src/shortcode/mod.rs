//! Shortcode expansion
//!
//! Content tokens like `[mysidebar id="footer"]` are the public surface for
//! placing a sidebar in authored text. The pipeline owns scanning and
//! dispatch; the sidebar tag owns slug resolution and delegation to the
//! widget host.

mod parser;
mod pipeline;
mod sidebar_tag;

pub use parser::{parse_attrs, ShortcodeAttrs};
pub use pipeline::{Pipeline, ShortcodeHandler};
pub use sidebar_tag::SidebarShortcode;
