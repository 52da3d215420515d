//! Sidebar shortcode handler
//!
//! The dispatcher between content and the widget host: the token's `id`
//! attribute is a slug, resolved through the registry to a sidebar id, and
//! the registered container is rendered in place of the token.

use anyhow::Result;

use crate::storage::SidebarRegistry;
use crate::widgets::ContainerHost;

use super::parser::ShortcodeAttrs;
use super::pipeline::ShortcodeHandler;

/// Shortcode that renders a custom sidebar by slug
pub struct SidebarShortcode<'a> {
    registry: &'a SidebarRegistry,
    host: &'a dyn ContainerHost,
}

impl<'a> SidebarShortcode<'a> {
    pub fn new(registry: &'a SidebarRegistry, host: &'a dyn ContainerHost) -> Self {
        Self { registry, host }
    }
}

impl ShortcodeHandler for SidebarShortcode<'_> {
    fn render(&self, attrs: &ShortcodeAttrs) -> Result<Option<String>> {
        let slug = match attrs.get("id") {
            Some(slug) => slug,
            None => return Ok(None),
        };

        let id = match self.registry.find_by_slug(slug)? {
            Some(id) => id,
            None => return Ok(None),
        };

        Ok(self.host.render_container(&id))
    }
}
