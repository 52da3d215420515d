//! In-process widget host
//!
//! [`ThemeHost`] is the concrete [`ContainerHost`] the CLI renders with:
//! registered container configs plus widget placements supplied by the
//! caller. Widgets themselves are opaque title/content pairs; this host
//! only wraps them in the container's configured markup.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::SidebarId;

use super::container::{ContainerConfig, ContainerHost};

/// A content unit placed inside a container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    /// Optional heading, wrapped in the container's title markup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Raw markup body
    pub content: String,
}

/// Container host holding registrations and widget placements in memory
#[derive(Default)]
pub struct ThemeHost {
    containers: HashMap<SidebarId, ContainerConfig>,
    placements: HashMap<SidebarId, Vec<Widget>>,
}

impl ThemeHost {
    /// Creates a host with no registrations or placements
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a widget at the end of a container's widget list
    pub fn place_widget(&mut self, id: SidebarId, widget: Widget) {
        self.placements.entry(id).or_default().push(widget);
    }

    /// Returns the number of registered containers
    pub fn container_count(&self) -> usize {
        self.containers.len()
    }
}

impl ContainerHost for ThemeHost {
    fn register_container(&mut self, config: ContainerConfig) {
        self.containers.insert(config.id.clone(), config);
    }

    fn render_container(&self, id: &SidebarId) -> Option<String> {
        let config = self.containers.get(id)?;

        let mut out = String::new();
        for widget in self.placements.get(id).map_or(&[][..], Vec::as_slice) {
            out.push_str(&config.before_widget);
            if let Some(title) = &widget.title {
                out.push_str(&config.before_title);
                out.push_str(title);
                out.push_str(&config.after_title);
            }
            out.push_str(&widget.content);
            out.push_str(&config.after_widget);
        }

        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn config(id: &SidebarId) -> ContainerConfig {
        ContainerConfig {
            id: id.clone(),
            name: "Footer".to_string(),
            description: String::new(),
            before_widget: "<li>".to_string(),
            after_widget: "</li>".to_string(),
            before_title: "<h3>".to_string(),
            after_title: "</h3>".to_string(),
        }
    }

    #[test]
    fn unregistered_container_renders_none() {
        let host = ThemeHost::new();
        let id = SidebarId::generate("Footer", Utc::now());

        assert!(host.render_container(&id).is_none());
    }

    #[test]
    fn registered_empty_container_renders_empty_string() {
        let mut host = ThemeHost::new();
        let id = SidebarId::generate("Footer", Utc::now());
        host.register_container(config(&id));

        assert_eq!(host.render_container(&id), Some(String::new()));
    }

    #[test]
    fn widgets_are_wrapped_in_container_markup() {
        let mut host = ThemeHost::new();
        let id = SidebarId::generate("Footer", Utc::now());
        host.register_container(config(&id));

        host.place_widget(
            id.clone(),
            Widget {
                title: Some("Links".to_string()),
                content: "<ul><li>a</li></ul>".to_string(),
            },
        );
        host.place_widget(
            id.clone(),
            Widget {
                title: None,
                content: "plain text".to_string(),
            },
        );

        let html = host.render_container(&id).unwrap();
        assert_eq!(
            html,
            "<li><h3>Links</h3><ul><li>a</li></ul></li><li>plain text</li>"
        );
    }

    #[test]
    fn untitled_widget_skips_title_markup() {
        let mut host = ThemeHost::new();
        let id = SidebarId::generate("Footer", Utc::now());
        host.register_container(config(&id));
        host.place_widget(
            id.clone(),
            Widget {
                title: None,
                content: "x".to_string(),
            },
        );

        let html = host.render_container(&id).unwrap();
        assert!(!html.contains("<h3>"));
    }

    #[test]
    fn widget_serde_accepts_untitled_widgets() {
        let widget: Widget = serde_json::from_str(r#"{"content": "<p>hi</p>"}"#).unwrap();
        assert!(widget.title.is_none());
        assert_eq!(widget.content, "<p>hi</p>");
    }
}
