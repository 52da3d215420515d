//! Container registration
//!
//! The rendering side of the host platform is reduced to two operations:
//! register a container under its stable id, render a registered container
//! to markup. The publisher walks the registry and hands every definition
//! to the host at startup.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::{Sidebar, SidebarId};
use crate::storage::SidebarRegistry;

/// Display and wrapping configuration for a registered container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerConfig {
    /// Stable registration key
    pub id: SidebarId,

    /// Display name shown wherever the host lists containers
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Markup emitted before each widget
    pub before_widget: String,

    /// Markup emitted after each widget
    pub after_widget: String,

    /// Markup emitted before each widget title
    pub before_title: String,

    /// Markup emitted after each widget title
    pub after_title: String,
}

impl From<&Sidebar> for ContainerConfig {
    fn from(sidebar: &Sidebar) -> Self {
        Self {
            id: sidebar.id.clone(),
            name: sidebar.name.clone(),
            description: sidebar.description.clone(),
            before_widget: sidebar.before_widget.clone(),
            after_widget: sidebar.after_widget.clone(),
            before_title: sidebar.before_title.clone(),
            after_title: sidebar.after_title.clone(),
        }
    }
}

/// The host container-rendering subsystem
pub trait ContainerHost {
    /// Registers a renderable container under its id
    fn register_container(&mut self, config: ContainerConfig);

    /// Renders a registered container to markup.
    ///
    /// `None` means the id was never registered; a registered container with
    /// nothing to show renders as an empty string.
    fn render_container(&self, id: &SidebarId) -> Option<String>;
}

/// Registers every definition in the registry with the host.
///
/// Runs once per process before any content is rendered. An empty registry
/// registers nothing and is not an error.
pub fn publish_all(registry: &SidebarRegistry, host: &mut dyn ContainerHost) -> Result<()> {
    for sidebar in registry.list()? {
        host.register_container(ContainerConfig::from(&sidebar));
    }

    Ok(())
}
