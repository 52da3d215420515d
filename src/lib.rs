//! Sidebar CLI - Shortcode-addressable widget sidebars
//!
//! Define named widget containers ("custom sidebars") identified by a slug,
//! render any of them inline in content via a `[mysidebar id="slug"]`
//! shortcode token, and manage them through a CLI admin surface.

pub mod cli;
pub mod domain;
pub mod shortcode;
pub mod storage;
pub mod widgets;

pub use domain::{make_slug, Sidebar, SidebarDraft, SidebarId};
pub use storage::{OptionStore, Project, SidebarRegistry};
