//! # Storage Layer
//!
//! Persistence for sidebar definitions and project configuration.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Sidebars | JSON array under one option key | `.sidebars/options.json` |
//! | Config | TOML | `.sidebars/config.toml` |
//!
//! The registry talks to an [`OptionStore`] trait rather than the filesystem
//! directly, so embedders can supply their own key-value backend. File
//! writes go through a temp file + rename with `fs2` locking.
//!
//! ## Key Types
//!
//! - [`Project`] - Entry point for a sidebar project directory
//! - [`SidebarRegistry`] - CRUD over the persisted sidebar mapping
//! - [`OptionStore`] / [`JsonOptionStore`] - the key-value persistence seam
//! - [`Config`] - Project and global configuration

mod config;
mod options;
mod project;
mod registry;

pub use config::{Config, ConfigError, GlobalConfig, OutputFormat, ProjectConfig};
pub use options::{JsonOptionStore, MemoryOptionStore, OptionStore};
pub use project::{Project, ProjectError};
pub use registry::{SidebarRegistry, SIDEBARS_OPTION_KEY};
