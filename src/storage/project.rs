//! Project management
//!
//! Handles project initialization and provides access to the registry.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::{Config, JsonOptionStore, SidebarRegistry};

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Not in a sidebar project. Run 'sidebar init' first.")]
    NotInProject,
}

/// A sidebar project: a directory with a `.sidebars/` store
pub struct Project {
    root: PathBuf,
    config: Config,
}

impl Project {
    /// Opens an existing project at the given path
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.join(".sidebars").is_dir() {
            return Err(ProjectError::NotInProject.into());
        }

        let config = Config::for_project(&root)?;

        Ok(Self { root, config })
    }

    /// Opens the project at the current directory or a parent
    pub fn open_current() -> Result<Self> {
        let root = Config::find_project_root().ok_or(ProjectError::NotInProject)?;

        Self::open(root)
    }

    /// Initializes a new project at the given path
    pub fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let sidebars_dir = root.join(".sidebars");

        fs::create_dir_all(&sidebars_dir).with_context(|| {
            format!(
                "Failed to create .sidebars directory: {}",
                sidebars_dir.display()
            )
        })?;

        let config_path = sidebars_dir.join("config.toml");
        if !config_path.exists() {
            let default_config = r#"# Sidebar project configuration

# Tag name recognized in content, e.g. [mysidebar id="footer"]
shortcode_tag = "mysidebar"

# Default widget placement file for 'sidebar render'
# widgets_file = "widgets.json"
"#;
            fs::write(&config_path, default_config)
                .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
        }

        Self::open(root)
    }

    /// Returns the project root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the .sidebars directory path
    pub fn sidebars_dir(&self) -> PathBuf {
        self.root.join(".sidebars")
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the sidebar registry backed by this project's option store
    pub fn registry(&self) -> SidebarRegistry {
        let store = JsonOptionStore::new(self.sidebars_dir().join("options.json"));
        SidebarRegistry::new(Box::new(store))
    }
}
