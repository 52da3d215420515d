//! Content rendering command
//!
//! Publishes every stored sidebar to an in-process widget host, then runs
//! the content through the shortcode pipeline. Widget placements come from
//! a JSON file mapping sidebar ids or slugs to widget lists.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::output::Output;
use crate::shortcode::{Pipeline, SidebarShortcode};
use crate::storage::{Project, SidebarRegistry};
use crate::widgets::{publish_all, ThemeHost, Widget};

pub fn render(output: &Output, path: Option<&Path>, widgets: Option<&Path>) -> Result<()> {
    let project = Project::open_current()?;
    let registry = project.registry();

    let content = read_content(path)?;

    let mut host = ThemeHost::new();
    publish_all(&registry, &mut host)?;
    output.verbose_ctx(
        "render",
        &format!("Published {} containers", host.container_count()),
    );

    let widgets_path = widgets
        .map(Path::to_path_buf)
        .or_else(|| default_widgets_file(&project));
    if let Some(widgets_path) = widgets_path {
        place_widgets(&registry, &mut host, &widgets_path)?;
    }

    let tag = &project.config().project.shortcode_tag;
    let mut pipeline = Pipeline::new();
    pipeline.register(tag.clone(), SidebarShortcode::new(&registry, &host));

    let expanded = pipeline.expand(&content)?;

    if output.is_json() {
        output.data(&serde_json::json!({ "output": expanded }));
    } else {
        print!("{}", expanded);
    }

    Ok(())
}

fn read_content(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file: {}", path.display())),
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read content from stdin")?;
            Ok(content)
        }
    }
}

/// Resolves the configured widgets file relative to the project root
fn default_widgets_file(project: &Project) -> Option<PathBuf> {
    let configured = project.config().project.widgets_file.as_ref()?;
    if configured.is_absolute() {
        Some(configured.clone())
    } else {
        Some(project.root().join(configured))
    }
}

/// Loads a widgets file and places each widget, resolving keys that are
/// slugs rather than ids through the registry
fn place_widgets(registry: &SidebarRegistry, host: &mut ThemeHost, path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read widgets file: {}", path.display()))?;

    let placements: HashMap<String, Vec<Widget>> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse widgets file: {}", path.display()))?;

    for (key, widgets) in placements {
        let id = match key.parse() {
            Ok(id) => id,
            Err(_) => registry
                .find_by_slug(&key)?
                .ok_or_else(|| anyhow::anyhow!("Unknown sidebar in widgets file: {}", key))?,
        };

        for widget in widgets {
            host.place_widget(id.clone(), widget);
        }
    }

    Ok(())
}
