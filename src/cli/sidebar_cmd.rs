//! Sidebar admin commands
//!
//! The command handlers mirror the original admin screen: every action is an
//! explicit registry call, and outcomes come back as success or error
//! messages. Drafts are sanitized here, at the boundary, before the registry
//! ever sees them.

use anyhow::Result;

use super::output::Output;
use crate::domain::{SidebarDraft, SidebarId};
use crate::storage::Project;

/// Optional field flags shared by `add` and `edit`
#[derive(Debug, Default, clap::Args)]
pub struct FieldArgs {
    /// Shortcode slug (derived from the name when omitted)
    #[arg(long)]
    pub slug: Option<String>,

    /// What this sidebar is for, and where it is placed
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Markup emitted before each widget
    #[arg(long)]
    pub before_widget: Option<String>,

    /// Markup emitted after each widget
    #[arg(long)]
    pub after_widget: Option<String>,

    /// Markup emitted before each widget title
    #[arg(long)]
    pub before_title: Option<String>,

    /// Markup emitted after each widget title
    #[arg(long)]
    pub after_title: Option<String>,
}

pub fn add(output: &Output, name: &str, fields: FieldArgs, unique_slug: bool) -> Result<()> {
    let project = Project::open_current()?;
    let registry = project.registry();

    if name.trim().is_empty() {
        anyhow::bail!("Sidebar name is required");
    }

    let draft = SidebarDraft {
        name: name.to_string(),
        slug: fields.slug.unwrap_or_default(),
        description: fields.description.unwrap_or_default(),
        before_widget: fields.before_widget.unwrap_or_default(),
        after_widget: fields.after_widget.unwrap_or_default(),
        before_title: fields.before_title.unwrap_or_default(),
        after_title: fields.after_title.unwrap_or_default(),
    }
    .sanitized();

    if unique_slug {
        let slug = draft.effective_slug();
        if !registry.is_slug_unique(&slug)? {
            anyhow::bail!("Slug '{}' is already in use", slug);
        }
    }

    let saved = registry.save(draft, None)?;
    output.verbose_ctx("add", &format!("Saved sidebar {}", saved.id));

    if output.is_json() {
        output.data(&serde_json::json!({
            "id": saved.id.to_string(),
            "name": saved.name,
            "slug": saved.slug,
        }));
    } else {
        output.success(&format!("Created sidebar: {} ({})", saved.id, saved.name));
        output.success(&format!(
            "Shortcode: {}",
            shortcode_for(&project, &saved.slug)
        ));
    }

    Ok(())
}

pub fn list(output: &Output) -> Result<()> {
    let project = Project::open_current()?;
    let sidebars = project.registry().list()?;

    if output.is_json() {
        let items: Vec<_> = sidebars
            .iter()
            .map(|s| {
                serde_json::json!({
                    "id": s.id.to_string(),
                    "name": s.name,
                    "slug": s.slug,
                    "shortcode": shortcode_for(&project, &s.slug),
                })
            })
            .collect();
        output.data(&items);
    } else if sidebars.is_empty() {
        println!("No sidebars found.");
    } else {
        println!("{:<16} {:<24} SHORTCODE", "ID", "NAME");
        println!("{}", "-".repeat(70));
        for s in &sidebars {
            println!(
                "{:<16} {:<24} {}",
                s.id.to_string(),
                s.name,
                shortcode_for(&project, &s.slug)
            );
        }
    }

    Ok(())
}

pub fn show(output: &Output, id_str: &str) -> Result<()> {
    let project = Project::open_current()?;
    let registry = project.registry();

    let id: SidebarId = id_str.parse()?;
    let sidebar = registry
        .get(&id)?
        .ok_or_else(|| anyhow::anyhow!("Sidebar not found: {}", id))?;

    if output.is_json() {
        output.data(&sidebar);
    } else {
        println!("Sidebar: {}", sidebar.id);
        println!("Name: {}", sidebar.name);
        println!("Slug: {}", sidebar.slug);
        println!("Shortcode: {}", shortcode_for(&project, &sidebar.slug));

        if !sidebar.description.is_empty() {
            println!("Description: {}", sidebar.description);
        }
        if !sidebar.before_widget.is_empty() || !sidebar.after_widget.is_empty() {
            println!(
                "Widget wrap: {} ... {}",
                sidebar.before_widget, sidebar.after_widget
            );
        }
        if !sidebar.before_title.is_empty() || !sidebar.after_title.is_empty() {
            println!(
                "Title wrap: {} ... {}",
                sidebar.before_title, sidebar.after_title
            );
        }

        println!("Created: {}", sidebar.created_at.format("%Y-%m-%d %H:%M"));
        println!("Updated: {}", sidebar.updated_at.format("%Y-%m-%d %H:%M"));
    }

    Ok(())
}

pub fn edit(output: &Output, id_str: &str, fields: FieldArgs, name: Option<&str>) -> Result<()> {
    let project = Project::open_current()?;
    let registry = project.registry();

    let id: SidebarId = id_str.parse()?;
    let current = registry
        .get(&id)?
        .ok_or_else(|| anyhow::anyhow!("Sidebar not found: {}", id))?;

    // Pre-fill unspecified fields from the stored definition, the way the
    // admin form repopulates, then save the whole draft back.
    let draft = SidebarDraft {
        name: name.map(str::to_string).unwrap_or(current.name),
        slug: fields.slug.unwrap_or(current.slug),
        description: fields.description.unwrap_or(current.description),
        before_widget: fields.before_widget.unwrap_or(current.before_widget),
        after_widget: fields.after_widget.unwrap_or(current.after_widget),
        before_title: fields.before_title.unwrap_or(current.before_title),
        after_title: fields.after_title.unwrap_or(current.after_title),
    }
    .sanitized();

    let saved = registry.save(draft, Some(id))?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "id": saved.id.to_string(),
            "name": saved.name,
            "slug": saved.slug,
        }));
    } else {
        output.success(&format!("Saved sidebar: {} ({})", saved.id, saved.name));
    }

    Ok(())
}

pub fn delete(output: &Output, id_str: &str) -> Result<()> {
    let project = Project::open_current()?;
    let registry = project.registry();

    let id: SidebarId = id_str.parse()?;
    registry.delete(&id)?;

    output.success(&format!("Removed sidebar: {}", id));
    Ok(())
}

pub fn check_slug(output: &Output, slug: &str) -> Result<()> {
    let project = Project::open_current()?;
    let unique = project.registry().is_slug_unique(slug)?;

    if output.is_json() {
        output.data(&serde_json::json!({ "slug": slug, "unique": unique }));
    } else if unique {
        output.success(&format!("Slug '{}' is available", slug));
    } else {
        output.success(&format!("Slug '{}' is already in use", slug));
    }

    Ok(())
}

/// Formats the ready-to-paste shortcode for a slug
fn shortcode_for(project: &Project, slug: &str) -> String {
    format!(
        "[{} id=\"{}\"]",
        project.config().project.shortcode_tag,
        slug
    )
}
