//! Sidebar domain model
//!
//! A sidebar is a named widget container addressed from content by its slug.
//! Definitions are persisted wholesale in the registry; the wrapper fields
//! are raw markup fragments emitted around each widget at render time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::SidebarId;
use super::slug::make_slug;

/// A custom sidebar definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sidebar {
    /// Unique identifier, immutable once assigned
    pub id: SidebarId,

    /// Human-readable display name
    pub name: String,

    /// Shortcode-safe lookup key
    pub slug: String,

    /// Free-text description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Markup emitted before each widget
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub before_widget: String,

    /// Markup emitted after each widget
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub after_widget: String,

    /// Markup emitted before each widget title
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub before_title: String,

    /// Markup emitted after each widget title
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub after_title: String,

    /// When the sidebar was created
    pub created_at: DateTime<Utc>,

    /// When the sidebar was last saved
    pub updated_at: DateTime<Utc>,
}

/// Admin-submitted fields for creating or editing a sidebar.
///
/// All fields are plain strings; empty means unset. The draft never carries
/// an id: identity is decided by the registry on save.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidebarDraft {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub before_widget: String,
    pub after_widget: String,
    pub before_title: String,
    pub after_title: String,
}

impl SidebarDraft {
    /// Creates a draft with the given name and everything else unset
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the slug this draft will be stored under: the explicit slug
    /// slugified when present, otherwise derived from the name.
    pub fn effective_slug(&self) -> String {
        if self.slug.trim().is_empty() {
            make_slug(&self.name)
        } else {
            make_slug(&self.slug)
        }
    }

    /// Returns a copy with every string field unescaped.
    ///
    /// Transports that escape inbound input (quoting layers, shell quirks)
    /// are reversed here so the stored value is the literal author-typed
    /// text. Applied once at the admin boundary, never inside the registry.
    pub fn sanitized(&self) -> Self {
        Self {
            name: strip_slashes(&self.name),
            slug: strip_slashes(&self.slug),
            description: strip_slashes(&self.description),
            before_widget: strip_slashes(&self.before_widget),
            after_widget: strip_slashes(&self.after_widget),
            before_title: strip_slashes(&self.before_title),
            after_title: strip_slashes(&self.after_title),
        }
    }
}

/// Removes one level of backslash escaping.
///
/// Each backslash is dropped and the character after it is kept literally;
/// a trailing lone backslash is dropped.
pub fn strip_slashes(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_slug_derives_from_name() {
        let draft = SidebarDraft::named("Footer Links");
        assert_eq!(draft.effective_slug(), "footer-links");
    }

    #[test]
    fn effective_slug_prefers_explicit_value() {
        let mut draft = SidebarDraft::named("Footer Links");
        draft.slug = "My Custom Slug".to_string();
        assert_eq!(draft.effective_slug(), "my-custom-slug");
    }

    #[test]
    fn whitespace_only_slug_counts_as_unset() {
        let mut draft = SidebarDraft::named("Footer");
        draft.slug = "   ".to_string();
        assert_eq!(draft.effective_slug(), "footer");
    }

    #[test]
    fn strip_slashes_removes_escaping() {
        assert_eq!(strip_slashes(r#"It\'s here"#), "It's here");
        assert_eq!(strip_slashes(r#"a \"quoted\" word"#), r#"a "quoted" word"#);
        assert_eq!(strip_slashes(r"double \\ slash"), r"double \ slash");
    }

    #[test]
    fn strip_slashes_drops_trailing_backslash() {
        assert_eq!(strip_slashes(r"dangling\"), "dangling");
    }

    #[test]
    fn sanitized_covers_every_field() {
        let draft = SidebarDraft {
            name: r#"Jason\'s Sidebar"#.to_string(),
            slug: r"my\-slug".to_string(),
            description: r#"used on the \"about\" page"#.to_string(),
            before_widget: r#"<div class=\"widget\">"#.to_string(),
            after_widget: "</div>".to_string(),
            before_title: "<h3>".to_string(),
            after_title: "</h3>".to_string(),
        };

        let clean = draft.sanitized();
        assert_eq!(clean.name, "Jason's Sidebar");
        assert_eq!(clean.slug, "my-slug");
        assert_eq!(clean.description, r#"used on the "about" page"#);
        assert_eq!(clean.before_widget, r#"<div class="widget">"#);
        assert_eq!(clean.after_widget, "</div>");
    }

    #[test]
    fn sidebar_serde_roundtrip() {
        let sidebar = Sidebar {
            id: SidebarId::generate("Footer", Utc::now()),
            name: "Footer".to_string(),
            slug: "footer".to_string(),
            description: String::new(),
            before_widget: "<div>".to_string(),
            after_widget: "</div>".to_string(),
            before_title: String::new(),
            after_title: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&sidebar).unwrap();
        let parsed: Sidebar = serde_json::from_str(&json).unwrap();

        assert_eq!(sidebar, parsed);
    }

    #[test]
    fn empty_markup_fields_are_omitted_from_json() {
        let sidebar = Sidebar {
            id: SidebarId::generate("Footer", Utc::now()),
            name: "Footer".to_string(),
            slug: "footer".to_string(),
            description: String::new(),
            before_widget: String::new(),
            after_widget: String::new(),
            before_title: String::new(),
            after_title: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&sidebar).unwrap();
        assert!(!json.contains("before_widget"));
        assert!(!json.contains("description"));
    }
}
