//! Sidebar registry
//!
//! CRUD over the persisted sidebar mapping. The whole mapping lives under a
//! single option key as an ordered list: insertion order is what admins see
//! and what slug lookup scans, and an edit keeps its entry's position.
//!
//! The registry holds no cache. Every read loads from the option store and
//! every mutation writes the mapping back wholesale, so a failed write
//! leaves the persisted state untouched.

use anyhow::{Context, Result};
use chrono::Utc;

use crate::domain::{Sidebar, SidebarDraft, SidebarId};
use super::options::OptionStore;

/// Option key the sidebar mapping is stored under
pub const SIDEBARS_OPTION_KEY: &str = "custom_sidebars";

/// Store for custom sidebar definitions
pub struct SidebarRegistry {
    store: Box<dyn OptionStore>,
    key: String,
}

impl SidebarRegistry {
    /// Creates a registry over the given option store, using the default key
    pub fn new(store: Box<dyn OptionStore>) -> Self {
        Self::with_key(store, SIDEBARS_OPTION_KEY)
    }

    /// Creates a registry stored under a custom option key
    pub fn with_key(store: Box<dyn OptionStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Returns all sidebar definitions in insertion order.
    ///
    /// An absent option is an empty registry, never an error.
    pub fn list(&self) -> Result<Vec<Sidebar>> {
        match self.store.read(&self.key)? {
            Some(value) => serde_json::from_value(value)
                .with_context(|| format!("Failed to parse sidebar list under '{}'", self.key)),
            None => Ok(Vec::new()),
        }
    }

    /// Returns the definition with the given id, if any
    pub fn get(&self, id: &SidebarId) -> Result<Option<Sidebar>> {
        Ok(self.list()?.into_iter().find(|s| &s.id == id))
    }

    /// Returns the id of the first definition whose slug matches.
    ///
    /// Duplicate slugs are possible (uniqueness is never enforced on save);
    /// the first entry in iteration order wins.
    pub fn find_by_slug(&self, slug: &str) -> Result<Option<SidebarId>> {
        Ok(self
            .list()?
            .into_iter()
            .find(|s| s.slug == slug)
            .map(|s| s.id))
    }

    /// Returns true iff no existing definition uses the given slug.
    ///
    /// Available-but-optional validation: `save` never calls this. Callers
    /// that want unique slugs must check before saving.
    pub fn is_slug_unique(&self, slug: &str) -> Result<bool> {
        Ok(self.list()?.iter().all(|s| s.slug != slug))
    }

    /// Saves a sidebar: inserts a new definition, or overwrites the one with
    /// the given id wholesale (no partial-field merge).
    ///
    /// The slug is the draft's explicit value slugified when present,
    /// otherwise derived from the name. Expects an already-sanitized draft;
    /// name validation is the caller's job.
    pub fn save(&self, draft: SidebarDraft, id: Option<SidebarId>) -> Result<Sidebar> {
        let mut sidebars = self.list()?;

        let now = Utc::now();
        let id = id.unwrap_or_else(|| SidebarId::generate(&draft.name, now));
        let existing = sidebars.iter().position(|s| s.id == id);

        let sidebar = Sidebar {
            id: id.clone(),
            name: draft.name.clone(),
            slug: draft.effective_slug(),
            description: draft.description,
            before_widget: draft.before_widget,
            after_widget: draft.after_widget,
            before_title: draft.before_title,
            after_title: draft.after_title,
            created_at: existing.map_or(now, |i| sidebars[i].created_at),
            updated_at: now,
        };

        match existing {
            // Same position, original creation time
            Some(i) => sidebars[i] = sidebar.clone(),
            None => sidebars.push(sidebar.clone()),
        }

        self.persist(&sidebars)?;
        Ok(sidebar)
    }

    /// Deletes the definition with the given id.
    ///
    /// Deleting an unknown id is a no-op that still persists and succeeds.
    pub fn delete(&self, id: &SidebarId) -> Result<()> {
        let mut sidebars = self.list()?;
        sidebars.retain(|s| &s.id != id);
        self.persist(&sidebars)
    }

    fn persist(&self, sidebars: &[Sidebar]) -> Result<()> {
        let value = serde_json::to_value(sidebars).context("Failed to serialize sidebar list")?;
        self.store.write(&self.key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::options::MemoryOptionStore;
    use serde_json::Value;

    fn registry() -> SidebarRegistry {
        SidebarRegistry::new(Box::new(MemoryOptionStore::new()))
    }

    fn draft(name: &str) -> SidebarDraft {
        SidebarDraft::named(name)
    }

    #[test]
    fn empty_registry_lists_nothing() {
        let reg = registry();
        assert!(reg.list().unwrap().is_empty());
    }

    #[test]
    fn find_by_slug_on_empty_registry_is_none() {
        let reg = registry();
        assert!(reg.find_by_slug("anything").unwrap().is_none());
        assert!(reg.find_by_slug("").unwrap().is_none());
    }

    #[test]
    fn save_derives_slug_from_name() {
        let reg = registry();
        let saved = reg.save(draft("Footer Links"), None).unwrap();

        assert_eq!(saved.slug, "footer-links");
        assert_eq!(saved.slug, crate::domain::make_slug(&saved.name));
    }

    #[test]
    fn save_slugifies_explicit_slug() {
        let reg = registry();
        let mut d = draft("Footer");
        d.slug = "My Slug!!".to_string();

        let saved = reg.save(d, None).unwrap();
        assert_eq!(saved.slug, "my-slug");
    }

    #[test]
    fn save_then_list_contains_the_entry() {
        let reg = registry();
        let mut d = draft("Header Ads");
        d.description = "above the fold".to_string();
        d.before_widget = "<div>".to_string();

        let saved = reg.save(d, None).unwrap();
        let list = reg.list().unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, saved.id);
        assert_eq!(list[0].name, "Header Ads");
        assert_eq!(list[0].description, "above the fold");
        assert_eq!(list[0].before_widget, "<div>");
    }

    #[test]
    fn save_with_same_id_overwrites_in_place() {
        let reg = registry();
        let first = reg.save(draft("First"), None).unwrap();
        reg.save(draft("Second"), None).unwrap();

        let mut edited = draft("First Renamed");
        edited.description = "now with a description".to_string();
        reg.save(edited, Some(first.id.clone())).unwrap();

        let list = reg.list().unwrap();
        assert_eq!(list.len(), 2);
        // Position preserved, fields overwritten wholesale
        assert_eq!(list[0].id, first.id);
        assert_eq!(list[0].name, "First Renamed");
        assert_eq!(list[0].slug, "first-renamed");
        assert_eq!(list[0].description, "now with a description");
    }

    #[test]
    fn overwrite_preserves_created_at() {
        let reg = registry();
        let first = reg.save(draft("Footer"), None).unwrap();

        std::thread::sleep(std::time::Duration::from_millis(10));
        let edited = reg.save(draft("Footer"), Some(first.id.clone())).unwrap();

        assert_eq!(edited.created_at, first.created_at);
        assert!(edited.updated_at > first.updated_at);

        let stored = reg.get(&first.id).unwrap().unwrap();
        assert_eq!(stored.created_at, first.created_at);
    }

    #[test]
    fn edit_clears_fields_left_empty() {
        // Wholesale overwrite: a field missing from the draft is cleared,
        // not merged from the stored entry.
        let reg = registry();
        let mut d = draft("Footer");
        d.before_widget = "<div>".to_string();
        let saved = reg.save(d, None).unwrap();

        reg.save(draft("Footer"), Some(saved.id.clone())).unwrap();

        let stored = reg.get(&saved.id).unwrap().unwrap();
        assert_eq!(stored.before_widget, "");
    }

    #[test]
    fn save_with_unknown_explicit_id_inserts() {
        let reg = registry();
        let id = SidebarId::generate("elsewhere", Utc::now());

        reg.save(draft("Imported"), Some(id.clone())).unwrap();

        let stored = reg.get(&id).unwrap().unwrap();
        assert_eq!(stored.name, "Imported");
    }

    #[test]
    fn delete_removes_entry_and_is_idempotent() {
        let reg = registry();
        let saved = reg.save(draft("Footer"), None).unwrap();

        reg.delete(&saved.id).unwrap();
        assert!(reg.list().unwrap().is_empty());

        // Deleting again still succeeds and changes nothing
        reg.delete(&saved.id).unwrap();
        assert!(reg.list().unwrap().is_empty());
    }

    #[test]
    fn find_by_slug_first_match_wins() {
        let reg = registry();
        let mut a = draft("Alpha");
        a.slug = "shared".to_string();
        let mut b = draft("Beta");
        b.slug = "shared".to_string();

        let first = reg.save(a, None).unwrap();
        reg.save(b, None).unwrap();

        let found = reg.find_by_slug("shared").unwrap().unwrap();
        assert_eq!(found, first.id);
    }

    #[test]
    fn slug_uniqueness_flips_with_save_and_delete() {
        let reg = registry();
        assert!(reg.is_slug_unique("footer").unwrap());

        let saved = reg.save(draft("Footer"), None).unwrap();
        assert!(!reg.is_slug_unique("footer").unwrap());

        reg.delete(&saved.id).unwrap();
        assert!(reg.is_slug_unique("footer").unwrap());
    }

    #[test]
    fn save_does_not_enforce_slug_uniqueness() {
        let reg = registry();
        reg.save(draft("Footer"), None).unwrap();
        reg.save(draft("Footer"), None).unwrap();

        let list = reg.list().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].slug, list[1].slug);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let reg = registry();
        reg.save(draft("One"), None).unwrap();
        reg.save(draft("Two"), None).unwrap();
        reg.save(draft("Three"), None).unwrap();

        let names: Vec<_> = reg.list().unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["One", "Two", "Three"]);
    }

    /// Store whose writes always fail, for persistence-failure semantics
    struct FailingStore {
        inner: MemoryOptionStore,
    }

    impl OptionStore for FailingStore {
        fn read(&self, key: &str) -> Result<Option<Value>> {
            self.inner.read(key)
        }

        fn write(&self, _key: &str, _value: Value) -> Result<()> {
            anyhow::bail!("option store unavailable")
        }
    }

    #[test]
    fn persistence_failure_surfaces_and_leaves_state_untouched() {
        let seed = MemoryOptionStore::new();
        seed.write(
            SIDEBARS_OPTION_KEY,
            serde_json::to_value(Vec::<Sidebar>::new()).unwrap(),
        )
        .unwrap();

        let reg = SidebarRegistry::new(Box::new(FailingStore { inner: seed }));

        assert!(reg.save(draft("Footer"), None).is_err());
        assert!(reg.list().unwrap().is_empty());

        let unknown = SidebarId::generate("x", Utc::now());
        assert!(reg.delete(&unknown).is_err());
    }
}
