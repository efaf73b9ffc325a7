use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::entry::Entry;

/// Every entry of every kind, keyed by ID, in insertion order.
///
/// Persisted as a plain array; a repeated ID in the array keeps the first
/// position and the last value, and is remembered in `duplicate_ids`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Entry>", into = "Vec<Entry>")]
pub struct Registry {
    entries: IndexMap<String, Entry>,
    /// IDs that appeared more than once when the registry was built
    duplicate_ids: Vec<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries, in registry order.
    pub fn all_entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    pub fn all_entries_mut(&mut self) -> impl Iterator<Item = &mut Entry> {
        self.entries.values_mut()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Entry> {
        self.entries.get(id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Entry> {
        self.entries.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Add an entry, replacing any entry with the same ID in place.
    pub fn insert(&mut self, entry: Entry) {
        self.entries.insert(entry.id.clone(), entry);
    }

    /// Remove an entry by ID, keeping the order of the rest. No-op if absent.
    pub fn remove_by_id(&mut self, id: &str) -> Option<Entry> {
        self.entries.shift_remove(id)
    }

    /// IDs that collided while loading. The earlier copies are gone.
    pub fn duplicate_ids(&self) -> &[String] {
        &self.duplicate_ids
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<Entry>> for Registry {
    fn from(list: Vec<Entry>) -> Self {
        list.into_iter().collect()
    }
}

impl From<Registry> for Vec<Entry> {
    fn from(registry: Registry) -> Self {
        registry.entries.into_values().collect()
    }
}

impl FromIterator<Entry> for Registry {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut registry = Registry::new();
        for entry in iter {
            if registry.contains(&entry.id) {
                tracing::warn!(entry = %entry.id, "duplicate entry id; keeping the later copy");
                if !registry.duplicate_ids.contains(&entry.id) {
                    registry.duplicate_ids.push(entry.id.clone());
                }
            }
            registry.insert(entry);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::{Domain, EntryKind, Keyword};
    use chrono::Utc;

    fn keyword(id: &str) -> Entry {
        let mut e = Entry::new(
            EntryKind::Keyword(Keyword {
                keyword: id.to_string(),
            }),
            Utc::now(),
        );
        e.id = id.to_string();
        e
    }

    #[test]
    fn find_by_unknown_id_is_none() {
        let reg: Registry = vec![keyword("a")].into();
        assert!(reg.find_by_id("a").is_some());
        assert!(reg.find_by_id("zzz").is_none());
    }

    #[test]
    fn remove_keeps_order_and_is_noop_when_absent() {
        let mut reg: Registry = vec![keyword("a"), keyword("b"), keyword("c")].into();
        assert!(reg.remove_by_id("b").is_some());
        assert!(reg.remove_by_id("b").is_none());
        let ids: Vec<_> = reg.all_entries().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn mixed_kinds_share_one_collection() {
        let mut dom = Entry::new(
            EntryKind::Domain(Domain {
                value: "example.org".into(),
                registrar: None,
            }),
            Utc::now(),
        );
        dom.id = "d".into();
        let reg: Registry = vec![keyword("k"), dom].into();
        let types: Vec<_> = reg.all_entries().map(|e| e.type_name()).collect();
        assert_eq!(types, vec!["keyword", "domain"]);
    }

    #[test]
    fn serializes_as_array() {
        let reg: Registry = vec![keyword("a"), keyword("b")].into();
        let v = serde_json::to_value(&reg).unwrap();
        assert!(v.is_array());
        assert_eq!(v[1]["id"], "b");
        let back: Registry = serde_json::from_value(v).unwrap();
        assert_eq!(back, reg);
    }

    #[test]
    fn duplicate_ids_collapse_on_load() {
        let mut second = keyword("a");
        second.starred = true;
        let reg: Registry = vec![keyword("a"), keyword("b"), second].into();
        assert_eq!(reg.len(), 2);
        assert!(reg.find_by_id("a").unwrap().starred);
        assert_eq!(reg.all_entries().next().unwrap().id, "a");
        assert_eq!(reg.duplicate_ids().to_vec(), vec!["a".to_string()]);
    }

    #[test]
    fn duplicate_ids_are_remembered_from_json() {
        let reg: Registry = serde_json::from_str(
            r#"[
                {"id": "x", "type": "keyword", "keyword": "first"},
                {"id": "x", "type": "keyword", "keyword": "second"},
                {"id": "y", "type": "keyword", "keyword": "other"}
            ]"#,
        )
        .unwrap();
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.duplicate_ids().to_vec(), vec!["x".to_string()]);
        assert_eq!(reg.find_by_id("x").unwrap().display_name(), "second");
    }
}
