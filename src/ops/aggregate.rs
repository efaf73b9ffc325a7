use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use regex::Regex;
use serde::Serialize;

use crate::model::entry::{ENTRY_TYPES, Entry};
use crate::model::store::Store;
use crate::model::timeline::{Confidence, TimelineEvent};
use crate::model::vault::Vault;
use crate::ops::search::entry_matches;
use crate::ops::timeline::TimelineNormalizer;
use crate::ops::vault_ops::VaultError;

// ---------------------------------------------------------------------------
// Vault views
// ---------------------------------------------------------------------------

/// The vault's entries in `toolIds` order, each once. IDs that no longer
/// resolve are skipped.
pub fn vault_entries<'a>(store: &'a Store, vault: &Vault) -> Vec<&'a Entry> {
    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(vault.tool_ids.len());
    for id in &vault.tool_ids {
        if !seen.insert(id.as_str()) {
            continue;
        }
        match store.entries.find_by_id(id) {
            Some(entry) => entries.push(entry),
            None => tracing::warn!(vault = %vault.id, entry = %id, "skipping dangling vault reference"),
        }
    }
    entries
}

/// The vault's entries as a chronological timeline.
pub fn vault_timeline(
    store: &Store,
    vault_id: &str,
    normalizer: &TimelineNormalizer,
) -> Result<Vec<TimelineEvent>, VaultError> {
    let vault = store
        .find_vault(vault_id)
        .ok_or_else(|| VaultError::NotFound(vault_id.to_string()))?;
    let events = vault_entries(store, vault)
        .into_iter()
        .map(|e| normalizer.normalize(e))
        .collect();
    Ok(sorted_timeline(events))
}

/// Every entry in the registry as a chronological timeline.
pub fn entries_timeline(store: &Store, normalizer: &TimelineNormalizer) -> Vec<TimelineEvent> {
    sorted_timeline(
        store
            .entries
            .all_entries()
            .map(|e| normalizer.normalize(e))
            .collect(),
    )
}

/// Drop events without a usable timestamp, then sort ascending. Events with
/// equal timestamps keep their input order.
pub fn sorted_timeline(events: Vec<TimelineEvent>) -> Vec<TimelineEvent> {
    let mut timed: Vec<TimelineEvent> = events
        .into_iter()
        .filter(|ev| ev.timestamp.is_some())
        .collect();
    timed.sort_by_key(|ev| ev.timestamp);
    timed
}

// ---------------------------------------------------------------------------
// Grid view
// ---------------------------------------------------------------------------

/// Grid ordering. Pinned entries always come first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Newest `addedDate` first; undated entries last
    #[default]
    Added,
    /// Display name, case-insensitive
    Name,
    /// Entry type, then display name
    Type,
}

impl SortOrder {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "added" => Some(SortOrder::Added),
            "name" => Some(SortOrder::Name),
            "type" => Some(SortOrder::Type),
            _ => None,
        }
    }
}

/// Filters for the entry grid. Empty query matches everything.
#[derive(Debug, Clone, Default)]
pub struct EntryQuery {
    pub type_name: Option<String>,
    pub tag: Option<String>,
    pub vault_id: Option<String>,
    pub starred_only: bool,
    pub pinned_only: bool,
    pub pattern: Option<Regex>,
    pub sort: SortOrder,
}

impl EntryQuery {
    fn accepts(&self, entry: &Entry) -> bool {
        if let Some(t) = &self.type_name
            && entry.type_name() != t.as_str()
        {
            return false;
        }
        if let Some(tag) = &self.tag
            && !entry.tags.iter().any(|t| t == tag)
        {
            return false;
        }
        if let Some(vid) = &self.vault_id
            && !entry.in_vault(vid)
        {
            return false;
        }
        if self.starred_only && !entry.starred {
            return false;
        }
        if self.pinned_only && !entry.pinned {
            return false;
        }
        if let Some(re) = &self.pattern
            && !entry_matches(re, entry)
        {
            return false;
        }
        true
    }
}

/// Filter and order entries for the grid view.
pub fn query_entries<'a>(store: &'a Store, query: &EntryQuery) -> Vec<&'a Entry> {
    let mut entries: Vec<&Entry> = store
        .entries
        .all_entries()
        .filter(|e| query.accepts(e))
        .collect();
    entries.sort_by(|a, b| b.pinned.cmp(&a.pinned).then_with(|| compare(a, b, query.sort)));
    entries
}

fn compare(a: &Entry, b: &Entry, sort: SortOrder) -> Ordering {
    match sort {
        SortOrder::Added => match (a.added_date, b.added_date) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortOrder::Name => name_key(a).cmp(&name_key(b)),
        SortOrder::Type => a
            .type_name()
            .cmp(b.type_name())
            .then_with(|| name_key(a).cmp(&name_key(b))),
    }
}

fn name_key(entry: &Entry) -> String {
    entry.display_name().to_lowercase()
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub type_name: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VaultSize {
    pub id: String,
    pub name: String,
    pub entries: usize,
    pub dangling: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfidenceCount {
    pub confidence: Confidence,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    /// `YYYY-MM`
    pub month: String,
    pub count: usize,
}

/// Summary numbers behind the dashboard charts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub total_entries: usize,
    pub starred: usize,
    pub pinned: usize,
    /// Non-zero counts only, in catalogue order
    pub by_type: Vec<TypeCount>,
    pub vaults: Vec<VaultSize>,
    pub by_confidence: Vec<ConfidenceCount>,
    pub by_month: Vec<MonthCount>,
    /// Entries whose timeline date could not be parsed
    pub untimed: usize,
    pub investigation_events: usize,
}

pub fn dashboard(store: &Store, normalizer: &TimelineNormalizer) -> Dashboard {
    let mut dash = Dashboard {
        total_entries: store.entries.len(),
        investigation_events: store.timeline.len(),
        ..Default::default()
    };

    let mut type_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for entry in store.entries.all_entries() {
        *type_counts.entry(entry.type_name()).or_default() += 1;
        if entry.starred {
            dash.starred += 1;
        }
        if entry.pinned {
            dash.pinned += 1;
        }
    }
    dash.by_type = ENTRY_TYPES
        .iter()
        .copied()
        .filter_map(|t| {
            type_counts.get(&t).map(|&count| TypeCount {
                type_name: t,
                count,
            })
        })
        .collect();

    dash.vaults = store
        .vaults
        .iter()
        .map(|v| {
            let resolved = vault_entries(store, v).len();
            let unique: HashSet<&str> = v.tool_ids.iter().map(|s| s.as_str()).collect();
            VaultSize {
                id: v.id.clone(),
                name: v.name.clone(),
                entries: resolved,
                dangling: unique.len() - resolved,
            }
        })
        .collect();

    let mut confidence_counts: BTreeMap<Confidence, usize> = BTreeMap::new();
    let mut month_counts: BTreeMap<String, usize> = BTreeMap::new();
    for entry in store.entries.all_entries() {
        let ev = normalizer.normalize(entry);
        *confidence_counts.entry(ev.confidence).or_default() += 1;
        match ev.timestamp {
            Some(ts) => *month_counts.entry(ts.format("%Y-%m").to_string()).or_default() += 1,
            None => dash.untimed += 1,
        }
    }
    dash.by_confidence = Confidence::ALL
        .iter()
        .filter_map(|c| {
            confidence_counts.get(c).map(|&count| ConfidenceCount {
                confidence: *c,
                count,
            })
        })
        .collect();
    dash.by_month = month_counts
        .into_iter()
        .map(|(month, count)| MonthCount { month, count })
        .collect();

    dash
}
