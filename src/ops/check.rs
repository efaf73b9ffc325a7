use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::model::date::parse_timestamp;
use crate::model::store::Store;

/// Structured result from `ov check`, suitable for --json output.
#[derive(Debug, Default, Serialize)]
pub struct CheckResult {
    pub valid: bool,
    pub errors: Vec<CheckError>,
    pub warnings: Vec<CheckWarning>,
}

/// A membership inconsistency (something `--fix` repairs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CheckError {
    /// A vault lists an entry ID that is not in the registry
    #[serde(rename = "dangling_member")]
    DanglingMember { vault_id: String, entry_id: String },
    /// A vault lists an entry whose customTabs lack the vault
    #[serde(rename = "missing_backlink")]
    MissingBacklink { vault_id: String, entry_id: String },
    /// An entry claims a vault that does not list it
    #[serde(rename = "unlisted_member")]
    UnlistedMember { vault_id: String, entry_id: String },
    /// An entry references a vault that doesn't exist
    #[serde(rename = "unknown_vault")]
    UnknownVault { entry_id: String, vault_id: String },
}

/// A non-critical issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CheckWarning {
    /// An entry ID repeats inside one vault's toolIds
    #[serde(rename = "duplicate_member")]
    DuplicateMember { vault_id: String, entry_id: String },
    /// A vault ID repeats inside one entry's customTabs
    #[serde(rename = "duplicate_tab")]
    DuplicateTab { entry_id: String, vault_id: String },
    /// The entry's own date cannot be placed on a timeline
    #[serde(rename = "unparsable_date")]
    UnparsableDate { entry_id: String, value: String },
    /// Two investigation events share an ID
    #[serde(rename = "duplicate_event_id")]
    DuplicateEventId { event_id: String },
    /// `store.json` held two entries with this ID; only the later one loaded
    #[serde(rename = "duplicate_entry_id")]
    DuplicateEntryId { entry_id: String },
}

/// What `repair` changed.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RepairSummary {
    /// Dangling and repeated IDs dropped from toolIds
    pub members_dropped: usize,
    /// customTabs values added or removed
    pub tabs_fixed: usize,
}

impl RepairSummary {
    pub fn is_empty(&self) -> bool {
        self.members_dropped == 0 && self.tabs_fixed == 0
    }
}

// ---------------------------------------------------------------------------
// Main check entry point
// ---------------------------------------------------------------------------

/// Validate a store and return structured results. Read-only.
///
/// Checks performed:
/// 1. Every `toolIds` value resolves to an entry
/// 2. Both sides of each membership agree
/// 3. Every `customTabs` value names an existing vault
/// 4. Warnings for repeated IDs and dates that cannot be parsed
pub fn check_store(store: &Store) -> CheckResult {
    let mut result = CheckResult::default();
    for id in store.entries.duplicate_ids() {
        result.warnings.push(CheckWarning::DuplicateEntryId {
            entry_id: id.clone(),
        });
    }
    let vault_ids: HashSet<&str> = store.vaults.iter().map(|v| v.id.as_str()).collect();

    for vault in &store.vaults {
        let mut seen = HashSet::new();
        for entry_id in &vault.tool_ids {
            if !seen.insert(entry_id.as_str()) {
                result.warnings.push(CheckWarning::DuplicateMember {
                    vault_id: vault.id.clone(),
                    entry_id: entry_id.clone(),
                });
                continue;
            }
            match store.entries.find_by_id(entry_id) {
                None => result.errors.push(CheckError::DanglingMember {
                    vault_id: vault.id.clone(),
                    entry_id: entry_id.clone(),
                }),
                Some(entry) if !entry.in_vault(&vault.id) => {
                    result.errors.push(CheckError::MissingBacklink {
                        vault_id: vault.id.clone(),
                        entry_id: entry_id.clone(),
                    })
                }
                Some(_) => {}
            }
        }
    }

    for entry in store.entries.all_entries() {
        let mut seen = HashSet::new();
        for vault_id in &entry.custom_tabs {
            if !seen.insert(vault_id.as_str()) {
                result.warnings.push(CheckWarning::DuplicateTab {
                    entry_id: entry.id.clone(),
                    vault_id: vault_id.clone(),
                });
                continue;
            }
            if !vault_ids.contains(vault_id.as_str()) {
                result.errors.push(CheckError::UnknownVault {
                    entry_id: entry.id.clone(),
                    vault_id: vault_id.clone(),
                });
            } else if let Some(vault) = store.find_vault(vault_id)
                && !vault.contains(&entry.id)
            {
                result.errors.push(CheckError::UnlistedMember {
                    vault_id: vault_id.clone(),
                    entry_id: entry.id.clone(),
                });
            }
        }

        if let Some(primary) = entry.kind.primary_date()
            && parse_timestamp(primary.raw).is_none()
        {
            result.warnings.push(CheckWarning::UnparsableDate {
                entry_id: entry.id.clone(),
                value: primary.raw.to_string(),
            });
        }
    }

    let mut event_counts: HashMap<&str, usize> = HashMap::new();
    for ev in &store.timeline {
        *event_counts.entry(ev.id.as_str()).or_default() += 1;
    }
    for ev in &store.timeline {
        if event_counts.remove(ev.id.as_str()).is_some_and(|n| n > 1) {
            result.warnings.push(CheckWarning::DuplicateEventId {
                event_id: ev.id.clone(),
            });
        }
    }

    result.valid = result.errors.is_empty();
    result
}

// ---------------------------------------------------------------------------
// Repair
// ---------------------------------------------------------------------------

/// Make `toolIds` authoritative: drop dangling and repeated members, then
/// rewrite every entry's `customTabs` to match. Existing tab order is kept;
/// missing tabs are appended in vault order.
pub fn repair_store(store: &mut Store) -> RepairSummary {
    let mut summary = RepairSummary::default();

    let mut members: HashMap<String, Vec<String>> = HashMap::new();
    for vault in &mut store.vaults {
        let before = vault.tool_ids.len();
        let mut seen = HashSet::new();
        vault
            .tool_ids
            .retain(|id| store.entries.contains(id) && seen.insert(id.clone()));
        summary.members_dropped += before - vault.tool_ids.len();
        for entry_id in &vault.tool_ids {
            members
                .entry(entry_id.clone())
                .or_default()
                .push(vault.id.clone());
        }
    }

    for entry in store.entries.all_entries_mut() {
        let wanted = members.remove(&entry.id).unwrap_or_default();
        let before = entry.custom_tabs.len();
        let mut seen = HashSet::new();
        entry
            .custom_tabs
            .retain(|t| wanted.contains(t) && seen.insert(t.clone()));
        summary.tabs_fixed += before - entry.custom_tabs.len();
        for vault_id in wanted {
            if !entry.custom_tabs.contains(&vault_id) {
                entry.custom_tabs.push(vault_id);
                summary.tabs_fixed += 1;
            }
        }
    }

    if !summary.is_empty() {
        tracing::debug!(
            members_dropped = summary.members_dropped,
            tabs_fixed = summary.tabs_fixed,
            "repaired vault memberships"
        );
    }
    summary
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
