use serde::Serialize;

use crate::model::store::Store;
use crate::model::vault::{Vault, VaultExport};

/// Error type for vault operations
#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    #[error("vault not found: {0}")]
    NotFound(String),
    #[error("entry not found: {0}")]
    EntryNotFound(String),
    #[error("vault name cannot be empty")]
    EmptyName,
}

/// Name, icon and color for a new vault.
#[derive(Debug, Clone)]
pub struct VaultStyle {
    pub name: String,
    pub icon: String,
    pub color: String,
}

/// Entries whose membership changed in one update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MembershipChange {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl MembershipChange {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Create / edit / delete
// ---------------------------------------------------------------------------

/// Create a vault holding `initial_ids` and tag each of those entries with it.
/// Returns the new vault ID. Nothing is created if any ID does not resolve.
pub fn create_vault(
    store: &mut Store,
    style: VaultStyle,
    initial_ids: &[String],
) -> Result<String, VaultError> {
    let name = validate_name(&style.name)?;
    if let Some(missing) = initial_ids.iter().find(|id| !store.entries.contains(id)) {
        return Err(VaultError::EntryNotFound(missing.clone()));
    }

    let id = uuid::Uuid::new_v4().to_string();
    store.vaults.push(Vault {
        id: id.clone(),
        name,
        icon: style.icon,
        color: style.color,
        tool_ids: Vec::new(),
    });
    update_vault_membership(store, &id, initial_ids)?;
    tracing::debug!(vault = %id, members = initial_ids.len(), "created vault");
    Ok(id)
}

/// Rename or restyle a vault. `None` leaves a field unchanged.
pub fn edit_vault(
    store: &mut Store,
    vault_id: &str,
    name: Option<&str>,
    icon: Option<&str>,
    color: Option<&str>,
) -> Result<(), VaultError> {
    let name = name.map(validate_name).transpose()?;
    let vault = store
        .find_vault_mut(vault_id)
        .ok_or_else(|| VaultError::NotFound(vault_id.to_string()))?;
    if let Some(name) = name {
        vault.name = name;
    }
    if let Some(icon) = icon {
        vault.icon = icon.to_string();
    }
    if let Some(color) = color {
        vault.color = color.to_string();
    }
    Ok(())
}

/// Remove a vault and strip its ID from every entry. Entries stay.
pub fn delete_vault(store: &mut Store, vault_id: &str) -> Result<Vault, VaultError> {
    let idx = store
        .vaults
        .iter()
        .position(|v| v.id == vault_id)
        .ok_or_else(|| VaultError::NotFound(vault_id.to_string()))?;
    let vault = store.vaults.remove(idx);

    let mut scrubbed = 0;
    for entry in store.entries.all_entries_mut() {
        let before = entry.custom_tabs.len();
        entry.custom_tabs.retain(|t| t != vault_id);
        if entry.custom_tabs.len() != before {
            scrubbed += 1;
        }
    }
    tracing::debug!(vault = %vault_id, scrubbed, "deleted vault");
    Ok(vault)
}

// ---------------------------------------------------------------------------
// Membership
// ---------------------------------------------------------------------------

/// Replace a vault's membership with `new_ids`.
///
/// `toolIds` becomes `new_ids` in order with repeats dropped. Every entry in
/// the registry is swept so that its `customTabs` agrees: members gain the
/// vault ID once, everyone else loses it. IDs newly added must resolve; IDs
/// already in the vault may be dangling and are kept as given.
pub fn update_vault_membership(
    store: &mut Store,
    vault_id: &str,
    new_ids: &[String],
) -> Result<MembershipChange, VaultError> {
    let current = store
        .find_vault(vault_id)
        .ok_or_else(|| VaultError::NotFound(vault_id.to_string()))?
        .tool_ids
        .clone();

    let mut desired: Vec<String> = Vec::with_capacity(new_ids.len());
    for id in new_ids {
        if !desired.contains(id) {
            desired.push(id.clone());
        }
    }

    let mut change = MembershipChange::default();
    for id in &desired {
        if !current.contains(id) {
            if !store.entries.contains(id) {
                return Err(VaultError::EntryNotFound(id.clone()));
            }
            change.added.push(id.clone());
        }
    }
    for id in &current {
        if !desired.contains(id) && !change.removed.contains(id) {
            change.removed.push(id.clone());
        }
    }

    for entry in store.entries.all_entries_mut() {
        let member = desired.contains(&entry.id);
        let tagged = entry.in_vault(vault_id);
        if member && !tagged {
            entry.custom_tabs.push(vault_id.to_string());
        } else if !member && tagged {
            entry.custom_tabs.retain(|t| t != vault_id);
        }
    }

    if let Some(vault) = store.find_vault_mut(vault_id) {
        vault.tool_ids = desired;
    }
    if !change.is_empty() {
        tracing::debug!(
            vault = %vault_id,
            added = change.added.len(),
            removed = change.removed.len(),
            "updated vault membership"
        );
    }
    Ok(change)
}

/// Add one entry to a vault (appended last). No-op if already a member.
pub fn add_to_vault(
    store: &mut Store,
    vault_id: &str,
    entry_id: &str,
) -> Result<MembershipChange, VaultError> {
    let mut ids = member_ids(store, vault_id)?;
    if !ids.iter().any(|id| id == entry_id) {
        ids.push(entry_id.to_string());
    }
    update_vault_membership(store, vault_id, &ids)
}

/// Remove one entry from a vault. No-op if not a member.
pub fn remove_from_vault(
    store: &mut Store,
    vault_id: &str,
    entry_id: &str,
) -> Result<MembershipChange, VaultError> {
    let mut ids = member_ids(store, vault_id)?;
    ids.retain(|id| id != entry_id);
    update_vault_membership(store, vault_id, &ids)
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Resolve a vault into its export document. Entries follow `toolIds` order;
/// IDs that no longer resolve are skipped.
pub fn export_vault(store: &Store, vault_id: &str) -> Result<VaultExport, VaultError> {
    let vault = store
        .find_vault(vault_id)
        .ok_or_else(|| VaultError::NotFound(vault_id.to_string()))?;
    Ok(VaultExport {
        vault_name: vault.name.clone(),
        vault_icon: vault.icon.clone(),
        vault_color: vault.color.clone(),
        entries: crate::ops::aggregate::vault_entries(store, vault)
            .into_iter()
            .cloned()
            .collect(),
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn member_ids(store: &Store, vault_id: &str) -> Result<Vec<String>, VaultError> {
    store
        .find_vault(vault_id)
        .map(|v| v.tool_ids.clone())
        .ok_or_else(|| VaultError::NotFound(vault_id.to_string()))
}

fn validate_name(name: &str) -> Result<String, VaultError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(VaultError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Find a vault by exact ID, then by unique ID prefix, then by unique name.
/// An empty key matches nothing.
pub fn resolve_vault<'a>(store: &'a Store, key: &str) -> Option<&'a Vault> {
    if key.is_empty() {
        return None;
    }
    if let Some(v) = store.find_vault(key) {
        return Some(v);
    }
    let by_prefix: Vec<&Vault> = store
        .vaults
        .iter()
        .filter(|v| v.id.starts_with(key))
        .collect();
    if by_prefix.len() == 1 {
        return Some(by_prefix[0]);
    }
    let by_name: Vec<&Vault> = store.vaults.iter().filter(|v| v.name == key).collect();
    if by_name.len() == 1 {
        return Some(by_name[0]);
    }
    None
}
