use serde::{Deserialize, Serialize};

use super::entry::Entry;

/// A user-defined collection of entries ("custom tab").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vault {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    /// Authoritative membership list, in display order.
    #[serde(default)]
    pub tool_ids: Vec<String>,
}

impl Vault {
    pub fn contains(&self, entry_id: &str) -> bool {
        self.tool_ids.iter().any(|id| id == entry_id)
    }
}

/// The on-disk shape of an exported vault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultExport {
    pub vault_name: String,
    #[serde(default)]
    pub vault_icon: String,
    #[serde(default)]
    pub vault_color: String,
    #[serde(default)]
    pub entries: Vec<Entry>,
}
