use serde::{Deserialize, Serialize};

use super::registry::Registry;
use super::timeline::TimelineEvent;
use super::vault::Vault;

/// Current layout version of `store.json`.
pub const STORE_VERSION: u32 = 1;

/// Everything persisted for one workspace.
///
/// Passed by reference to every operation; nothing else holds state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub entries: Registry,
    #[serde(default)]
    pub vaults: Vec<Vault>,
    /// User-authored investigation timeline.
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
    /// Tool categories offered when cataloguing tools.
    #[serde(default)]
    pub categories: Vec<String>,
}

fn default_version() -> u32 {
    STORE_VERSION
}

impl Default for Store {
    fn default() -> Self {
        Store {
            version: STORE_VERSION,
            entries: Registry::new(),
            vaults: Vec::new(),
            timeline: Vec::new(),
            categories: Vec::new(),
        }
    }
}

impl Store {
    pub fn find_vault(&self, vault_id: &str) -> Option<&Vault> {
        self.vaults.iter().find(|v| v.id == vault_id)
    }

    pub fn find_vault_mut(&mut self, vault_id: &str) -> Option<&mut Vault> {
        self.vaults.iter_mut().find(|v| v.id == vault_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_loads_with_defaults() {
        let store: Store = serde_json::from_str("{}").unwrap();
        assert_eq!(store.version, STORE_VERSION);
        assert!(store.entries.is_empty());
        assert!(store.vaults.is_empty());
        assert!(store.timeline.is_empty());
        assert!(store.categories.is_empty());
    }
}
