use std::path::PathBuf;

use super::config::WorkspaceConfig;
use super::store::Store;

/// A fully loaded workspace
#[derive(Debug)]
pub struct Workspace {
    /// Root directory of the workspace (parent of `osint/`)
    pub root: PathBuf,
    /// Path to the `osint/` directory
    pub osint_dir: PathBuf,
    /// Parsed workspace.toml
    pub config: WorkspaceConfig,
    /// Entries, vaults, investigation timeline and categories
    pub store: Store,
}
