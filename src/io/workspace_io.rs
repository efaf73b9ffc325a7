use std::fs;
use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};

use crate::io::store_io::{self, StoreError};
use crate::model::config::WorkspaceConfig;
use crate::model::workspace::Workspace;

pub const OSINT_DIR: &str = "osint";
pub const CONFIG_FILE: &str = "workspace.toml";

/// Error type for workspace I/O operations
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("not an osint-vault workspace: no osint/workspace.toml found")]
    NotAWorkspace,
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse workspace.toml: {0}")]
    ConfigParseError(#[from] toml::de::Error),
    #[error("invalid [timeline] date_format '{0}' in workspace.toml")]
    InvalidDateFormat(String),
    #[error("{0}")]
    Store(#[from] StoreError),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Discover the workspace by walking up from the given directory, looking
/// for `osint/workspace.toml`.
pub fn discover_workspace(start: &Path) -> Result<PathBuf, WorkspaceError> {
    let mut current = start.to_path_buf();
    loop {
        let osint_dir = current.join(OSINT_DIR);
        if osint_dir.is_dir() && osint_dir.join(CONFIG_FILE).exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(WorkspaceError::NotAWorkspace);
        }
    }
}

pub fn read_config(osint_dir: &Path) -> Result<WorkspaceConfig, WorkspaceError> {
    let config_path = osint_dir.join(CONFIG_FILE);
    let text = fs::read_to_string(&config_path).map_err(|e| WorkspaceError::ReadError {
        path: config_path.clone(),
        source: e,
    })?;
    let config: WorkspaceConfig = toml::from_str(&text)?;
    let pattern = &config.timeline.date_format;
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(WorkspaceError::InvalidDateFormat(pattern.clone()));
    }
    Ok(config)
}

/// Load config and store from the given workspace root.
pub fn load_workspace(root: &Path) -> Result<Workspace, WorkspaceError> {
    let osint_dir = root.join(OSINT_DIR);
    if !osint_dir.is_dir() {
        return Err(WorkspaceError::NotAWorkspace);
    }
    let config = read_config(&osint_dir)?;
    let store = store_io::load_store(&osint_dir)?;
    Ok(Workspace {
        root: root.to_path_buf(),
        osint_dir,
        config,
        store,
    })
}

/// Persist the workspace's store.
pub fn save_workspace(workspace: &Workspace) -> Result<(), WorkspaceError> {
    store_io::save_store(&workspace.osint_dir, &workspace.store)?;
    Ok(())
}

/// The `[log] level` of the workspace containing `start`, if there is one and
/// its config parses.
pub fn configured_log_level(start: &Path) -> Option<String> {
    let root = discover_workspace(start).ok()?;
    read_config(&root.join(OSINT_DIR))
        .ok()
        .map(|config| config.log.level)
}
