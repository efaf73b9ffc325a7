use std::fs;
use std::path::{Path, PathBuf};

use crate::io::recovery::{RecoveryCategory, RecoveryEntry, atomic_write, log_recovery};
use crate::model::store::{STORE_VERSION, Store};

pub const STORE_FILE: &str = "store.json";

/// Error type for store persistence
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{path} has version {found}, newer than supported version {STORE_VERSION}")]
    UnsupportedVersion { path: PathBuf, found: u32 },
    #[error("could not write {path}: {source} (see .recovery.log)")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize store: {0}")]
    SerializeError(#[from] serde_json::Error),
}

pub fn store_path(osint_dir: &Path) -> PathBuf {
    osint_dir.join(STORE_FILE)
}

/// Load `store.json`. A missing file is an empty store.
pub fn load_store(osint_dir: &Path) -> Result<Store, StoreError> {
    let path = store_path(osint_dir);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no store file, starting empty");
        return Ok(Store::default());
    }
    let text = fs::read_to_string(&path).map_err(|source| StoreError::ReadError {
        path: path.clone(),
        source,
    })?;
    let store: Store = serde_json::from_str(&text).map_err(|source| StoreError::ParseError {
        path: path.clone(),
        source,
    })?;
    if store.version > STORE_VERSION {
        return Err(StoreError::UnsupportedVersion {
            path,
            found: store.version,
        });
    }
    tracing::debug!(
        entries = store.entries.len(),
        vaults = store.vaults.len(),
        events = store.timeline.len(),
        "loaded store"
    );
    Ok(store)
}

/// Save `store.json` atomically. On failure the serialized store is appended
/// to the recovery log before the error is returned.
pub fn save_store(osint_dir: &Path, store: &Store) -> Result<(), StoreError> {
    let path = store_path(osint_dir);
    let mut content = serde_json::to_string_pretty(store)?;
    content.push('\n');
    if let Err(e) = atomic_write(&path, content.as_bytes()) {
        log_recovery(
            osint_dir,
            RecoveryEntry {
                timestamp: chrono::Utc::now(),
                category: RecoveryCategory::Write,
                description: "store write failed".to_string(),
                fields: vec![
                    ("Target".to_string(), STORE_FILE.to_string()),
                    ("Error".to_string(), e.to_string()),
                ],
                body: content,
            },
        );
        return Err(StoreError::WriteError { path, source: e });
    }
    Ok(())
}
