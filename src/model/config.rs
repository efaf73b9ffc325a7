use serde::{Deserialize, Serialize};

/// Configuration from workspace.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    pub workspace: WorkspaceInfo,
    #[serde(default)]
    pub vaults: VaultDefaults,
    #[serde(default)]
    pub timeline: TimelineConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceInfo {
    pub name: String,
}

/// Styling applied to new vaults when none is given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultDefaults {
    #[serde(default = "default_icon")]
    pub default_icon: String,
    #[serde(default = "default_color")]
    pub default_color: String,
}

impl Default for VaultDefaults {
    fn default() -> Self {
        VaultDefaults {
            default_icon: default_icon(),
            default_color: default_color(),
        }
    }
}

fn default_icon() -> String {
    "folder".to_string()
}

fn default_color() -> String {
    "#4488FF".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineConfig {
    /// chrono format string for human-readable timestamps
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        TimelineConfig {
            date_format: default_date_format(),
        }
    }
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when `OV_LOG` is unset (e.g. "warn", "osint_vault=debug")
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}
