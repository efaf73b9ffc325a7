use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ov", about = concat!("osint-vault v", env!("CARGO_PKG_VERSION"), " - an investigation notebook"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different workspace directory
    #[arg(short = 'C', long = "workspace-dir", global = true)]
    pub workspace_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new workspace in the current directory
    Init(InitArgs),
    /// List the entry types and their fields
    Types,
    /// Add an entry: ov add <type> field=value ...
    Add(AddArgs),
    /// Show entry details
    Show(IdArg),
    /// Change entry fields or notes
    Edit(EditArgs),
    /// Delete entries (also removes them from every vault)
    Rm(RmArgs),
    /// Toggle the starred flag
    Star(IdArg),
    /// Toggle the pinned flag
    Pin(IdArg),
    /// Add or remove tags
    Tag(TagArgs),
    /// List entries
    List(ListArgs),
    /// Search entry fields by regex
    Search(SearchArgs),
    /// Vault management
    Vault(VaultCmd),
    /// Investigation timeline
    Timeline(TimelineCmd),
    /// Tool categories
    Category(CategoryCmd),
    /// Show dashboard statistics
    Stats,
    /// Validate vault memberships
    Check(CheckArgs),
}

// ---------------------------------------------------------------------------
// Init args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct InitArgs {
    /// Workspace name (default: inferred from directory name)
    #[arg(long)]
    pub name: Option<String>,
    /// Seed a tool category (repeatable)
    #[arg(long)]
    pub category: Vec<String>,
}

// ---------------------------------------------------------------------------
// Entry args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct IdArg {
    /// Entry ID (or unique prefix)
    pub id: String,
}

#[derive(Args)]
pub struct AddArgs {
    /// Entry type (see `ov types`)
    #[arg(value_name = "TYPE")]
    pub entry_type: String,
    /// Fields as key=value, or key:=json for lists and raw JSON
    pub fields: Vec<String>,
    /// Tag (repeatable)
    #[arg(long)]
    pub tag: Vec<String>,
    /// Free-text notes
    #[arg(long)]
    pub note: Option<String>,
    /// Also add to this vault (repeatable)
    #[arg(long)]
    pub vault: Vec<String>,
}

#[derive(Args)]
pub struct EditArgs {
    /// Entry ID (or unique prefix)
    pub id: String,
    /// Fields as key=value or key:=json; key:=null clears a field
    pub fields: Vec<String>,
    /// Replace notes (empty string clears them)
    #[arg(long)]
    pub note: Option<String>,
}

#[derive(Args)]
pub struct RmArgs {
    /// Entry IDs to delete
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Args)]
pub struct TagArgs {
    /// Entry ID
    pub id: String,
    /// Action: "add" or "rm"
    pub action: String,
    /// Tag name
    pub tag: String,
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter by entry type
    #[arg(long = "type", value_name = "TYPE")]
    pub entry_type: Option<String>,
    /// Filter by tag
    #[arg(long)]
    pub tag: Option<String>,
    /// Only entries in this vault
    #[arg(long)]
    pub vault: Option<String>,
    /// Only starred entries
    #[arg(long)]
    pub starred: bool,
    /// Only pinned entries
    #[arg(long)]
    pub pinned: bool,
    /// Sort order: added, name or type
    #[arg(long, default_value = "added")]
    pub sort: String,
    /// Only entries with a field matching this regex
    #[arg(long)]
    pub filter: Option<String>,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Regex pattern to search for (case-insensitive)
    pub pattern: String,
}

// ---------------------------------------------------------------------------
// Vault management
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct VaultCmd {
    #[command(subcommand)]
    pub action: VaultAction,
}

#[derive(Subcommand)]
pub enum VaultAction {
    /// Create a vault, optionally with initial entries
    New(VaultNewArgs),
    /// List vaults
    Ls,
    /// Show a vault's entries
    Show(VaultArg),
    /// Rename or restyle a vault
    Edit(VaultEditArgs),
    /// Replace a vault's membership
    Set(VaultMembersArgs),
    /// Add entries to a vault
    Add(VaultMembersArgs),
    /// Remove entries from a vault
    Remove(VaultMembersArgs),
    /// Delete a vault (entries are kept)
    Rm(VaultArg),
    /// Export a vault to JSON
    Export(VaultExportArgs),
    /// Import a vault export as a new vault
    Import(FileArg),
    /// Show a vault's entries as a timeline
    Timeline(VaultArg),
}

#[derive(Args)]
pub struct VaultArg {
    /// Vault ID, unique ID prefix, or unique name
    pub vault: String,
}

#[derive(Args)]
pub struct VaultNewArgs {
    /// Vault name
    pub name: String,
    /// Initial entry IDs
    pub entries: Vec<String>,
    /// Icon (default from workspace.toml)
    #[arg(long)]
    pub icon: Option<String>,
    /// Color (default from workspace.toml)
    #[arg(long)]
    pub color: Option<String>,
}

#[derive(Args)]
pub struct VaultEditArgs {
    /// Vault ID, unique ID prefix, or unique name
    pub vault: String,
    /// New name
    #[arg(long)]
    pub name: Option<String>,
    /// New icon
    #[arg(long)]
    pub icon: Option<String>,
    /// New color
    #[arg(long)]
    pub color: Option<String>,
}

#[derive(Args)]
pub struct VaultMembersArgs {
    /// Vault ID, unique ID prefix, or unique name
    pub vault: String,
    /// Entry IDs
    pub entries: Vec<String>,
}

#[derive(Args)]
pub struct VaultExportArgs {
    /// Vault ID, unique ID prefix, or unique name
    pub vault: String,
    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Args)]
pub struct FileArg {
    /// JSON file to import
    pub file: String,
}

// ---------------------------------------------------------------------------
// Investigation timeline
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct TimelineCmd {
    #[command(subcommand)]
    pub action: TimelineAction,
}

#[derive(Subcommand)]
pub enum TimelineAction {
    /// List events in chronological order
    Ls(TimelineLsArgs),
    /// Add an event
    Add(TimelineAddArgs),
    /// Remove an event
    Rm(TimelineRmArgs),
    /// Import events from a JSON file
    Import(FileArg),
    /// Export events to JSON
    Export(TimelineExportArgs),
}

#[derive(Args)]
pub struct TimelineLsArgs {
    /// Merge in events derived from every entry
    #[arg(long)]
    pub entries: bool,
}

#[derive(Args)]
pub struct TimelineAddArgs {
    /// When it happened (RFC 3339, "YYYY-MM-DD HH:MM" or "YYYY-MM-DD")
    pub timestamp: String,
    /// What happened
    pub title: String,
    #[arg(long, default_value = "")]
    pub category: String,
    /// info, low, medium, high or critical
    #[arg(long, default_value = "info")]
    pub confidence: String,
    #[arg(long, default_value = "")]
    pub notes: String,
    /// Link or reference backing the event
    #[arg(long, default_value = "")]
    pub evidence: String,
    /// Who was involved
    #[arg(long, default_value = "")]
    pub actor: String,
}

#[derive(Args)]
pub struct TimelineRmArgs {
    /// Event ID (or unique prefix)
    pub id: String,
}

#[derive(Args)]
pub struct TimelineExportArgs {
    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

// ---------------------------------------------------------------------------
// Categories and maintenance
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct CategoryCmd {
    #[command(subcommand)]
    pub action: CategoryAction,
}

#[derive(Subcommand)]
pub enum CategoryAction {
    /// List categories with tool counts
    Ls,
    /// Add a category
    Add(CategoryArg),
    /// Remove an unused category
    Rm(CategoryArg),
}

#[derive(Args)]
pub struct CategoryArg {
    pub name: String,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Repair memberships, making vault lists authoritative
    #[arg(long)]
    pub fix: bool,
}
