pub mod config;
pub mod date;
pub mod entry;
pub mod registry;
pub mod store;
pub mod timeline;
pub mod vault;
pub mod workspace;

pub use config::*;
pub use entry::{ENTRY_TYPES, Entry, EntryKind, PrimaryDate};
pub use registry::*;
pub use store::*;
pub use timeline::*;
pub use vault::*;
pub use workspace::*;
