pub mod aggregate;
pub mod category_ops;
pub mod check;
pub mod entry_ops;
pub mod import;
pub mod search;
pub mod timeline;
pub mod timeline_ops;
pub mod vault_ops;
