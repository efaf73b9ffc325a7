use crate::model::entry::EntryKind;
use crate::model::store::Store;

/// Error type for tool category operations
#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("category name cannot be empty")]
    Empty,
    #[error("category already exists: {0}")]
    Duplicate(String),
    #[error("category not found: {0}")]
    NotFound(String),
    #[error("category '{name}' is used by {count} tool(s)")]
    InUse { name: String, count: usize },
}

pub fn add_category(store: &mut Store, name: &str) -> Result<(), CategoryError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CategoryError::Empty);
    }
    if position(store, name).is_some() {
        return Err(CategoryError::Duplicate(name.to_string()));
    }
    store.categories.push(name.to_string());
    Ok(())
}

/// Remove a category. Refused while any tool still uses it.
pub fn remove_category(store: &mut Store, name: &str) -> Result<String, CategoryError> {
    let idx = position(store, name.trim())
        .ok_or_else(|| CategoryError::NotFound(name.to_string()))?;
    let count = tools_using(store, &store.categories[idx]);
    if count > 0 {
        return Err(CategoryError::InUse {
            name: store.categories[idx].clone(),
            count,
        });
    }
    Ok(store.categories.remove(idx))
}

/// Categories with the number of tools filed under each.
pub fn list_categories(store: &Store) -> Vec<(String, usize)> {
    store
        .categories
        .iter()
        .map(|c| (c.clone(), tools_using(store, c)))
        .collect()
}

fn position(store: &Store, name: &str) -> Option<usize> {
    store
        .categories
        .iter()
        .position(|c| c.eq_ignore_ascii_case(name))
}

fn tools_using(store: &Store, category: &str) -> usize {
    store
        .entries
        .all_entries()
        .filter(|e| match &e.kind {
            EntryKind::Tool(tool) => tool
                .category
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(category)),
            _ => false,
        })
        .count()
}
