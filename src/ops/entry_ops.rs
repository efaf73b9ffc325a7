use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::model::entry::{ENTRY_TYPES, Entry, EntryKind};
use crate::model::store::Store;

/// Envelope keys that field assignments may not touch.
const RESERVED_FIELDS: &[&str] = &[
    "id",
    "type",
    "addedDate",
    "starred",
    "pinned",
    "tags",
    "customTabs",
    "notes",
];

/// Numeric kind fields. A plain `key=value` for these is read as a number.
const NUMERIC_FIELDS: &[(&str, &str)] = &[
    ("breach", "records"),
    ("location", "latitude"),
    ("location", "longitude"),
];

/// Error type for entry operations
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error("entry not found: {0}")]
    NotFound(String),
    #[error("unknown entry type '{0}' (see `ov types`)")]
    UnknownType(String),
    #[error("invalid {kind} entry: {reason}")]
    InvalidFields { kind: String, reason: String },
    #[error("{kind} entries have no field '{field}'")]
    UnknownField { kind: String, field: String },
    #[error("'{0}' is managed separately and cannot be set as a field")]
    ReservedField(String),
    #[error("invalid field assignment '{0}' (expected key=value or key:=json)")]
    BadAssignment(String),
}

/// One `key=value` (string) or `key:=json` (raw JSON) assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldAssignment {
    pub key: String,
    pub value: Value,
}

/// Parse a command-line field assignment.
pub fn parse_assignment(raw: &str) -> Result<FieldAssignment, EntryError> {
    let bad = || EntryError::BadAssignment(raw.to_string());
    let eq = raw.find('=').ok_or_else(bad)?;
    let (key, value) = if eq > 0 && raw.as_bytes()[eq - 1] == b':' {
        let json = &raw[eq + 1..];
        let value: Value = serde_json::from_str(json).map_err(|_| bad())?;
        (&raw[..eq - 1], value)
    } else {
        (&raw[..eq], Value::String(raw[eq + 1..].to_string()))
    };
    let key = key.trim();
    if key.is_empty() {
        return Err(bad());
    }
    Ok(FieldAssignment {
        key: key.to_string(),
        value,
    })
}

// ---------------------------------------------------------------------------
// Building kinds
// ---------------------------------------------------------------------------

/// Build an entry kind of `type_name` from field assignments.
pub fn build_kind(type_name: &str, fields: &[FieldAssignment]) -> Result<EntryKind, EntryError> {
    if !ENTRY_TYPES.contains(&type_name) {
        return Err(EntryError::UnknownType(type_name.to_string()));
    }
    let mut map = Map::new();
    apply_fields(type_name, &mut map, fields)?;
    map.insert("type".to_string(), Value::String(type_name.to_string()));
    kind_from_map(type_name, map, fields)
}

fn apply_fields(
    type_name: &str,
    map: &mut Map<String, Value>,
    fields: &[FieldAssignment],
) -> Result<(), EntryError> {
    for field in fields {
        if RESERVED_FIELDS.contains(&field.key.as_str()) {
            return Err(EntryError::ReservedField(field.key.clone()));
        }
        if field.value.is_null() {
            map.remove(&field.key);
        } else {
            map.insert(field.key.clone(), coerce(type_name, field));
        }
    }
    Ok(())
}

/// The value to store for `field`: numeric text becomes a JSON number when
/// the kind's field is numeric. Anything else is kept as given.
fn coerce(type_name: &str, field: &FieldAssignment) -> Value {
    if let Value::String(text) = &field.value
        && NUMERIC_FIELDS.contains(&(type_name, field.key.as_str()))
        && let Ok(number @ Value::Number(_)) = serde_json::from_str::<Value>(text.trim())
    {
        return number;
    }
    field.value.clone()
}

fn kind_from_map(
    type_name: &str,
    map: Map<String, Value>,
    fields: &[FieldAssignment],
) -> Result<EntryKind, EntryError> {
    let invalid = |reason: String| EntryError::InvalidFields {
        kind: type_name.to_string(),
        reason,
    };
    let kind: EntryKind =
        serde_json::from_value(Value::Object(map)).map_err(|e| invalid(e.to_string()))?;

    // serde drops keys the kind does not know; catch them by reading back.
    // Empty lists are skipped on write, so they cannot be checked this way.
    let written = serde_json::to_value(&kind).map_err(|e| invalid(e.to_string()))?;
    for field in fields {
        let empty = field.value.is_null() || field.value.as_array().is_some_and(|a| a.is_empty());
        if !empty && written.get(&field.key).is_none() {
            return Err(EntryError::UnknownField {
                kind: type_name.to_string(),
                field: field.key.clone(),
            });
        }
    }
    if kind.display_name().trim().is_empty() {
        return Err(invalid("the identifying field cannot be empty".to_string()));
    }
    Ok(kind)
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// A new entry as submitted from a form.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub kind: EntryKind,
    pub tags: Vec<String>,
    pub notes: Option<String>,
}

/// Add an entry stamped with `now`. Returns the assigned ID.
pub fn add_entry(store: &mut Store, new: NewEntry, now: DateTime<Utc>) -> String {
    let mut entry = Entry::new(new.kind, now);
    for tag in &new.tags {
        push_tag(&mut entry, tag);
    }
    entry.notes = new.notes.filter(|n| !n.trim().is_empty());
    let id = entry.id.clone();
    tracing::debug!(entry = %id, kind = entry.type_name(), "added entry");
    store.entries.insert(entry);
    id
}

/// Apply field assignments to an existing entry. `key:=null` clears an
/// optional field. The entry keeps its kind.
pub fn edit_fields(
    store: &mut Store,
    entry_id: &str,
    fields: &[FieldAssignment],
) -> Result<(), EntryError> {
    let entry = store
        .entries
        .find_by_id_mut(entry_id)
        .ok_or_else(|| EntryError::NotFound(entry_id.to_string()))?;
    let type_name = entry.type_name();
    let Value::Object(mut map) =
        serde_json::to_value(&entry.kind).map_err(|e| EntryError::InvalidFields {
            kind: type_name.to_string(),
            reason: e.to_string(),
        })?
    else {
        return Err(EntryError::InvalidFields {
            kind: type_name.to_string(),
            reason: "entry fields are not an object".to_string(),
        });
    };
    apply_fields(type_name, &mut map, fields)?;
    entry.kind = kind_from_map(type_name, map, fields)?;
    Ok(())
}

/// Delete an entry and scrub its ID from every vault.
pub fn delete_entry(store: &mut Store, entry_id: &str) -> Result<Entry, EntryError> {
    let entry = store
        .entries
        .remove_by_id(entry_id)
        .ok_or_else(|| EntryError::NotFound(entry_id.to_string()))?;
    for vault in &mut store.vaults {
        vault.tool_ids.retain(|id| id != entry_id);
    }
    tracing::debug!(entry = %entry_id, "deleted entry");
    Ok(entry)
}

/// Flip the starred flag. Returns the new value.
pub fn toggle_star(store: &mut Store, entry_id: &str) -> Result<bool, EntryError> {
    let entry = find_mut(store, entry_id)?;
    entry.starred = !entry.starred;
    Ok(entry.starred)
}

/// Flip the pinned flag. Returns the new value.
pub fn toggle_pin(store: &mut Store, entry_id: &str) -> Result<bool, EntryError> {
    let entry = find_mut(store, entry_id)?;
    entry.pinned = !entry.pinned;
    Ok(entry.pinned)
}

pub fn add_tag(store: &mut Store, entry_id: &str, tag: &str) -> Result<(), EntryError> {
    let entry = find_mut(store, entry_id)?;
    push_tag(entry, tag);
    Ok(())
}

pub fn remove_tag(store: &mut Store, entry_id: &str, tag: &str) -> Result<(), EntryError> {
    let entry = find_mut(store, entry_id)?;
    let tag = tag.trim().trim_start_matches('#');
    entry.tags.retain(|t| t != tag);
    Ok(())
}

/// Replace the entry's notes. Empty text clears them.
pub fn set_notes(store: &mut Store, entry_id: &str, notes: &str) -> Result<(), EntryError> {
    let entry = find_mut(store, entry_id)?;
    entry.notes = if notes.trim().is_empty() {
        None
    } else {
        Some(notes.to_string())
    };
    Ok(())
}

/// Find an entry by exact ID or unique ID prefix. An empty key matches nothing.
pub fn resolve_entry_id(store: &Store, key: &str) -> Option<String> {
    if key.is_empty() {
        return None;
    }
    if store.entries.contains(key) {
        return Some(key.to_string());
    }
    let mut matches = store
        .entries
        .all_entries()
        .filter(|e| e.id.starts_with(key))
        .map(|e| e.id.clone());
    let first = matches.next()?;
    if matches.next().is_some() {
        return None;
    }
    Some(first)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn find_mut<'a>(store: &'a mut Store, entry_id: &str) -> Result<&'a mut Entry, EntryError> {
    store
        .entries
        .find_by_id_mut(entry_id)
        .ok_or_else(|| EntryError::NotFound(entry_id.to_string()))
}

fn push_tag(entry: &mut Entry, tag: &str) {
    let tag = tag.trim().trim_start_matches('#');
    if !tag.is_empty() && !entry.tags.iter().any(|t| t == tag) {
        entry.tags.push(tag.to_string());
    }
}
