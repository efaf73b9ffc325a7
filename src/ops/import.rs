use serde::Serialize;
use serde_json::Value;

use crate::model::date::parse_timestamp;
use crate::model::store::Store;
use crate::model::timeline::{Confidence, TimelineEvent};
use crate::model::vault::VaultExport;
use crate::ops::vault_ops::{VaultError, VaultStyle, create_vault};

/// Fields every imported timeline event must carry.
const REQUIRED_EVENT_FIELDS: [&str; 5] = ["id", "timestamp", "title", "category", "confidence"];

/// Error type for import operations
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("malformed import file: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("import file has no \"events\" array")]
    MissingEvents,
    #[error("no events found in import file")]
    NoEvents,
    #[error("event {index}: missing or non-string field '{field}'")]
    MissingField { index: usize, field: &'static str },
    #[error("event {index}: invalid timestamp '{value}'")]
    InvalidTimestamp { index: usize, value: String },
    #[error("event {index}: unknown confidence '{value}'")]
    InvalidConfidence { index: usize, value: String },
    #[error("vault error: {0}")]
    Vault(#[from] VaultError),
}

/// Result of a timeline import
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineImport {
    pub added: usize,
    pub replaced: usize,
}

/// Result of a vault import
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VaultImport {
    pub vault_id: String,
    /// Entries newly inserted into the registry
    pub inserted: usize,
    /// Entries already present and simply joined to the vault
    pub joined: usize,
}

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

/// Parse and validate a `{ "events": [...] }` document. Any bad event rejects
/// the whole document.
pub fn parse_timeline_import(text: &str) -> Result<Vec<TimelineEvent>, ImportError> {
    let doc: Value = serde_json::from_str(text)?;
    let events = doc
        .get("events")
        .and_then(Value::as_array)
        .ok_or(ImportError::MissingEvents)?;
    if events.is_empty() {
        return Err(ImportError::NoEvents);
    }
    events
        .iter()
        .enumerate()
        .map(|(index, raw)| parse_event(index, raw))
        .collect()
}

fn parse_event(index: usize, raw: &Value) -> Result<TimelineEvent, ImportError> {
    let mut required = [""; 5];
    for (slot, field) in required.iter_mut().zip(REQUIRED_EVENT_FIELDS) {
        *slot = raw
            .get(field)
            .and_then(Value::as_str)
            .ok_or(ImportError::MissingField { index, field })?;
    }
    let [id, timestamp, title, category, confidence] = required;

    let timestamp = parse_timestamp(timestamp).ok_or_else(|| ImportError::InvalidTimestamp {
        index,
        value: timestamp.to_string(),
    })?;
    let confidence =
        Confidence::parse(confidence).ok_or_else(|| ImportError::InvalidConfidence {
            index,
            value: confidence.to_string(),
        })?;
    let optional = |field: &str| {
        raw.get(field)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    Ok(TimelineEvent {
        id: id.to_string(),
        timestamp: Some(timestamp),
        title: title.to_string(),
        category: category.to_string(),
        notes: optional("notes"),
        confidence,
        evidence: optional("evidence"),
        actor: optional("actor"),
    })
}

/// Merge validated events into the investigation timeline. An event replaces
/// the stored event with the same ID in place, otherwise it is appended.
pub fn import_timeline(store: &mut Store, events: Vec<TimelineEvent>) -> TimelineImport {
    let mut result = TimelineImport::default();
    for event in events {
        match store.timeline.iter_mut().find(|ev| ev.id == event.id) {
            Some(existing) => {
                *existing = event;
                result.replaced += 1;
            }
            None => {
                store.timeline.push(event);
                result.added += 1;
            }
        }
    }
    tracing::debug!(
        added = result.added,
        replaced = result.replaced,
        "imported timeline events"
    );
    result
}

// ---------------------------------------------------------------------------
// Vaults
// ---------------------------------------------------------------------------

pub fn parse_vault_import(text: &str) -> Result<VaultExport, ImportError> {
    Ok(serde_json::from_str(text)?)
}

/// Create a new vault from an export document.
///
/// Entries whose IDs are not yet in the registry are inserted with their old
/// vault tabs cleared; entries already present keep their data and join the
/// vault. Blank icon or color fall back to `defaults`.
pub fn import_vault(
    store: &mut Store,
    doc: VaultExport,
    defaults: &VaultStyle,
) -> Result<VaultImport, ImportError> {
    if doc.vault_name.trim().is_empty() {
        return Err(VaultError::EmptyName.into());
    }

    let mut ids = Vec::with_capacity(doc.entries.len());
    let mut inserted = 0;
    let mut joined = 0;
    for mut entry in doc.entries {
        if entry.id.trim().is_empty() {
            entry.id = uuid::Uuid::new_v4().to_string();
        }
        if ids.contains(&entry.id) {
            continue;
        }
        ids.push(entry.id.clone());
        if store.entries.contains(&entry.id) {
            joined += 1;
        } else {
            entry.custom_tabs.clear();
            store.entries.insert(entry);
            inserted += 1;
        }
    }

    let style = VaultStyle {
        name: doc.vault_name,
        icon: non_blank_or(doc.vault_icon, &defaults.icon),
        color: non_blank_or(doc.vault_color, &defaults.color),
    };
    let vault_id = create_vault(store, style, &ids)?;
    tracing::debug!(vault = %vault_id, inserted, joined, "imported vault");
    Ok(VaultImport {
        vault_id,
        inserted,
        joined,
    })
}

fn non_blank_or(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::{Entry, EntryKind, Keyword};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn defaults() -> VaultStyle {
        VaultStyle {
            name: String::new(),
            icon: "folder".into(),
            color: "#4488FF".into(),
        }
    }

    fn keyword(id: &str) -> Entry {
        let mut e = Entry::new(
            EntryKind::Keyword(Keyword {
                keyword: id.to_string(),
            }),
            Utc::now(),
        );
        e.id = id.to_string();
        e
    }

    const GOOD: &str = r#"{"events": [
        {"id": "e1", "timestamp": "2024-01-02T00:00:00Z", "title": "Domain registered",
         "category": "infra", "confidence": "high", "actor": "registrar"},
        {"id": "e2", "timestamp": "2024-01-01", "title": "First phish",
         "category": "delivery", "confidence": "Critical"}
    ]}"#;

    #[test]
    fn parses_valid_document() {
        let events = parse_timeline_import(GOOD).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].actor, "registrar");
        assert_eq!(events[1].confidence, Confidence::Critical);
        assert_eq!(
            events[1].timestamp,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(events[1].notes, "");
    }

    #[test]
    fn rejects_with_event_index() {
        let missing = r#"{"events": [
            {"id": "a", "timestamp": "2024-01-01", "title": "t", "category": "c", "confidence": "low"},
            {"id": "b", "timestamp": "2024-01-01", "category": "c", "confidence": "low"}
        ]}"#;
        let err = parse_timeline_import(missing).unwrap_err();
        assert!(matches!(err, ImportError::MissingField { index: 1, field: "title" }));
        assert_eq!(err.to_string(), "event 1: missing or non-string field 'title'");

        let bad_ts = r#"{"events": [
            {"id": "a", "timestamp": "yesterday", "title": "t", "category": "c", "confidence": "low"}
        ]}"#;
        assert!(matches!(
            parse_timeline_import(bad_ts),
            Err(ImportError::InvalidTimestamp { index: 0, .. })
        ));

        let bad_conf = r#"{"events": [
            {"id": "a", "timestamp": "2024-01-01", "title": "t", "category": "c", "confidence": "sure"}
        ]}"#;
        assert!(matches!(
            parse_timeline_import(bad_conf),
            Err(ImportError::InvalidConfidence { index: 0, .. })
        ));

        assert!(matches!(
            parse_timeline_import(r#"{"items": []}"#),
            Err(ImportError::MissingEvents)
        ));
        assert!(matches!(
            parse_timeline_import(r#"{"events": []}"#),
            Err(ImportError::NoEvents)
        ));
        assert!(matches!(
            parse_timeline_import("not json"),
            Err(ImportError::Malformed(_))
        ));
    }

    #[test]
    fn import_replaces_by_id_and_appends_rest() {
        let mut store = Store::default();
        store.timeline = parse_timeline_import(GOOD).unwrap();
        store.timeline[0].title = "stale".into();

        let again = r#"{"events": [
            {"id": "e1", "timestamp": "2024-01-02", "title": "fresh", "category": "c", "confidence": "low"},
            {"id": "e3", "timestamp": "2024-01-03", "title": "new", "category": "c", "confidence": "low"}
        ]}"#;
        let result = import_timeline(&mut store, parse_timeline_import(again).unwrap());
        assert_eq!(result, TimelineImport { added: 1, replaced: 1 });
        let titles: Vec<_> = store.timeline.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["fresh", "First phish", "new"]);
    }

    #[test]
    fn vault_import_inserts_new_and_joins_existing() {
        let mut store = Store::default();
        let mut existing = keyword("k1");
        existing.notes = Some("local copy".into());
        store.entries.insert(existing);

        let mut incoming = keyword("k1");
        incoming.notes = Some("remote copy".into());
        let mut fresh = keyword("k2");
        fresh.custom_tabs = vec!["old-vault".into()];
        let doc = VaultExport {
            vault_name: "Imported".into(),
            vault_icon: String::new(),
            vault_color: "#FF0000".into(),
            entries: vec![incoming, fresh],
        };

        let result = import_vault(&mut store, doc, &defaults()).unwrap();
        assert_eq!(result.inserted, 1);
        assert_eq!(result.joined, 1);

        let vault = store.find_vault(&result.vault_id).unwrap();
        assert_eq!(vault.tool_ids, vec!["k1", "k2"]);
        assert_eq!(vault.icon, "folder");
        assert_eq!(vault.color, "#FF0000");

        let k1 = store.entries.find_by_id("k1").unwrap();
        assert_eq!(k1.notes.as_deref(), Some("local copy"));
        assert_eq!(k1.custom_tabs, vec![result.vault_id.clone()]);
        let k2 = store.entries.find_by_id("k2").unwrap();
        assert_eq!(k2.custom_tabs, vec![result.vault_id]);
    }

    #[test]
    fn vault_import_rejects_blank_name() {
        let mut store = Store::default();
        let doc = VaultExport {
            vault_name: " ".into(),
            vault_icon: String::new(),
            vault_color: String::new(),
            entries: vec![keyword("k")],
        };
        assert!(matches!(
            import_vault(&mut store, doc, &defaults()),
            Err(ImportError::Vault(VaultError::EmptyName))
        ));
        assert!(store.entries.is_empty());
        assert!(store.vaults.is_empty());
    }
}
