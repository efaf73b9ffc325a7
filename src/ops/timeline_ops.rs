use serde::{Deserialize, Serialize};

use crate::model::date::parse_timestamp;
use crate::model::store::Store;
use crate::model::timeline::{Confidence, TimelineEvent};
use crate::ops::aggregate::sorted_timeline;

/// Error type for investigation timeline operations
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    #[error("event title cannot be empty")]
    EmptyTitle,
    #[error("invalid timestamp '{0}'")]
    InvalidTimestamp(String),
    #[error("unknown confidence '{0}' (expected info, low, medium, high or critical)")]
    InvalidConfidence(String),
    #[error("event not found: {0}")]
    NotFound(String),
}

/// An event as entered by the user, before validation.
#[derive(Debug, Clone, Default)]
pub struct NewEvent {
    pub timestamp: String,
    pub title: String,
    pub category: String,
    pub confidence: String,
    pub notes: String,
    pub evidence: String,
    pub actor: String,
}

/// The timeline export document: `{ "events": [...] }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineExport {
    pub events: Vec<TimelineEvent>,
}

/// Validate and append an event. Returns the new event ID.
pub fn add_event(store: &mut Store, new: NewEvent) -> Result<String, TimelineError> {
    let title = new.title.trim();
    if title.is_empty() {
        return Err(TimelineError::EmptyTitle);
    }
    let timestamp = parse_timestamp(&new.timestamp)
        .ok_or_else(|| TimelineError::InvalidTimestamp(new.timestamp.clone()))?;
    let confidence = if new.confidence.trim().is_empty() {
        Confidence::Info
    } else {
        Confidence::parse(&new.confidence)
            .ok_or_else(|| TimelineError::InvalidConfidence(new.confidence.clone()))?
    };

    let id = uuid::Uuid::new_v4().to_string();
    store.timeline.push(TimelineEvent {
        id: id.clone(),
        timestamp: Some(timestamp),
        title: title.to_string(),
        category: new.category.trim().to_string(),
        notes: new.notes,
        confidence,
        evidence: new.evidence,
        actor: new.actor,
    });
    tracing::debug!(event = %id, "added timeline event");
    Ok(id)
}

/// Remove an event by exact ID or unique ID prefix.
pub fn remove_event(store: &mut Store, key: &str) -> Result<TimelineEvent, TimelineError> {
    if key.is_empty() {
        return Err(TimelineError::NotFound(key.to_string()));
    }
    let matches: Vec<usize> = store
        .timeline
        .iter()
        .enumerate()
        .filter(|(_, ev)| ev.id == key || ev.id.starts_with(key))
        .map(|(i, _)| i)
        .collect();
    let idx = match store.timeline.iter().position(|ev| ev.id == key) {
        Some(i) => i,
        None if matches.len() == 1 => matches[0],
        None => return Err(TimelineError::NotFound(key.to_string())),
    };
    Ok(store.timeline.remove(idx))
}

/// The investigation timeline in ascending order.
pub fn list_events(store: &Store) -> Vec<TimelineEvent> {
    sorted_timeline(store.timeline.clone())
}

/// Every stored event in stored order, untimed ones included.
pub fn export_timeline(store: &Store) -> TimelineExport {
    TimelineExport {
        events: store.timeline.clone(),
    }
}
