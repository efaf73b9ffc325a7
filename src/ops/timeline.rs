use chrono::{DateTime, Utc};

use crate::model::date::parse_timestamp;
use crate::model::entry::Entry;
use crate::model::timeline::{Confidence, TimelineEvent};

/// Actor recorded on events derived from entries. User-authored timeline
/// events carry their own actor instead.
pub const ENTRY_ACTOR: &str = "vault";

/// Projects entries onto the timeline.
///
/// The render time is fixed at construction, so the same entry always yields
/// the same event from one normalizer.
#[derive(Debug, Clone, Copy)]
pub struct TimelineNormalizer {
    render_time: DateTime<Utc>,
}

impl TimelineNormalizer {
    pub fn new(render_time: DateTime<Utc>) -> Self {
        TimelineNormalizer { render_time }
    }

    pub fn render_time(&self) -> DateTime<Utc> {
        self.render_time
    }

    /// Turn an entry into a timeline event. Never fails.
    ///
    /// Placement, first match wins:
    /// 1. the kind's own date (breach date, credential found date, ...), with
    ///    a kind-specific title and confidence. An unparsable value yields
    ///    `timestamp: None` rather than falling through.
    /// 2. `addedDate`, titled with the display name, confidence info.
    /// 3. the render time, titled `Untimed <type> entry`.
    pub fn normalize(&self, entry: &Entry) -> TimelineEvent {
        let type_name = entry.type_name();
        let (timestamp, title, confidence) = if let Some(primary) = entry.kind.primary_date() {
            (
                parse_timestamp(primary.raw),
                primary.title,
                primary.confidence,
            )
        } else if let Some(added) = entry.added_date {
            (Some(added), entry.display_name(), Confidence::Info)
        } else {
            (
                Some(self.render_time),
                format!("Untimed {} entry", type_name),
                Confidence::Info,
            )
        };

        let title = if title.trim().is_empty() {
            format!("Untitled {} entry", type_name)
        } else {
            title
        };

        TimelineEvent {
            id: entry.id.clone(),
            timestamp,
            title,
            category: type_name.to_string(),
            notes: entry.notes.clone().unwrap_or_default(),
            confidence,
            evidence: entry.kind.evidence().unwrap_or_default().to_string(),
            actor: ENTRY_ACTOR.to_string(),
        }
    }
}
