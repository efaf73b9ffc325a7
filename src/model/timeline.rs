use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How much weight a timeline event carries, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl Confidence {
    pub const ALL: [Confidence; 5] = [
        Confidence::Info,
        Confidence::Low,
        Confidence::Medium,
        Confidence::High,
        Confidence::Critical,
    ];

    /// Case-insensitive parse of a level name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Some(Confidence::Info),
            "low" => Some(Confidence::Low),
            "medium" => Some(Confidence::Medium),
            "high" => Some(Confidence::High),
            "critical" => Some(Confidence::Critical),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Confidence::Info => "info",
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
            Confidence::Critical => "critical",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chronologically orderable event.
///
/// Derived from an entry by the normalizer (never stored), or authored by the
/// user on the investigation timeline (stored). `timestamp` is `None` when the
/// source date could not be parsed; such events are dropped from sorted views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: String,
    #[serde(with = "super::date::lenient", default)]
    pub timestamp: Option<DateTime<Utc>>,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub notes: String,
    pub confidence: Confidence,
    #[serde(default)]
    pub evidence: String,
    #[serde(default)]
    pub actor: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_parse_is_case_insensitive() {
        assert_eq!(Confidence::parse("HIGH"), Some(Confidence::High));
        assert_eq!(Confidence::parse(" info "), Some(Confidence::Info));
        assert_eq!(Confidence::parse("severe"), None);
    }

    #[test]
    fn confidence_orders_by_weight() {
        assert!(Confidence::Critical > Confidence::High);
        assert!(Confidence::Info < Confidence::Low);
    }

    #[test]
    fn event_serializes_lowercase_confidence() {
        let ev = TimelineEvent {
            id: "t1".into(),
            timestamp: None,
            title: "Call".into(),
            category: "interview".into(),
            notes: String::new(),
            confidence: Confidence::Medium,
            evidence: String::new(),
            actor: "analyst".into(),
        };
        let v = serde_json::to_value(&ev).unwrap();
        assert_eq!(v["confidence"], "medium");
        assert!(v["timestamp"].is_null());
    }
}
