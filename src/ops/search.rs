use std::ops::Range;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::model::entry::Entry;
use crate::model::store::Store;

/// Envelope keys that are bookkeeping rather than content.
const SKIPPED_KEYS: &[&str] = &["id", "addedDate", "starred", "pinned", "customTabs", "type"];

/// A search hit on one field of one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub entry_id: String,
    /// JSON key of the matched field (`tags` for tag hits)
    pub field: String,
    pub text: String,
    #[serde(skip)]
    pub spans: Vec<Range<usize>>,
}

/// Collect all non-overlapping match byte-ranges for a regex in the given text.
fn find_matches(re: &Regex, text: &str) -> Vec<Range<usize>> {
    re.find_iter(text).map(|m| m.start()..m.end()).collect()
}

/// Search every content field of every entry, in registry order.
pub fn search_entries(store: &Store, re: &Regex) -> Vec<SearchHit> {
    let mut hits = Vec::new();
    for entry in store.entries.all_entries() {
        search_entry(re, entry, &mut hits);
    }
    hits
}

/// Whether any content field of the entry matches.
pub fn entry_matches(re: &Regex, entry: &Entry) -> bool {
    let mut hits = Vec::new();
    search_entry(re, entry, &mut hits);
    !hits.is_empty()
}

/// Search one entry's string fields, including tags, notes and list fields.
fn search_entry(re: &Regex, entry: &Entry, hits: &mut Vec<SearchHit>) {
    let Ok(Value::Object(map)) = serde_json::to_value(entry) else {
        return;
    };
    for (key, value) in &map {
        if SKIPPED_KEYS.contains(&key.as_str()) {
            continue;
        }
        match value {
            Value::String(text) => push_hit(re, entry, key, text, hits),
            Value::Array(items) => {
                for item in items {
                    if let Value::String(text) = item {
                        push_hit(re, entry, key, text, hits);
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_hit(re: &Regex, entry: &Entry, key: &str, text: &str, hits: &mut Vec<SearchHit>) {
    let spans = find_matches(re, text);
    if !spans.is_empty() {
        hits.push(SearchHit {
            entry_id: entry.id.clone(),
            field: key.to_string(),
            text: text.to_string(),
            spans,
        });
    }
}

/// Build a case-insensitive regex from user input.
pub fn build_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    regex::RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
}
