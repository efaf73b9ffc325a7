use std::fmt::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::model::date::format_timestamp;
use crate::model::entry::Entry;
use crate::model::store::Store;
use crate::model::timeline::TimelineEvent;
use crate::model::vault::Vault;
use crate::ops::aggregate::Dashboard;

/// Field help for `ov types`, in catalogue order. `?` marks optional fields.
pub const TYPE_FIELDS: [(&str, &str); 34] = [
    ("tool", "name, url?, category?, description?"),
    ("email", "email, source?"),
    ("phone", "number, country?"),
    ("cryptoAddress", "address, currency?"),
    ("location", "name, latitude?, longitude?"),
    ("link", "url, title?"),
    ("media", "filename, url?, mediaType?"),
    ("password", "value, service?"),
    ("keyword", "keyword"),
    ("socialMedia", "platform, handle, url?"),
    ("domain", "value, registrar?"),
    ("username", "value, platform?"),
    ("threatIntel", "name, severity?, date?, source?"),
    ("malware", "name, family?, hash?, firstSeen?"),
    ("vulnerability", "cve, description?, url?"),
    ("breach", "company, date?, records?, source?"),
    ("credential", "service, username?, dateFound?, source?"),
    ("forum", "name, url?"),
    ("vendor", "name, market?, url?"),
    ("telegram", "channel, url?"),
    ("publicRecord", "title, jurisdiction?, date?, link?"),
    ("document", "title, filename?, url?"),
    ("archive", "url, service?, timestamp?"),
    ("wireless", "ssid, bssid?"),
    ("caseStudy", "title, publishedDate?, source?, url?"),
    ("script", "name, language?, code?"),
    ("ipAddress", "value, asn?"),
    ("person", "name, aliases?"),
    ("organization", "name, url?"),
    ("vehicle", "plate, make?, model?"),
    ("dork", "query, engine?"),
    ("hash", "value, algorithm?"),
    ("certificate", "subject, issuer?, fingerprint?"),
    ("paste", "site, url?"),
];

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryJson<'a> {
    #[serde(flatten)]
    pub entry: &'a Entry,
    pub display_name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultJson<'a> {
    #[serde(flatten)]
    pub vault: &'a Vault,
    /// Member entries that resolve
    pub entry_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultDetailJson<'a> {
    #[serde(flatten)]
    pub vault: &'a Vault,
    pub entries: Vec<EntryJson<'a>>,
}

#[derive(Serialize)]
pub struct SearchHitJson {
    pub id: String,
    #[serde(rename = "type")]
    pub type_name: &'static str,
    pub name: String,
    pub field: String,
    pub text: String,
}

#[derive(Serialize)]
pub struct CategoryJson {
    pub name: String,
    pub tools: usize,
}

#[derive(Serialize)]
pub struct TypeJson {
    #[serde(rename = "type")]
    pub type_name: &'static str,
    pub fields: Vec<&'static str>,
}

pub fn entry_to_json(entry: &Entry) -> EntryJson<'_> {
    EntryJson {
        entry,
        display_name: entry.display_name(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// First eight characters of an ID, enough to address it from the CLI.
pub fn short_id(id: &str) -> &str {
    id.char_indices().nth(8).map_or(id, |(i, _)| &id[..i])
}

/// Render `ts` with a strftime pattern. A pattern chrono cannot render falls
/// back to the canonical RFC 3339 form.
pub fn format_time(ts: &DateTime<Utc>, date_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", ts.format(date_format)).is_err() {
        return format_timestamp(ts);
    }
    out
}

fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a single entry as a one-line summary
pub fn format_entry_line(entry: &Entry) -> String {
    let pin = if entry.pinned { '^' } else { ' ' };
    let star = if entry.starred { '*' } else { ' ' };
    let tags = if entry.tags.is_empty() {
        String::new()
    } else {
        format!("  {}", format_tags(&entry.tags))
    };
    format!(
        "{}{} {}  {:<14} {}{}",
        pin,
        star,
        short_id(&entry.id),
        entry.type_name(),
        entry.display_name(),
        tags
    )
}

/// Format detailed entry view
pub fn format_entry_detail(entry: &Entry, store: &Store, date_format: &str) -> Vec<String> {
    let mut lines = vec![format!("{} ({})", entry.display_name(), entry.type_name())];
    lines.push(format!("id: {}", entry.id));
    if let Some(added) = entry.added_date {
        lines.push(format!("added: {}", format_time(&added, date_format)));
    }
    let mut flags = Vec::new();
    if entry.starred {
        flags.push("starred");
    }
    if entry.pinned {
        flags.push("pinned");
    }
    if !flags.is_empty() {
        lines.push(format!("flags: {}", flags.join(", ")));
    }
    if !entry.tags.is_empty() {
        lines.push(format!("tags: {}", format_tags(&entry.tags)));
    }
    if !entry.custom_tabs.is_empty() {
        let names: Vec<String> = entry
            .custom_tabs
            .iter()
            .map(|id| match store.find_vault(id) {
                Some(v) => v.name.clone(),
                None => format!("{} (missing)", short_id(id)),
            })
            .collect();
        lines.push(format!("vaults: {}", names.join(", ")));
    }

    if let Ok(Value::Object(fields)) = serde_json::to_value(&entry.kind) {
        lines.push(String::new());
        for (key, value) in &fields {
            if key == "type" {
                continue;
            }
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Array(items) => items
                    .iter()
                    .map(|v| v.as_str().map_or_else(|| v.to_string(), str::to_string))
                    .collect::<Vec<_>>()
                    .join(", "),
                other => other.to_string(),
            };
            lines.push(format!("{}: {}", key, text));
        }
    }

    if let Some(notes) = &entry.notes {
        lines.push(String::new());
        lines.push("notes:".to_string());
        for line in notes.lines() {
            lines.push(format!("  {}", line));
        }
    }
    lines
}

/// Format one timeline event as a line
pub fn format_event_line(event: &TimelineEvent, date_format: &str) -> String {
    let when = event
        .timestamp
        .map(|ts| format_time(&ts, date_format))
        .unwrap_or_else(|| "(undated)".to_string());
    let category = if event.category.is_empty() {
        String::new()
    } else {
        format!("  ({})", event.category)
    };
    format!(
        "{}  {:<10} {}{}",
        when,
        format!("[{}]", event.confidence),
        event.title,
        category
    )
}

pub fn format_vault_line(vault: &Vault, entry_count: usize) -> String {
    let icon = if vault.icon.is_empty() {
        String::new()
    } else {
        format!("[{}] ", vault.icon)
    };
    format!(
        "{} {}{}  ({} entries)",
        short_id(&vault.id),
        icon,
        vault.name,
        entry_count
    )
}

pub fn format_dashboard(dash: &Dashboard) -> Vec<String> {
    let mut lines = vec![format!(
        "{} entries ({} starred, {} pinned), {} vaults, {} investigation events",
        dash.total_entries,
        dash.starred,
        dash.pinned,
        dash.vaults.len(),
        dash.investigation_events
    )];

    if !dash.by_type.is_empty() {
        lines.push(String::new());
        lines.push("By type:".to_string());
        for tc in &dash.by_type {
            lines.push(format!("  {:<14} {}", tc.type_name, tc.count));
        }
    }
    if !dash.vaults.is_empty() {
        lines.push(String::new());
        lines.push("Vaults:".to_string());
        for v in &dash.vaults {
            let dangling = if v.dangling > 0 {
                format!(" ({} dangling)", v.dangling)
            } else {
                String::new()
            };
            lines.push(format!("  {:<20} {}{}", v.name, v.entries, dangling));
        }
    }
    if !dash.by_confidence.is_empty() {
        lines.push(String::new());
        lines.push("By confidence:".to_string());
        for cc in &dash.by_confidence {
            lines.push(format!("  {:<14} {}", cc.confidence.as_str(), cc.count));
        }
    }
    if !dash.by_month.is_empty() {
        lines.push(String::new());
        lines.push("By month:".to_string());
        for mc in &dash.by_month {
            lines.push(format!("  {}  {}", mc.month, mc.count));
        }
    }
    if dash.untimed > 0 {
        lines.push(String::new());
        lines.push(format!("{} entries with unparsable dates", dash.untimed));
    }
    lines
}
