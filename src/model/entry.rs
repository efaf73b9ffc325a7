use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::timeline::Confidence;

/// Every `type` discriminant, in the order kinds are listed in the dashboard.
pub const ENTRY_TYPES: [&str; 34] = [
    "tool",
    "email",
    "phone",
    "cryptoAddress",
    "location",
    "link",
    "media",
    "password",
    "keyword",
    "socialMedia",
    "domain",
    "username",
    "threatIntel",
    "malware",
    "vulnerability",
    "breach",
    "credential",
    "forum",
    "vendor",
    "telegram",
    "publicRecord",
    "document",
    "archive",
    "wireless",
    "caseStudy",
    "script",
    "ipAddress",
    "person",
    "organization",
    "vehicle",
    "dork",
    "hash",
    "certificate",
    "paste",
];

/// A catalogued record: the common envelope plus its kind-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    #[serde(
        default,
        with = "super::date::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub added_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub starred: bool,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Vault IDs this entry belongs to. Mirrors `Vault::tool_ids`.
    #[serde(default)]
    pub custom_tabs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub kind: EntryKind,
}

impl Entry {
    /// Create an entry with a fresh ID, stamped with `added` at the
    /// millisecond precision `store.json` keeps.
    pub fn new(kind: EntryKind, added: DateTime<Utc>) -> Self {
        Entry {
            id: uuid::Uuid::new_v4().to_string(),
            added_date: Some(added.trunc_subsecs(3)),
            starred: false,
            pinned: false,
            tags: Vec::new(),
            custom_tabs: Vec::new(),
            notes: None,
            kind,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    pub fn display_name(&self) -> String {
        self.kind.display_name()
    }

    pub fn in_vault(&self, vault_id: &str) -> bool {
        self.custom_tabs.iter().any(|t| t == vault_id)
    }
}

// ---------------------------------------------------------------------------
// Kinds
// ---------------------------------------------------------------------------

/// The closed set of entry shapes, tagged by `type` on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EntryKind {
    Tool(Tool),
    Email(Email),
    Phone(Phone),
    CryptoAddress(CryptoAddress),
    Location(Location),
    Link(Link),
    Media(Media),
    Password(Password),
    Keyword(Keyword),
    SocialMedia(SocialMedia),
    Domain(Domain),
    Username(Username),
    ThreatIntel(ThreatIntel),
    Malware(Malware),
    Vulnerability(Vulnerability),
    Breach(Breach),
    Credential(Credential),
    Forum(Forum),
    Vendor(Vendor),
    Telegram(Telegram),
    PublicRecord(PublicRecord),
    Document(Document),
    Archive(Archive),
    Wireless(Wireless),
    CaseStudy(CaseStudy),
    Script(Script),
    IpAddress(IpAddress),
    Person(Person),
    Organization(Organization),
    Vehicle(Vehicle),
    Dork(Dork),
    Hash(Hash),
    Certificate(Certificate),
    Paste(Paste),
}

/// The kind-specific date that places an entry on a timeline ahead of
/// `addedDate`, with how much weight the event carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryDate<'a> {
    pub raw: &'a str,
    pub title: String,
    pub confidence: Confidence,
}

impl EntryKind {
    /// The `type` discriminant as written on disk.
    pub fn type_name(&self) -> &'static str {
        match self {
            EntryKind::Tool(_) => "tool",
            EntryKind::Email(_) => "email",
            EntryKind::Phone(_) => "phone",
            EntryKind::CryptoAddress(_) => "cryptoAddress",
            EntryKind::Location(_) => "location",
            EntryKind::Link(_) => "link",
            EntryKind::Media(_) => "media",
            EntryKind::Password(_) => "password",
            EntryKind::Keyword(_) => "keyword",
            EntryKind::SocialMedia(_) => "socialMedia",
            EntryKind::Domain(_) => "domain",
            EntryKind::Username(_) => "username",
            EntryKind::ThreatIntel(_) => "threatIntel",
            EntryKind::Malware(_) => "malware",
            EntryKind::Vulnerability(_) => "vulnerability",
            EntryKind::Breach(_) => "breach",
            EntryKind::Credential(_) => "credential",
            EntryKind::Forum(_) => "forum",
            EntryKind::Vendor(_) => "vendor",
            EntryKind::Telegram(_) => "telegram",
            EntryKind::PublicRecord(_) => "publicRecord",
            EntryKind::Document(_) => "document",
            EntryKind::Archive(_) => "archive",
            EntryKind::Wireless(_) => "wireless",
            EntryKind::CaseStudy(_) => "caseStudy",
            EntryKind::Script(_) => "script",
            EntryKind::IpAddress(_) => "ipAddress",
            EntryKind::Person(_) => "person",
            EntryKind::Organization(_) => "organization",
            EntryKind::Vehicle(_) => "vehicle",
            EntryKind::Dork(_) => "dork",
            EntryKind::Hash(_) => "hash",
            EntryKind::Certificate(_) => "certificate",
            EntryKind::Paste(_) => "paste",
        }
    }

    /// Canonical display name, used for grid rows and undated timeline titles.
    pub fn display_name(&self) -> String {
        match self {
            EntryKind::Tool(t) => t.name.clone(),
            EntryKind::Email(e) => e.email.clone(),
            EntryKind::Phone(p) => p.number.clone(),
            EntryKind::CryptoAddress(c) => c.address.clone(),
            EntryKind::Location(l) => l.name.clone(),
            EntryKind::Link(l) => non_empty(l.title.as_deref())
                .unwrap_or(&l.url)
                .to_string(),
            EntryKind::Media(m) => m.filename.clone(),
            EntryKind::Password(p) => non_empty(p.service.as_deref())
                .unwrap_or("password")
                .to_string(),
            EntryKind::Keyword(k) => k.keyword.clone(),
            EntryKind::SocialMedia(s) => format!("{}: {}", s.platform, s.handle),
            EntryKind::Domain(d) => d.value.clone(),
            EntryKind::Username(u) => u.value.clone(),
            EntryKind::ThreatIntel(t) => t.name.clone(),
            EntryKind::Malware(m) => m.name.clone(),
            EntryKind::Vulnerability(v) => v.cve.clone(),
            EntryKind::Breach(b) => b.company.clone(),
            EntryKind::Credential(c) => c.service.clone(),
            EntryKind::Forum(f) => f.name.clone(),
            EntryKind::Vendor(v) => v.name.clone(),
            EntryKind::Telegram(t) => t.channel.clone(),
            EntryKind::PublicRecord(p) => p.title.clone(),
            EntryKind::Document(d) => d.title.clone(),
            EntryKind::Archive(a) => a.url.clone(),
            EntryKind::Wireless(w) => w.ssid.clone(),
            EntryKind::CaseStudy(c) => c.title.clone(),
            EntryKind::Script(s) => s.name.clone(),
            EntryKind::IpAddress(i) => i.value.clone(),
            EntryKind::Person(p) => p.name.clone(),
            EntryKind::Organization(o) => o.name.clone(),
            EntryKind::Vehicle(v) => v.plate.clone(),
            EntryKind::Dork(d) => d.query.clone(),
            EntryKind::Hash(h) => h.value.clone(),
            EntryKind::Certificate(c) => c.subject.clone(),
            EntryKind::Paste(p) => p.site.clone(),
        }
    }

    /// The kind-specific date, if this kind has one and it is filled in.
    pub fn primary_date(&self) -> Option<PrimaryDate<'_>> {
        let (raw, title, confidence) = match self {
            EntryKind::Breach(b) => (
                b.date.as_deref(),
                format!("Breach: {}", b.company),
                Confidence::Critical,
            ),
            EntryKind::Credential(c) => (
                c.date_found.as_deref(),
                format!("Credential exposed: {}", c.service),
                Confidence::High,
            ),
            EntryKind::Malware(m) => (
                m.first_seen.as_deref(),
                format!("Malware sighted: {}", m.name),
                Confidence::High,
            ),
            EntryKind::ThreatIntel(t) => (
                t.date.as_deref(),
                format!("Threat: {}", t.name),
                t.severity
                    .as_deref()
                    .and_then(Confidence::parse)
                    .unwrap_or(Confidence::Medium),
            ),
            EntryKind::Archive(a) => (
                a.timestamp.as_deref(),
                format!("Archived: {}", a.url),
                Confidence::Info,
            ),
            EntryKind::CaseStudy(c) => (
                c.published_date.as_deref(),
                format!("Case study: {}", c.title),
                Confidence::Info,
            ),
            EntryKind::PublicRecord(p) => (
                p.date.as_deref(),
                format!("Public record: {}", p.title),
                Confidence::Info,
            ),
            EntryKind::Tool(_)
            | EntryKind::Email(_)
            | EntryKind::Phone(_)
            | EntryKind::CryptoAddress(_)
            | EntryKind::Location(_)
            | EntryKind::Link(_)
            | EntryKind::Media(_)
            | EntryKind::Password(_)
            | EntryKind::Keyword(_)
            | EntryKind::SocialMedia(_)
            | EntryKind::Domain(_)
            | EntryKind::Username(_)
            | EntryKind::Vulnerability(_)
            | EntryKind::Forum(_)
            | EntryKind::Vendor(_)
            | EntryKind::Telegram(_)
            | EntryKind::Document(_)
            | EntryKind::Wireless(_)
            | EntryKind::Script(_)
            | EntryKind::IpAddress(_)
            | EntryKind::Person(_)
            | EntryKind::Organization(_)
            | EntryKind::Vehicle(_)
            | EntryKind::Dork(_)
            | EntryKind::Hash(_)
            | EntryKind::Certificate(_)
            | EntryKind::Paste(_) => return None,
        };
        let raw = non_empty(raw)?;
        Some(PrimaryDate {
            raw,
            title,
            confidence,
        })
    }

    /// Reference fields in evidence order: `url`, `link`, `source`.
    pub fn references(&self) -> [Option<&str>; 3] {
        match self {
            EntryKind::Tool(t) => [t.url.as_deref(), None, None],
            EntryKind::Email(e) => [None, None, e.source.as_deref()],
            EntryKind::Link(l) => [Some(l.url.as_str()), None, None],
            EntryKind::Media(m) => [m.url.as_deref(), None, None],
            EntryKind::SocialMedia(s) => [s.url.as_deref(), None, None],
            EntryKind::ThreatIntel(t) => [None, None, t.source.as_deref()],
            EntryKind::Vulnerability(v) => [v.url.as_deref(), None, None],
            EntryKind::Breach(b) => [None, None, b.source.as_deref()],
            EntryKind::Credential(c) => [None, None, c.source.as_deref()],
            EntryKind::Forum(f) => [f.url.as_deref(), None, None],
            EntryKind::Vendor(v) => [v.url.as_deref(), None, None],
            EntryKind::Telegram(t) => [t.url.as_deref(), None, None],
            EntryKind::PublicRecord(p) => [None, p.link.as_deref(), None],
            EntryKind::Document(d) => [d.url.as_deref(), None, None],
            EntryKind::Archive(a) => [Some(a.url.as_str()), None, None],
            EntryKind::CaseStudy(c) => [c.url.as_deref(), None, c.source.as_deref()],
            EntryKind::Organization(o) => [o.url.as_deref(), None, None],
            EntryKind::Paste(p) => [p.url.as_deref(), None, None],
            EntryKind::Phone(_)
            | EntryKind::CryptoAddress(_)
            | EntryKind::Location(_)
            | EntryKind::Password(_)
            | EntryKind::Keyword(_)
            | EntryKind::Domain(_)
            | EntryKind::Username(_)
            | EntryKind::Malware(_)
            | EntryKind::Wireless(_)
            | EntryKind::Script(_)
            | EntryKind::IpAddress(_)
            | EntryKind::Person(_)
            | EntryKind::Vehicle(_)
            | EntryKind::Dork(_)
            | EntryKind::Hash(_)
            | EntryKind::Certificate(_) => [None, None, None],
        }
    }

    /// First non-empty reference, or `None`.
    pub fn evidence(&self) -> Option<&str> {
        self.references().into_iter().find_map(non_empty)
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Per-kind field sets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Email {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoAddress {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Password {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyword {
    pub keyword: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMedia {
    pub platform: String,
    pub handle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registrar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Username {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatIntel {
    pub name: String,
    /// One of the confidence levels; anything else reads as medium.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Malware {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_seen: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vulnerability {
    pub cve: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breach {
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub service: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_found: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forum {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Telegram {
    pub channel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicRecord {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Archive {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wireless {
    pub ssid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bssid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpAddress {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asn: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub plate: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dork {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hash {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paste {
    pub site: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
