//! Integration tests for the `ov` CLI.
//!
//! Each test creates a temp workspace directory, runs `ov` as a subprocess,
//! and verifies stdout and/or file contents.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;

/// Get the path to the built `ov` binary.
fn ov_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("ov");
    path
}

/// Run `ov` with the given args in the given directory, returning (stdout, stderr, success).
fn run_ov(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(ov_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("OV_LOG")
        .output()
        .expect("failed to run ov");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `ov` expecting success, return stdout.
fn run_ov_ok(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_ov(dir, args);
    if !success {
        panic!(
            "ov {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

/// Run `ov` expecting failure, return stderr.
fn run_ov_err(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_ov(dir, args);
    if success {
        panic!("ov {:?} unexpectedly succeeded:\nstdout: {}", args, stdout);
    }
    stderr
}

fn run_json(dir: &Path, args: &[&str]) -> Value {
    let mut full = args.to_vec();
    full.push("--json");
    let out = run_ov_ok(dir, &full);
    serde_json::from_str(&out).unwrap_or_else(|e| panic!("bad json from {:?}: {}\n{}", args, e, out))
}

fn init_workspace(dir: &Path) {
    run_ov_ok(dir, &["init", "--name", "test-case"]);
}

/// Add an entry and return its full ID.
fn add(dir: &Path, args: &[&str]) -> String {
    let mut full = vec!["add"];
    full.extend_from_slice(args);
    run_ov_ok(dir, &full).trim().to_string()
}

fn read_store(dir: &Path) -> Value {
    let text = fs::read_to_string(dir.join("osint/store.json")).unwrap();
    serde_json::from_str(&text).unwrap()
}

// ---------------------------------------------------------------------------
// Init
// ---------------------------------------------------------------------------

#[test]
fn test_init_creates_workspace() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_ov_ok(
        tmp.path(),
        &["init", "--name", "Op Nightfall", "--category", "Recon"],
    );
    assert!(out.contains("Initialized workspace: Op Nightfall"));

    let toml = fs::read_to_string(tmp.path().join("osint/workspace.toml")).unwrap();
    assert!(toml.contains("name = \"Op Nightfall\""));
    let store = read_store(tmp.path());
    assert_eq!(store["categories"], serde_json::json!(["Recon"]));

    let err = run_ov_err(tmp.path(), &["init"]);
    assert!(err.contains("workspace already exists"));
}

#[test]
fn test_commands_outside_workspace_fail() {
    let tmp = tempfile::TempDir::new().unwrap();
    let err = run_ov_err(tmp.path(), &["list"]);
    assert!(err.contains("not an osint-vault workspace"));
}

#[test]
fn test_workspace_dir_flag() {
    let tmp = tempfile::TempDir::new().unwrap();
    init_workspace(tmp.path());
    add(tmp.path(), &["keyword", "keyword=nightfall"]);

    let elsewhere = tempfile::TempDir::new().unwrap();
    let out = run_ov_ok(
        elsewhere.path(),
        &["-C", tmp.path().to_str().unwrap(), "list"],
    );
    assert!(out.contains("nightfall"));
}

#[test]
fn test_invalid_date_format_is_reported() {
    let tmp = tempfile::TempDir::new().unwrap();
    init_workspace(tmp.path());
    let config = tmp.path().join("osint/workspace.toml");
    let text = fs::read_to_string(&config)
        .unwrap()
        .replace("%Y-%m-%d %H:%M", "%Y-%Q");
    fs::write(&config, text).unwrap();

    let (_, stderr, success) = run_ov(tmp.path(), &["timeline", "ls"]);
    assert!(!success);
    assert!(stderr.contains("invalid [timeline] date_format '%Y-%Q'"));
    assert!(!stderr.contains("panicked"));
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

#[test]
fn test_add_show_and_list() {
    let tmp = tempfile::TempDir::new().unwrap();
    init_workspace(tmp.path());

    let id = add(
        tmp.path(),
        &[
            "breach",
            "company=Acme Corp",
            "date=2023-05-01",
            "records:=1500",
            "--tag",
            "#leak",
            "--note",
            "dump on forum",
        ],
    );
    assert_eq!(id.len(), 36);

    let shown = run_json(tmp.path(), &["show", &id[..8]]);
    assert_eq!(shown["id"], id.as_str());
    assert_eq!(shown["type"], "breach");
    assert_eq!(shown["company"], "Acme Corp");
    assert_eq!(shown["records"], 1500);
    assert_eq!(shown["tags"], serde_json::json!(["leak"]));
    assert_eq!(shown["notes"], "dump on forum");
    assert_eq!(shown["displayName"], "Acme Corp");
    assert!(shown["addedDate"].is_string());

    let text = run_ov_ok(tmp.path(), &["show", &id]);
    assert!(text.starts_with("Acme Corp (breach)"));
    assert!(text.contains("tags: #leak"));

    add(tmp.path(), &["domain", "value=acme-login.example"]);
    let listed = run_json(tmp.path(), &["list", "--type", "breach"]);
    assert_eq!(listed.as_array().unwrap().len(), 1);
    let all = run_json(tmp.path(), &["list", "--sort", "name"]);
    let names: Vec<&str> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["displayName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Acme Corp", "acme-login.example"]);
}

#[test]
fn test_add_rejects_bad_input() {
    let tmp = tempfile::TempDir::new().unwrap();
    init_workspace(tmp.path());

    let err = run_ov_err(tmp.path(), &["add", "spaceship", "name=x"]);
    assert!(err.contains("unknown entry type 'spaceship'"));

    let err = run_ov_err(tmp.path(), &["add", "breach", "records:=10"]);
    assert!(err.contains("invalid breach entry"));

    let err = run_ov_err(tmp.path(), &["add", "tool", "name=x", "colour=red"]);
    assert!(err.contains("no field 'colour'"));

    let err = run_ov_err(tmp.path(), &["add", "tool", "name"]);
    assert!(err.contains("invalid field assignment"));

    assert!(read_store(tmp.path())["entries"]
        .as_array()
        .unwrap()
        .is_empty());
}

#[test]
fn test_empty_id_matches_nothing() {
    let tmp = tempfile::TempDir::new().unwrap();
    init_workspace(tmp.path());
    add(tmp.path(), &["keyword", "keyword=only"]);
    run_ov_ok(tmp.path(), &["vault", "new", "Solo"]);
    run_ov_ok(tmp.path(), &["timeline", "add", "2024-01-01", "Only event"]);

    let err = run_ov_err(tmp.path(), &["rm", ""]);
    assert!(err.contains("entry not found"));
    let err = run_ov_err(tmp.path(), &["vault", "rm", ""]);
    assert!(err.contains("vault not found"));
    let err = run_ov_err(tmp.path(), &["timeline", "rm", ""]);
    assert!(err.contains("event not found"));

    let store = read_store(tmp.path());
    assert_eq!(store["entries"].as_array().unwrap().len(), 1);
    assert_eq!(store["vaults"].as_array().unwrap().len(), 1);
    assert_eq!(store["timeline"].as_array().unwrap().len(), 1);
}

#[test]
fn test_numeric_fields_accept_plain_assignment() {
    let tmp = tempfile::TempDir::new().unwrap();
    init_workspace(tmp.path());
    let id = add(tmp.path(), &["location", "name=HQ", "latitude=51.5"]);
    let shown = run_json(tmp.path(), &["show", &id]);
    assert_eq!(shown["latitude"], 51.5);

    run_ov_ok(tmp.path(), &["edit", &id, "longitude=-0.12"]);
    let shown = run_json(tmp.path(), &["show", &id]);
    assert_eq!(shown["longitude"], -0.12);
}

#[test]
fn test_edit_star_pin_tag() {
    let tmp = tempfile::TempDir::new().unwrap();
    init_workspace(tmp.path());
    let id = add(tmp.path(), &["tool", "name=Maltego", "url=https://old.example"]);

    run_ov_ok(
        tmp.path(),
        &["edit", &id, "description=graph analysis", "url:=null", "--note", "licensed"],
    );
    run_ov_ok(tmp.path(), &["star", &id]);
    run_ov_ok(tmp.path(), &["pin", &id]);
    run_ov_ok(tmp.path(), &["tag", &id, "add", "graph"]);

    let shown = run_json(tmp.path(), &["show", &id]);
    assert_eq!(shown["description"], "graph analysis");
    assert!(shown.get("url").is_none());
    assert_eq!(shown["notes"], "licensed");
    assert_eq!(shown["starred"], true);
    assert_eq!(shown["pinned"], true);
    assert_eq!(shown["tags"], serde_json::json!(["graph"]));

    let out = run_ov_ok(tmp.path(), &["star", &id]);
    assert!(out.contains("unstarred"));
    run_ov_ok(tmp.path(), &["tag", &id, "rm", "graph"]);
    let shown = run_json(tmp.path(), &["show", &id]);
    assert_eq!(shown["starred"], false);
    assert_eq!(shown["tags"], serde_json::json!([]));

    let err = run_ov_err(tmp.path(), &["edit", &id]);
    assert!(err.contains("nothing to change"));
}

#[test]
fn test_search_reports_fields() {
    let tmp = tempfile::TempDir::new().unwrap();
    init_workspace(tmp.path());
    let id = add(tmp.path(), &["person", "name=Jane Roe", "aliases:=[\"spider_queen\"]"]);
    add(tmp.path(), &["tool", "name=SpiderFoot"]);

    let hits = run_json(tmp.path(), &["search", "SPIDER"]);
    let hits = hits.as_array().unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0]["id"], id.as_str());
    assert_eq!(hits[0]["field"], "aliases");
    assert_eq!(hits[1]["field"], "name");

    let err = run_ov_err(tmp.path(), &["search", "("]);
    assert!(err.contains("invalid regex"));
}

// ---------------------------------------------------------------------------
// Vaults
// ---------------------------------------------------------------------------

#[test]
fn test_phishing_campaign_export_and_removal() {
    let tmp = tempfile::TempDir::new().unwrap();
    init_workspace(tmp.path());
    let email = add(tmp.path(), &["email", "email=ceo@acme-login.example"]);
    let domain = add(tmp.path(), &["domain", "value=acme-login.example"]);
    let breach = add(tmp.path(), &["breach", "company=Acme", "date=2023-05-01"]);

    let vault = run_ov_ok(
        tmp.path(),
        &["vault", "new", "Phishing Campaign", &email, &domain, &breach],
    )
    .trim()
    .to_string();

    let export_path = tmp.path().join("campaign.json");
    run_ov_ok(
        tmp.path(),
        &["vault", "export", "Phishing Campaign", "-o", export_path.to_str().unwrap()],
    );
    let export: Value = serde_json::from_str(&fs::read_to_string(&export_path).unwrap()).unwrap();
    assert_eq!(export["vaultName"], "Phishing Campaign");
    assert_eq!(export["vaultIcon"], "folder");
    assert_eq!(export["vaultColor"], "#4488FF");
    let ids: Vec<&str> = export["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![email.as_str(), domain.as_str(), breach.as_str()]);

    run_ov_ok(tmp.path(), &["vault", "remove", &vault[..8], &domain]);
    let export = run_json(tmp.path(), &["vault", "export", &vault]);
    assert_eq!(export["entries"].as_array().unwrap().len(), 2);
    let shown = run_json(tmp.path(), &["show", &domain]);
    assert_eq!(shown["customTabs"], serde_json::json!([]));
    let shown = run_json(tmp.path(), &["show", &email]);
    assert_eq!(shown["customTabs"], serde_json::json!([vault]));
}

#[test]
fn test_vault_lifecycle() {
    let tmp = tempfile::TempDir::new().unwrap();
    init_workspace(tmp.path());
    let a = add(tmp.path(), &["keyword", "keyword=alpha"]);
    let b = add(tmp.path(), &["keyword", "keyword=beta"]);

    let vault = run_json(
        tmp.path(),
        &["vault", "new", "Leads", "--icon", "star", "--color", "#FF0000"],
    )["id"]
        .as_str()
        .unwrap()
        .to_string();
    let change = run_json(tmp.path(), &["vault", "add", "Leads", &a, &b]);
    assert_eq!(change["added"].as_array().unwrap().len(), 2);

    let again = run_json(tmp.path(), &["vault", "set", "Leads", &a, &b]);
    assert_eq!(again["added"], serde_json::json!([]));
    assert_eq!(again["removed"], serde_json::json!([]));

    run_ov_ok(tmp.path(), &["vault", "edit", "Leads", "--name", "Hot Leads"]);
    let listed = run_json(tmp.path(), &["vault", "ls"]);
    assert_eq!(listed[0]["name"], "Hot Leads");
    assert_eq!(listed[0]["icon"], "star");
    assert_eq!(listed[0]["entryCount"], 2);

    // Deleting an entry scrubs it from the vault.
    run_ov_ok(tmp.path(), &["rm", &a]);
    let shown = run_json(tmp.path(), &["vault", "show", &vault]);
    assert_eq!(shown["toolIds"], serde_json::json!([b]));
    let log = fs::read_to_string(tmp.path().join("osint/.recovery.log")).unwrap();
    assert!(log.contains(&format!("entry {} deleted", a)));

    // Deleting the vault keeps the entry but clears its tab.
    run_ov_ok(tmp.path(), &["vault", "rm", &vault]);
    assert_eq!(run_json(tmp.path(), &["vault", "ls"]), serde_json::json!([]));
    let shown = run_json(tmp.path(), &["show", &b]);
    assert_eq!(shown["customTabs"], serde_json::json!([]));

    let err = run_ov_err(tmp.path(), &["vault", "new", "  "]);
    assert!(err.contains("vault name cannot be empty"));
}

#[test]
fn test_vault_import_creates_new_vault() {
    let tmp = tempfile::TempDir::new().unwrap();
    init_workspace(tmp.path());
    let kept = add(tmp.path(), &["keyword", "keyword=shared"]);
    run_ov_ok(tmp.path(), &["vault", "new", "Origin", &kept]);

    let doc = serde_json::json!({
        "vaultName": "Imported",
        "vaultIcon": "",
        "vaultColor": "#00FF00",
        "entries": [
            {"id": kept, "type": "keyword", "keyword": "shared", "customTabs": ["elsewhere"]},
            {"id": "fresh-1", "type": "hash", "value": "d41d8cd98f00b204e9800998ecf8427e",
             "customTabs": ["elsewhere"]}
        ]
    });
    let path = tmp.path().join("import.json");
    fs::write(&path, doc.to_string()).unwrap();

    let result = run_json(tmp.path(), &["vault", "import", path.to_str().unwrap()]);
    assert_eq!(result["inserted"], 1);
    assert_eq!(result["joined"], 1);
    let new_vault = result["vault_id"].as_str().unwrap().to_string();

    let shown = run_json(tmp.path(), &["show", "fresh-1"]);
    assert_eq!(shown["customTabs"], serde_json::json!([new_vault]));
    let shown = run_json(tmp.path(), &["show", &kept]);
    assert_eq!(shown["customTabs"].as_array().unwrap().len(), 2);

    let check = run_json(tmp.path(), &["check"]);
    assert_eq!(check["valid"], true);
}

// ---------------------------------------------------------------------------
// Timelines
// ---------------------------------------------------------------------------

#[test]
fn test_vault_timeline_uses_primary_dates() {
    let tmp = tempfile::TempDir::new().unwrap();
    init_workspace(tmp.path());
    let breach = add(tmp.path(), &["breach", "company=Acme", "date=2023-05-01"]);
    let cred = add(
        tmp.path(),
        &["credential", "service=mail.example", "dateFound=2022-11-30"],
    );
    let bad = add(tmp.path(), &["caseStudy", "title=Op X", "publishedDate=spring"]);
    let tool = add(tmp.path(), &["tool", "name=Maltego"]);
    run_ov_ok(tmp.path(), &["vault", "new", "Case", &breach, &cred, &bad, &tool]);

    let events = run_json(tmp.path(), &["vault", "timeline", "Case"]);
    let events = events.as_array().unwrap();
    let titles: Vec<&str> = events.iter().map(|e| e["title"].as_str().unwrap()).collect();
    assert_eq!(
        titles,
        vec!["Credential exposed: mail.example", "Breach: Acme", "Maltego"]
    );
    assert_eq!(events[1]["confidence"], "critical");
    assert_eq!(events[1]["timestamp"], "2023-05-01T00:00:00.000Z");
    assert_eq!(events[1]["actor"], "vault");
    assert_eq!(events[1]["category"], "breach");
}

#[test]
fn test_investigation_timeline() {
    let tmp = tempfile::TempDir::new().unwrap();
    init_workspace(tmp.path());
    run_ov_ok(
        tmp.path(),
        &["timeline", "add", "2024-01-03", "Third", "--confidence", "high"],
    );
    let first = run_ov_ok(tmp.path(), &["timeline", "add", "2024-01-01 09:00", "First"])
        .trim()
        .to_string();
    run_ov_ok(tmp.path(), &["timeline", "add", "2024-01-02", "Second", "--actor", "APT-X"]);

    let out = run_ov_ok(tmp.path(), &["timeline", "ls"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("2024-01-01 09:00"));
    assert!(lines[0].contains("First"));
    assert!(lines[2].contains("[high]"));

    let err = run_ov_err(tmp.path(), &["timeline", "add", "2024-01-01", "  "]);
    assert!(err.contains("title cannot be empty"));
    let err = run_ov_err(tmp.path(), &["timeline", "add", "soon", "x"]);
    assert!(err.contains("invalid timestamp"));

    run_ov_ok(tmp.path(), &["timeline", "rm", &first[..8]]);
    let events = run_json(tmp.path(), &["timeline", "ls"]);
    assert_eq!(events.as_array().unwrap().len(), 2);

    add(tmp.path(), &["breach", "company=Acme", "date=2023-05-01"]);
    let merged = run_json(tmp.path(), &["timeline", "ls", "--entries"]);
    assert_eq!(merged[0]["title"], "Breach: Acme");
    assert_eq!(merged.as_array().unwrap().len(), 3);
}

#[test]
fn test_timeline_import_is_all_or_nothing() {
    let tmp = tempfile::TempDir::new().unwrap();
    init_workspace(tmp.path());
    run_ov_ok(tmp.path(), &["timeline", "add", "2024-01-01", "Existing"]);

    let bad = tmp.path().join("bad.json");
    fs::write(
        &bad,
        r#"{"events": [
            {"id": "a", "timestamp": "2024-02-01", "title": "ok", "category": "c", "confidence": "low"},
            {"id": "b", "timestamp": "2024-02-02", "title": "no conf", "category": "c"}
        ]}"#,
    )
    .unwrap();
    let err = run_ov_err(tmp.path(), &["timeline", "import", bad.to_str().unwrap()]);
    assert!(err.contains("event 1: missing or non-string field 'confidence'"));
    assert_eq!(read_store(tmp.path())["timeline"].as_array().unwrap().len(), 1);

    let good = tmp.path().join("good.json");
    fs::write(
        &good,
        r#"{"events": [
            {"id": "a", "timestamp": "2024-02-01", "title": "imported", "category": "c", "confidence": "LOW"}
        ]}"#,
    )
    .unwrap();
    let result = run_json(tmp.path(), &["timeline", "import", good.to_str().unwrap()]);
    assert_eq!(result["added"], 1);

    let exported = run_json(tmp.path(), &["timeline", "export"]);
    let titles: Vec<&str> = exported["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Existing", "imported"]);
}

// ---------------------------------------------------------------------------
// Categories, stats, check
// ---------------------------------------------------------------------------

#[test]
fn test_categories() {
    let tmp = tempfile::TempDir::new().unwrap();
    init_workspace(tmp.path());
    run_ov_ok(tmp.path(), &["category", "add", "Recon"]);
    let err = run_ov_err(tmp.path(), &["category", "add", "recon"]);
    assert!(err.contains("category already exists"));

    add(tmp.path(), &["tool", "name=Amass", "category=Recon"]);
    let cats = run_json(tmp.path(), &["category", "ls"]);
    assert_eq!(cats, serde_json::json!([{"name": "Recon", "tools": 1}]));

    let err = run_ov_err(tmp.path(), &["category", "rm", "Recon"]);
    assert!(err.contains("used by 1 tool"));
}

#[test]
fn test_stats() {
    let tmp = tempfile::TempDir::new().unwrap();
    init_workspace(tmp.path());
    let id = add(tmp.path(), &["breach", "company=Acme", "date=2023-05-01"]);
    add(tmp.path(), &["breach", "company=Initech", "date=2023-05-20"]);
    add(tmp.path(), &["email", "email=x@example.org"]);
    run_ov_ok(tmp.path(), &["star", &id]);

    let dash = run_json(tmp.path(), &["stats"]);
    assert_eq!(dash["total_entries"], 3);
    assert_eq!(dash["starred"], 1);
    assert_eq!(
        dash["by_type"],
        serde_json::json!([{"type": "email", "count": 1}, {"type": "breach", "count": 2}])
    );
    assert_eq!(dash["by_month"][0], serde_json::json!({"month": "2023-05", "count": 2}));

    let text = run_ov_ok(tmp.path(), &["stats"]);
    assert!(text.starts_with("3 entries (1 starred, 0 pinned)"));
}

#[test]
fn test_check_reports_duplicate_entry_ids() {
    let tmp = tempfile::TempDir::new().unwrap();
    init_workspace(tmp.path());
    fs::write(
        tmp.path().join("osint/store.json"),
        r#"{
  "version": 1,
  "entries": [
    {"id": "k1", "type": "keyword", "keyword": "first"},
    {"id": "k1", "type": "keyword", "keyword": "second"}
  ]
}"#,
    )
    .unwrap();

    let result = run_json(tmp.path(), &["check"]);
    assert_eq!(result["valid"], true);
    assert_eq!(
        result["warnings"],
        serde_json::json!([{"type": "duplicate_entry_id", "entry_id": "k1"}])
    );
}

#[test]
fn test_check_and_fix() {
    let tmp = tempfile::TempDir::new().unwrap();
    init_workspace(tmp.path());
    fs::write(
        tmp.path().join("osint/store.json"),
        r#"{
  "version": 1,
  "entries": [
    {"id": "k1", "type": "keyword", "keyword": "a", "customTabs": ["v1", "ghost-vault"]},
    {"id": "k2", "type": "keyword", "keyword": "b"}
  ],
  "vaults": [
    {"id": "v1", "name": "V", "toolIds": ["k1", "k2", "missing"]}
  ]
}"#,
    )
    .unwrap();

    let result = run_json(tmp.path(), &["check"]);
    assert_eq!(result["valid"], false);
    let kinds: Vec<&str> = result["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["type"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["missing_backlink", "dangling_member", "unknown_vault"]);

    let out = run_ov_ok(tmp.path(), &["check", "--fix"]);
    assert!(out.contains("repaired: 1 members dropped"));

    let out = run_ov_ok(tmp.path(), &["check"]);
    assert!(out.contains("workspace is valid"));
    let store = read_store(tmp.path());
    assert_eq!(store["vaults"][0]["toolIds"], serde_json::json!(["k1", "k2"]));
    assert_eq!(store["entries"][1]["customTabs"], serde_json::json!(["v1"]));
}
