mod init;
pub use init::cmd_init;

use std::path::PathBuf;

use chrono::Utc;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::recovery;
use crate::io::workspace_io::{self, WorkspaceError};
use crate::model::entry::ENTRY_TYPES;
use crate::model::workspace::Workspace;
use crate::ops::aggregate::{self, EntryQuery, SortOrder};
use crate::ops::entry_ops::{self, FieldAssignment, NewEntry};
use crate::ops::timeline::TimelineNormalizer;
use crate::ops::timeline_ops::{self, NewEvent};
use crate::ops::vault_ops::{self, VaultStyle};
use crate::ops::{category_ops, check, import, search};

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Where the command runs and how it reports.
pub struct Context {
    /// Directory workspace discovery starts from (cwd or `-C`)
    pub start: PathBuf,
    pub json: bool,
}

impl Context {
    pub fn new(workspace_dir: Option<&str>, json: bool) -> Result<Self, Box<dyn std::error::Error>> {
        let start = match workspace_dir {
            Some(dir) => std::fs::canonicalize(dir)
                .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?,
            None => std::env::current_dir()?,
        };
        Ok(Context { start, json })
    }

    fn load(&self) -> Result<Workspace, WorkspaceError> {
        let root = workspace_io::discover_workspace(&self.start)?;
        workspace_io::load_workspace(&root)
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(command: Commands, ctx: &Context) -> CmdResult {
    match command {
        Commands::Init(args) => cmd_init(args, ctx),
        Commands::Types => cmd_types(ctx),

        // Entries
        Commands::Add(args) => cmd_add(args, ctx),
        Commands::Show(args) => cmd_show(args, ctx),
        Commands::Edit(args) => cmd_edit(args, ctx),
        Commands::Rm(args) => cmd_rm(args, ctx),
        Commands::Star(args) => cmd_toggle(args, ctx, Flag::Star),
        Commands::Pin(args) => cmd_toggle(args, ctx, Flag::Pin),
        Commands::Tag(args) => cmd_tag(args, ctx),
        Commands::List(args) => cmd_list(args, ctx),
        Commands::Search(args) => cmd_search(args, ctx),

        Commands::Vault(cmd) => cmd_vault(cmd, ctx),
        Commands::Timeline(cmd) => cmd_timeline(cmd, ctx),
        Commands::Category(cmd) => cmd_category(cmd, ctx),

        Commands::Stats => cmd_stats(ctx),
        Commands::Check(args) => cmd_check(args, ctx),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn save(ws: &Workspace) -> Result<(), WorkspaceError> {
    workspace_io::save_workspace(ws)
}

fn resolve_entry(ws: &Workspace, key: &str) -> Result<String, String> {
    entry_ops::resolve_entry_id(&ws.store, key).ok_or_else(|| format!("entry not found: {}", key))
}

fn resolve_entries(ws: &Workspace, keys: &[String]) -> Result<Vec<String>, String> {
    keys.iter().map(|k| resolve_entry(ws, k)).collect()
}

fn resolve_vault(ws: &Workspace, key: &str) -> Result<String, String> {
    vault_ops::resolve_vault(&ws.store, key)
        .map(|v| v.id.clone())
        .ok_or_else(|| format!("vault not found: {}", key))
}

fn parse_fields(raw: &[String]) -> Result<Vec<FieldAssignment>, entry_ops::EntryError> {
    raw.iter().map(|f| entry_ops::parse_assignment(f)).collect()
}

fn normalizer() -> TimelineNormalizer {
    TimelineNormalizer::new(Utc::now())
}

fn print_json<T: serde::Serialize>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Write `content` to `path`, or to stdout when no path is given.
fn write_output(path: Option<&str>, content: &str) -> CmdResult {
    match path {
        Some(p) => {
            recovery::atomic_write(std::path::Path::new(p), content.as_bytes())?;
            eprintln!("wrote {}", p);
        }
        None => println!("{}", content),
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry commands
// ---------------------------------------------------------------------------

fn cmd_types(ctx: &Context) -> CmdResult {
    if ctx.json {
        let types: Vec<TypeJson> = TYPE_FIELDS
            .iter()
            .map(|&(t, fields)| TypeJson {
                type_name: t,
                fields: fields.split(", ").collect(),
            })
            .collect();
        return print_json(&types);
    }
    for (t, fields) in TYPE_FIELDS {
        println!("{:<14} {}", t, fields);
    }
    Ok(())
}

fn cmd_add(args: AddArgs, ctx: &Context) -> CmdResult {
    let mut ws = ctx.load()?;
    let fields = parse_fields(&args.fields)?;
    let kind = entry_ops::build_kind(&args.entry_type, &fields)?;
    let vault_ids: Vec<String> = args
        .vault
        .iter()
        .map(|v| resolve_vault(&ws, v))
        .collect::<Result<_, _>>()?;

    let id = entry_ops::add_entry(
        &mut ws.store,
        NewEntry {
            kind,
            tags: args.tag,
            notes: args.note,
        },
        Utc::now(),
    );
    for vault_id in &vault_ids {
        vault_ops::add_to_vault(&mut ws.store, vault_id, &id)?;
    }
    save(&ws)?;

    if ctx.json {
        print_json(&serde_json::json!({ "id": id }))
    } else {
        println!("{}", id);
        Ok(())
    }
}

fn cmd_show(args: IdArg, ctx: &Context) -> CmdResult {
    let ws = ctx.load()?;
    let id = resolve_entry(&ws, &args.id)?;
    let entry = ws
        .store
        .entries
        .find_by_id(&id)
        .ok_or_else(|| format!("entry not found: {}", args.id))?;

    if ctx.json {
        return print_json(&entry_to_json(entry));
    }
    for line in format_entry_detail(entry, &ws.store, &ws.config.timeline.date_format) {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_edit(args: EditArgs, ctx: &Context) -> CmdResult {
    if args.fields.is_empty() && args.note.is_none() {
        return Err("nothing to change (give field=value pairs or --note)".into());
    }
    let mut ws = ctx.load()?;
    let id = resolve_entry(&ws, &args.id)?;
    let fields = parse_fields(&args.fields)?;
    if !fields.is_empty() {
        entry_ops::edit_fields(&mut ws.store, &id, &fields)?;
    }
    if let Some(note) = &args.note {
        entry_ops::set_notes(&mut ws.store, &id, note)?;
    }
    save(&ws)?;
    println!("{} updated", short_id(&id));
    Ok(())
}

fn cmd_rm(args: RmArgs, ctx: &Context) -> CmdResult {
    let mut ws = ctx.load()?;
    let ids = resolve_entries(&ws, &args.ids)?;
    let mut deleted = Vec::new();
    for id in &ids {
        // The same entry may be named twice by different prefixes.
        if !ws.store.entries.contains(id) {
            continue;
        }
        let entry = entry_ops::delete_entry(&mut ws.store, id)?;
        recovery::log_deletion(
            &ws.osint_dir,
            "entry",
            id,
            &serde_json::to_string_pretty(&entry)?,
        );
        deleted.push(entry);
    }
    save(&ws)?;

    if ctx.json {
        let ids: Vec<&str> = deleted.iter().map(|e| e.id.as_str()).collect();
        return print_json(&serde_json::json!({ "deleted": ids }));
    }
    for entry in &deleted {
        println!("deleted {} {}", short_id(&entry.id), entry.display_name());
    }
    Ok(())
}

#[derive(Clone, Copy)]
enum Flag {
    Star,
    Pin,
}

fn cmd_toggle(args: IdArg, ctx: &Context, flag: Flag) -> CmdResult {
    let mut ws = ctx.load()?;
    let id = resolve_entry(&ws, &args.id)?;
    let (on, label) = match flag {
        Flag::Star => (entry_ops::toggle_star(&mut ws.store, &id)?, "starred"),
        Flag::Pin => (entry_ops::toggle_pin(&mut ws.store, &id)?, "pinned"),
    };
    save(&ws)?;
    if ctx.json {
        let mut out = serde_json::Map::new();
        out.insert("id".to_string(), id.clone().into());
        out.insert(label.to_string(), on.into());
        return print_json(&out);
    }
    println!("{} {}{}", short_id(&id), if on { "" } else { "un" }, label);
    Ok(())
}

fn cmd_tag(args: TagArgs, ctx: &Context) -> CmdResult {
    let mut ws = ctx.load()?;
    let id = resolve_entry(&ws, &args.id)?;
    match args.action.as_str() {
        "add" => entry_ops::add_tag(&mut ws.store, &id, &args.tag)?,
        "rm" => entry_ops::remove_tag(&mut ws.store, &id, &args.tag)?,
        other => return Err(format!("unknown action '{}' (expected: add, rm)", other).into()),
    }
    save(&ws)?;
    println!("{} tag {} {}", short_id(&id), args.action, args.tag);
    Ok(())
}

fn cmd_list(args: ListArgs, ctx: &Context) -> CmdResult {
    let ws = ctx.load()?;
    if let Some(t) = &args.entry_type
        && !ENTRY_TYPES.contains(&t.as_str())
    {
        return Err(entry_ops::EntryError::UnknownType(t.clone()).into());
    }
    let query = EntryQuery {
        type_name: args.entry_type,
        tag: args.tag.map(|t| t.trim_start_matches('#').to_string()),
        vault_id: args
            .vault
            .as_deref()
            .map(|v| resolve_vault(&ws, v))
            .transpose()?,
        starred_only: args.starred,
        pinned_only: args.pinned,
        pattern: args
            .filter
            .as_deref()
            .map(search::build_pattern)
            .transpose()?,
        sort: SortOrder::parse(&args.sort).ok_or_else(|| {
            format!("unknown sort '{}' (expected: added, name, type)", args.sort)
        })?,
    };

    let entries = aggregate::query_entries(&ws.store, &query);
    if ctx.json {
        let out: Vec<EntryJson> = entries.into_iter().map(entry_to_json).collect();
        return print_json(&out);
    }
    for entry in entries {
        println!("{}", format_entry_line(entry));
    }
    Ok(())
}

fn cmd_search(args: SearchArgs, ctx: &Context) -> CmdResult {
    let ws = ctx.load()?;
    let re = search::build_pattern(&args.pattern)
        .map_err(|e| format!("invalid regex '{}': {}", args.pattern, e))?;
    let hits = search::search_entries(&ws.store, &re);

    if ctx.json {
        let out: Vec<SearchHitJson> = hits
            .iter()
            .filter_map(|hit| {
                let entry = ws.store.entries.find_by_id(&hit.entry_id)?;
                Some(SearchHitJson {
                    id: hit.entry_id.clone(),
                    type_name: entry.type_name(),
                    name: entry.display_name(),
                    field: hit.field.clone(),
                    text: hit.text.clone(),
                })
            })
            .collect();
        return print_json(&out);
    }
    for hit in &hits {
        if let Some(entry) = ws.store.entries.find_by_id(&hit.entry_id) {
            println!(
                "{} {}  {}: {}",
                short_id(&hit.entry_id),
                entry.display_name(),
                hit.field,
                hit.text
            );
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Vault commands
// ---------------------------------------------------------------------------

fn cmd_vault(cmd: VaultCmd, ctx: &Context) -> CmdResult {
    match cmd.action {
        VaultAction::New(args) => cmd_vault_new(args, ctx),
        VaultAction::Ls => cmd_vault_ls(ctx),
        VaultAction::Show(args) => cmd_vault_show(args, ctx),
        VaultAction::Edit(args) => cmd_vault_edit(args, ctx),
        VaultAction::Set(args) => cmd_vault_members(args, ctx, Membership::Set),
        VaultAction::Add(args) => cmd_vault_members(args, ctx, Membership::Add),
        VaultAction::Remove(args) => cmd_vault_members(args, ctx, Membership::Remove),
        VaultAction::Rm(args) => cmd_vault_rm(args, ctx),
        VaultAction::Export(args) => cmd_vault_export(args, ctx),
        VaultAction::Import(args) => cmd_vault_import(args, ctx),
        VaultAction::Timeline(args) => cmd_vault_timeline(args, ctx),
    }
}

fn cmd_vault_new(args: VaultNewArgs, ctx: &Context) -> CmdResult {
    let mut ws = ctx.load()?;
    let ids = resolve_entries(&ws, &args.entries)?;
    let style = VaultStyle {
        name: args.name,
        icon: args
            .icon
            .unwrap_or_else(|| ws.config.vaults.default_icon.clone()),
        color: args
            .color
            .unwrap_or_else(|| ws.config.vaults.default_color.clone()),
    };
    let id = vault_ops::create_vault(&mut ws.store, style, &ids)?;
    save(&ws)?;
    if ctx.json {
        return print_json(&serde_json::json!({ "id": id }));
    }
    println!("{}", id);
    Ok(())
}

fn cmd_vault_ls(ctx: &Context) -> CmdResult {
    let ws = ctx.load()?;
    let rows: Vec<(&crate::model::vault::Vault, usize)> = ws
        .store
        .vaults
        .iter()
        .map(|v| (v, aggregate::vault_entries(&ws.store, v).len()))
        .collect();
    if ctx.json {
        let out: Vec<VaultJson> = rows
            .into_iter()
            .map(|(vault, entry_count)| VaultJson { vault, entry_count })
            .collect();
        return print_json(&out);
    }
    for (vault, count) in rows {
        println!("{}", format_vault_line(vault, count));
    }
    Ok(())
}

fn cmd_vault_show(args: VaultArg, ctx: &Context) -> CmdResult {
    let ws = ctx.load()?;
    let id = resolve_vault(&ws, &args.vault)?;
    let vault = ws
        .store
        .find_vault(&id)
        .ok_or_else(|| format!("vault not found: {}", args.vault))?;
    let entries = aggregate::vault_entries(&ws.store, vault);

    if ctx.json {
        return print_json(&VaultDetailJson {
            vault,
            entries: entries.into_iter().map(entry_to_json).collect(),
        });
    }
    println!("{}", format_vault_line(vault, entries.len()));
    println!();
    for entry in entries {
        println!("{}", format_entry_line(entry));
    }
    Ok(())
}

fn cmd_vault_edit(args: VaultEditArgs, ctx: &Context) -> CmdResult {
    if args.name.is_none() && args.icon.is_none() && args.color.is_none() {
        return Err("nothing to change (give --name, --icon or --color)".into());
    }
    let mut ws = ctx.load()?;
    let id = resolve_vault(&ws, &args.vault)?;
    vault_ops::edit_vault(
        &mut ws.store,
        &id,
        args.name.as_deref(),
        args.icon.as_deref(),
        args.color.as_deref(),
    )?;
    save(&ws)?;
    println!("{} updated", short_id(&id));
    Ok(())
}

#[derive(Clone, Copy)]
enum Membership {
    Set,
    Add,
    Remove,
}

fn cmd_vault_members(args: VaultMembersArgs, ctx: &Context, mode: Membership) -> CmdResult {
    let mut ws = ctx.load()?;
    let vault_id = resolve_vault(&ws, &args.vault)?;
    let change = match mode {
        Membership::Set => {
            let ids = resolve_entries(&ws, &args.entries)?;
            vault_ops::update_vault_membership(&mut ws.store, &vault_id, &ids)?
        }
        Membership::Add => {
            let ids = resolve_entries(&ws, &args.entries)?;
            let mut change = vault_ops::MembershipChange::default();
            for id in &ids {
                let step = vault_ops::add_to_vault(&mut ws.store, &vault_id, id)?;
                change.added.extend(step.added);
            }
            change
        }
        Membership::Remove => {
            // Dangling IDs are not resolvable, so take them verbatim.
            let mut change = vault_ops::MembershipChange::default();
            for key in &args.entries {
                let id = resolve_entry(&ws, key).unwrap_or_else(|_| key.clone());
                let step = vault_ops::remove_from_vault(&mut ws.store, &vault_id, &id)?;
                change.removed.extend(step.removed);
            }
            change
        }
    };
    save(&ws)?;

    if ctx.json {
        return print_json(&change);
    }
    if change.is_empty() {
        println!("no change");
    }
    for id in &change.added {
        println!("+ {}", short_id(id));
    }
    for id in &change.removed {
        println!("- {}", short_id(id));
    }
    Ok(())
}

fn cmd_vault_rm(args: VaultArg, ctx: &Context) -> CmdResult {
    let mut ws = ctx.load()?;
    let id = resolve_vault(&ws, &args.vault)?;
    let vault = vault_ops::delete_vault(&mut ws.store, &id)?;
    recovery::log_deletion(
        &ws.osint_dir,
        "vault",
        &id,
        &serde_json::to_string_pretty(&vault)?,
    );
    save(&ws)?;
    println!("deleted vault {}", vault.name);
    Ok(())
}

fn cmd_vault_export(args: VaultExportArgs, ctx: &Context) -> CmdResult {
    let ws = ctx.load()?;
    let id = resolve_vault(&ws, &args.vault)?;
    let export = vault_ops::export_vault(&ws.store, &id)?;
    write_output(
        args.output.as_deref(),
        &serde_json::to_string_pretty(&export)?,
    )
}

fn cmd_vault_import(args: FileArg, ctx: &Context) -> CmdResult {
    let mut ws = ctx.load()?;
    let text = std::fs::read_to_string(&args.file)
        .map_err(|e| format!("could not read {}: {}", args.file, e))?;
    let doc = import::parse_vault_import(&text)?;
    let defaults = VaultStyle {
        name: String::new(),
        icon: ws.config.vaults.default_icon.clone(),
        color: ws.config.vaults.default_color.clone(),
    };
    let result = import::import_vault(&mut ws.store, doc, &defaults)?;
    save(&ws)?;

    if ctx.json {
        return print_json(&result);
    }
    println!(
        "{}  ({} new entries, {} already present)",
        result.vault_id, result.inserted, result.joined
    );
    Ok(())
}

fn cmd_vault_timeline(args: VaultArg, ctx: &Context) -> CmdResult {
    let ws = ctx.load()?;
    let id = resolve_vault(&ws, &args.vault)?;
    let events = aggregate::vault_timeline(&ws.store, &id, &normalizer())?;
    print_events(&events, &ws, ctx)
}

fn print_events(
    events: &[crate::model::timeline::TimelineEvent],
    ws: &Workspace,
    ctx: &Context,
) -> CmdResult {
    if ctx.json {
        return print_json(&events);
    }
    for ev in events {
        println!("{}", format_event_line(ev, &ws.config.timeline.date_format));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Timeline commands
// ---------------------------------------------------------------------------

fn cmd_timeline(cmd: TimelineCmd, ctx: &Context) -> CmdResult {
    match cmd.action {
        TimelineAction::Ls(args) => cmd_timeline_ls(args, ctx),
        TimelineAction::Add(args) => cmd_timeline_add(args, ctx),
        TimelineAction::Rm(args) => cmd_timeline_rm(args, ctx),
        TimelineAction::Import(args) => cmd_timeline_import(args, ctx),
        TimelineAction::Export(args) => cmd_timeline_export(args, ctx),
    }
}

fn cmd_timeline_ls(args: TimelineLsArgs, ctx: &Context) -> CmdResult {
    let ws = ctx.load()?;
    let events = if args.entries {
        let mut all = ws.store.timeline.clone();
        all.extend(aggregate::entries_timeline(&ws.store, &normalizer()));
        aggregate::sorted_timeline(all)
    } else {
        timeline_ops::list_events(&ws.store)
    };
    print_events(&events, &ws, ctx)
}

fn cmd_timeline_add(args: TimelineAddArgs, ctx: &Context) -> CmdResult {
    let mut ws = ctx.load()?;
    let id = timeline_ops::add_event(
        &mut ws.store,
        NewEvent {
            timestamp: args.timestamp,
            title: args.title,
            category: args.category,
            confidence: args.confidence,
            notes: args.notes,
            evidence: args.evidence,
            actor: args.actor,
        },
    )?;
    save(&ws)?;
    if ctx.json {
        return print_json(&serde_json::json!({ "id": id }));
    }
    println!("{}", id);
    Ok(())
}

fn cmd_timeline_rm(args: TimelineRmArgs, ctx: &Context) -> CmdResult {
    let mut ws = ctx.load()?;
    let event = timeline_ops::remove_event(&mut ws.store, &args.id)?;
    save(&ws)?;
    println!("removed event {} {}", short_id(&event.id), event.title);
    Ok(())
}

fn cmd_timeline_import(args: FileArg, ctx: &Context) -> CmdResult {
    let mut ws = ctx.load()?;
    let text = std::fs::read_to_string(&args.file)
        .map_err(|e| format!("could not read {}: {}", args.file, e))?;
    let events = import::parse_timeline_import(&text)?;
    let result = import::import_timeline(&mut ws.store, events);
    save(&ws)?;
    if ctx.json {
        return print_json(&result);
    }
    println!(
        "imported {} events ({} replaced)",
        result.added + result.replaced,
        result.replaced
    );
    Ok(())
}

fn cmd_timeline_export(args: TimelineExportArgs, ctx: &Context) -> CmdResult {
    let ws = ctx.load()?;
    let export = timeline_ops::export_timeline(&ws.store);
    write_output(
        args.output.as_deref(),
        &serde_json::to_string_pretty(&export)?,
    )
}

// ---------------------------------------------------------------------------
// Categories, stats, check
// ---------------------------------------------------------------------------

fn cmd_category(cmd: CategoryCmd, ctx: &Context) -> CmdResult {
    let mut ws = ctx.load()?;
    match cmd.action {
        CategoryAction::Ls => {
            let cats = category_ops::list_categories(&ws.store);
            if ctx.json {
                let out: Vec<CategoryJson> = cats
                    .into_iter()
                    .map(|(name, tools)| CategoryJson { name, tools })
                    .collect();
                return print_json(&out);
            }
            for (name, tools) in cats {
                println!("{:<20} {}", name, tools);
            }
            Ok(())
        }
        CategoryAction::Add(args) => {
            category_ops::add_category(&mut ws.store, &args.name)?;
            save(&ws)?;
            println!("added category {}", args.name.trim());
            Ok(())
        }
        CategoryAction::Rm(args) => {
            let removed = category_ops::remove_category(&mut ws.store, &args.name)?;
            save(&ws)?;
            println!("removed category {}", removed);
            Ok(())
        }
    }
}

fn cmd_stats(ctx: &Context) -> CmdResult {
    let ws = ctx.load()?;
    let dash = aggregate::dashboard(&ws.store, &normalizer());
    if ctx.json {
        return print_json(&dash);
    }
    for line in format_dashboard(&dash) {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_check(args: CheckArgs, ctx: &Context) -> CmdResult {
    let mut ws = ctx.load()?;
    let result = check::check_store(&ws.store);
    let repaired = if args.fix {
        let summary = check::repair_store(&mut ws.store);
        if !summary.is_empty() {
            save(&ws)?;
        }
        Some(summary)
    } else {
        None
    };

    if ctx.json {
        return print_json(&serde_json::json!({
            "valid": result.valid,
            "errors": result.errors,
            "warnings": result.warnings,
            "repaired": repaired,
        }));
    }

    if !result.errors.is_empty() {
        println!("Errors:");
        for err in &result.errors {
            match err {
                check::CheckError::DanglingMember { vault_id, entry_id } => {
                    println!("  vault {} lists missing entry {}", vault_id, entry_id);
                }
                check::CheckError::MissingBacklink { vault_id, entry_id } => {
                    println!(
                        "  vault {} lists {} but the entry does not reference it",
                        vault_id, entry_id
                    );
                }
                check::CheckError::UnlistedMember { vault_id, entry_id } => {
                    println!(
                        "  entry {} references vault {} which does not list it",
                        entry_id, vault_id
                    );
                }
                check::CheckError::UnknownVault { entry_id, vault_id } => {
                    println!("  entry {} references unknown vault {}", entry_id, vault_id);
                }
            }
        }
    }
    if !result.warnings.is_empty() {
        if !result.errors.is_empty() {
            println!();
        }
        println!("Warnings:");
        for warn in &result.warnings {
            match warn {
                check::CheckWarning::DuplicateMember { vault_id, entry_id } => {
                    println!("  vault {} lists {} more than once", vault_id, entry_id);
                }
                check::CheckWarning::DuplicateTab { entry_id, vault_id } => {
                    println!("  entry {} lists vault {} more than once", entry_id, vault_id);
                }
                check::CheckWarning::UnparsableDate { entry_id, value } => {
                    println!("  entry {} has unparsable date \"{}\"", entry_id, value);
                }
                check::CheckWarning::DuplicateEventId { event_id } => {
                    println!("  timeline event id {} is used more than once", event_id);
                }
                check::CheckWarning::DuplicateEntryId { entry_id } => {
                    println!(
                        "  entry id {} appeared more than once; only the last copy was loaded",
                        entry_id
                    );
                }
            }
        }
    }
    if let Some(summary) = &repaired {
        println!(
            "repaired: {} members dropped, {} vault references fixed",
            summary.members_dropped, summary.tabs_fixed
        );
    } else if result.valid {
        println!("✓ workspace is valid");
    } else {
        println!("✗ workspace has errors (run `ov check --fix` to repair)");
    }
    Ok(())
}
