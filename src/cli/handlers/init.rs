use std::fs;

use crate::cli::commands::InitArgs;
use crate::io::store_io;
use crate::io::workspace_io::{self, CONFIG_FILE, OSINT_DIR};
use crate::model::store::Store;
use crate::ops::category_ops;

use super::Context;

const WORKSPACE_TOML_TEMPLATE: &str = r##"[workspace]
name = "{name}"

# Styling for new vaults when --icon / --color are not given.
[vaults]
default_icon = "folder"
default_color = "#4488FF"

# chrono format string for human-readable timestamps.
[timeline]
date_format = "%Y-%m-%d %H:%M"

# Log filter used when OV_LOG is unset, e.g. "debug" or "osint_vault=debug".
[log]
level = "warn"
"##;

/// Infer a workspace name from a directory name: replace hyphens with spaces, title-case.
fn infer_name(dir_name: &str) -> String {
    dir_name
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => {
                    let upper: String = c.to_uppercase().collect();
                    upper + &chars.collect::<String>()
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_workspace_toml(name: &str) -> String {
    let escaped = name.replace('\\', "\\\\").replace('"', "\\\"");
    WORKSPACE_TOML_TEMPLATE.replace("{name}", &escaped)
}

pub fn cmd_init(args: InitArgs, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let osint_dir = ctx.start.join(OSINT_DIR);

    if osint_dir.join(CONFIG_FILE).exists() {
        return Err(format!("workspace already exists in {}/", osint_dir.display()).into());
    }

    if let Some(parent) = ctx.start.parent()
        && let Ok(parent_root) = workspace_io::discover_workspace(parent)
    {
        eprintln!(
            "Note: parent workspace found at {}/",
            parent_root.join(OSINT_DIR).display()
        );
        eprintln!("Creating new workspace in ./{}/", OSINT_DIR);
    }

    let name = args.name.unwrap_or_else(|| {
        ctx.start
            .file_name()
            .and_then(|n| n.to_str())
            .map(infer_name)
            .unwrap_or_else(|| "Untitled".to_string())
    });

    let mut store = Store::default();
    for category in &args.category {
        category_ops::add_category(&mut store, category)?;
    }

    fs::create_dir_all(&osint_dir)?;
    fs::write(osint_dir.join(CONFIG_FILE), render_workspace_toml(&name))?;
    store_io::save_store(&osint_dir, &store)?;

    if ctx.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "name": name,
                "path": osint_dir,
                "categories": store.categories,
            }))?
        );
    } else {
        println!("Initialized workspace: {}", name);
        for category in &store.categories {
            println!("  category: {}", category);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::WorkspaceConfig;

    #[test]
    fn test_infer_name() {
        assert_eq!(infer_name("op-nightfall"), "Op Nightfall");
        assert_eq!(infer_name("case"), "Case");
    }

    #[test]
    fn test_rendered_template_parses() {
        let text = render_workspace_toml("Say \"hi\"");
        let config: WorkspaceConfig = toml::from_str(&text).unwrap();
        assert_eq!(config.workspace.name, "Say \"hi\"");
        assert_eq!(config.vaults.default_color, "#4488FF");
        assert_eq!(config.timeline.date_format, "%Y-%m-%d %H:%M");
        assert_eq!(config.log.level, "warn");
    }
}
