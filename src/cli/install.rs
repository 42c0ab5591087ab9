//! `pingbridge install`: register the hook in the agent's user settings.
//!
//! Adds a `PermissionRequest` command hook pointing at `pingbridge-hook` to
//! `~/.claude/settings.json`. Existing hooks are left alone and running the
//! command twice does not add a second entry.

use crate::config::BridgeConfig;
use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

pub const HOOK_BINARY: &str = "pingbridge-hook";

/// Grace period so the hook's own HTTP timeout fires before the caller's.
const CALLER_TIMEOUT_MARGIN_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    AlreadyInstalled,
}

pub fn run_install(config: &BridgeConfig) -> Result<()> {
    let settings_path = agent_settings_path()?;
    let hook_binary = find_hook_binary();
    let timeout_secs = config.timeout.as_secs() + CALLER_TIMEOUT_MARGIN_SECS;

    println!();
    match install_hook(&settings_path, &hook_binary, timeout_secs)? {
        InstallOutcome::Installed => {
            println!("  {} Installed PermissionRequest hook", "✓".green());
        }
        InstallOutcome::AlreadyInstalled => {
            println!("  {} PermissionRequest hook already installed", "✓".green());
        }
    }
    println!("    {}", settings_path.display().to_string().dimmed());
    println!("    {}", hook_binary.display().to_string().dimmed());
    println!();
    Ok(())
}

/// Merge the hook entry into the settings file at `settings_path`.
pub fn install_hook(
    settings_path: &Path,
    hook_binary: &Path,
    timeout_secs: u64,
) -> Result<InstallOutcome> {
    let mut settings = load_settings(settings_path)?;

    let entries = permission_entries(&mut settings)?;
    if entries.iter().any(runs_pingbridge) {
        return Ok(InstallOutcome::AlreadyInstalled);
    }
    entries.push(json!({
        "matcher": "*",
        "hooks": [{
            "type": "command",
            "command": hook_binary.to_string_lossy(),
            "timeout": timeout_secs
        }]
    }));

    if let Some(parent) = settings_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(settings_path, serde_json::to_string_pretty(&settings)?)
        .with_context(|| format!("Failed to write {}", settings_path.display()))?;

    Ok(InstallOutcome::Installed)
}

/// The settings document, or an empty object when the file does not exist yet.
fn load_settings(path: &Path) -> Result<Value> {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(json!({})),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}

/// `hooks.PermissionRequest`, created empty if missing.
fn permission_entries(settings: &mut Value) -> Result<&mut Vec<Value>> {
    settings
        .as_object_mut()
        .ok_or_else(|| anyhow!("settings.json is not an object"))?
        .entry("hooks")
        .or_insert_with(|| json!({}))
        .as_object_mut()
        .ok_or_else(|| anyhow!("\"hooks\" in settings.json is not an object"))?
        .entry("PermissionRequest")
        .or_insert_with(|| json!([]))
        .as_array_mut()
        .ok_or_else(|| anyhow!("\"hooks.PermissionRequest\" in settings.json is not an array"))
}

/// Whether a matcher entry already runs some `pingbridge-hook` command.
fn runs_pingbridge(entry: &Value) -> bool {
    entry["hooks"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|hook| hook["command"].as_str())
        .any(|command| command.contains(HOOK_BINARY))
}

/// The agent's per-user settings file.
fn agent_settings_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home.join(".claude").join("settings.json"))
}

/// `pingbridge-hook` from the same directory as this binary, a usual install
/// prefix, or else the bare name for PATH lookup.
fn find_hook_binary() -> PathBuf {
    let beside_us = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(HOOK_BINARY)));
    let user_bin = dirs::home_dir().map(|home| home.join(".local/bin").join(HOOK_BINARY));

    beside_us
        .into_iter()
        .chain(["/usr/local/bin", "/usr/bin"].map(|dir| Path::new(dir).join(HOOK_BINARY)))
        .chain(user_bin)
        .find(|candidate| candidate.is_file())
        .unwrap_or_else(|| PathBuf::from(HOOK_BINARY))
}
