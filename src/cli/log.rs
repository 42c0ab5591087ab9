//! `pingbridge log`: show what the hook has been doing.

use crate::audit::AuditReader;
use crate::bridge::RUN_MARKER;
use crate::config::BridgeConfig;
use anyhow::{Context, Result};
use colored::Colorize;

pub fn run_log(config: &BridgeConfig, lines: usize) -> Result<()> {
    let path = config
        .log_file
        .as_ref()
        .context("No log file configured (could not determine home directory)")?;
    let reader = AuditReader::new(path);
    let entries = reader.tail(lines)?;

    if entries.is_empty() {
        println!();
        println!("  {} No hook activity logged yet.", "ℹ".blue());
        println!("  {}", reader.path().display().to_string().dimmed());
        println!();
        return Ok(());
    }

    println!();
    for line in &entries {
        println!("  {}", colorize(line));
    }
    println!();
    println!(
        "  {} runs shown from {}",
        AuditReader::runs(&entries).len(),
        reader.path().display().to_string().dimmed()
    );
    println!();
    Ok(())
}

fn colorize(line: &str) -> String {
    if line.contains("Permission ALLOWED") {
        line.green().to_string()
    } else if line.contains("Permission DENIED") {
        line.red().to_string()
    } else if line.contains("Error") {
        line.red().bold().to_string()
    } else if line.contains(RUN_MARKER) {
        line.bold().to_string()
    } else {
        line.to_string()
    }
}
