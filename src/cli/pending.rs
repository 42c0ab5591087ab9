//! `pingbridge pending`: list requests the service is still waiting on.

use crate::approval::types::PendingRequest;
use crate::config::BridgeConfig;
use crate::utils::paths;
use anyhow::Result;
use colored::Colorize;

pub async fn run_pending(config: &BridgeConfig) -> Result<()> {
    let url = paths::sibling_url(&config.endpoint, "pending");
    let pending: Vec<PendingRequest> = super::fetch_json(&url).await?;

    println!();
    if pending.is_empty() {
        println!("  {} No pending approval requests.", "ℹ".blue());
        println!();
        return Ok(());
    }

    println!(
        "  {} pending {}:",
        pending.len().to_string().bold(),
        if pending.len() == 1 { "request" } else { "requests" }
    );
    println!();
    for request in &pending {
        println!("{}", format_pending(request));
    }
    println!();
    Ok(())
}

/// One listing entry: header line, then the question indented underneath.
fn format_pending(request: &PendingRequest) -> String {
    let mut out = format!(
        "  {} {} {}",
        request.id.cyan(),
        request.status.as_deref().unwrap_or("PENDING").yellow(),
        request.timestamp.as_deref().unwrap_or("").dimmed()
    );
    for line in request.question.lines() {
        out.push_str("\n      ");
        out.push_str(line);
    }
    out
}
