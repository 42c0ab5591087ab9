//! `pingbridge health`: is the approval service up?

use crate::approval::types::ServiceHealth;
use crate::config::BridgeConfig;
use crate::utils::paths;
use anyhow::{bail, Result};
use colored::Colorize;

pub async fn run_health(config: &BridgeConfig) -> Result<()> {
    let url = paths::sibling_url(&config.endpoint, "health");
    let health: ServiceHealth = super::fetch_json(&url).await?;

    println!();
    if health.status.eq_ignore_ascii_case("UP") {
        println!(
            "  {} Approval service is up ({})",
            "✓".green().bold(),
            health.service.as_deref().unwrap_or("unnamed")
        );
        println!("  {}", url.dimmed());
        println!();
        Ok(())
    } else {
        bail!("Approval service at {} reports status '{}'", url, health.status)
    }
}
