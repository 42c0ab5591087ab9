//! `pingbridge config`: print the resolved configuration.

use crate::config::BridgeConfig;
use anyhow::Result;
use colored::Colorize;

pub fn run_config(config: &BridgeConfig) -> Result<()> {
    println!();
    println!("  Endpoint: {}", config.endpoint.cyan());
    println!("  Timeout:  {}s", config.timeout.as_secs());
    println!(
        "  Log file: {}",
        config
            .log_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(disabled)".to_string())
    );
    println!();
    println!("  {}", "Sources (later wins):".dimmed());
    for source in &config.sources {
        println!("    {}", source);
    }
    println!();
    Ok(())
}
