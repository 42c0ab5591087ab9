//! pingbridge: operator CLI for the permission-request hook.
//!
//! The hook itself is `pingbridge-hook`; this binary helps set it up and
//! see what it is doing.
//!
//! Quick start:
//!   pingbridge install   # register the hook with your agent
//!   pingbridge health    # is the approval service reachable?
//!   pingbridge log       # what did the hook ask, and what was answered?

use clap::{Parser, Subcommand};
use colored::Colorize;
use pingbridge::cli;
use pingbridge::config;

/// Ask a human (through a remote approval service) before your agent acts.
#[derive(Parser)]
#[command(
    name = "pingbridge",
    version,
    about = "Route agent permission requests to a remote approval service",
    long_about = "pingbridge forwards your agent's permission requests to an approval\n\
                  service and waits for a human to answer.\n\n\
                  Quick start:\n  \
                  pingbridge install   # register the hook\n  \
                  pingbridge health    # check the approval service\n  \
                  pingbridge log       # see recent hook activity"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register pingbridge-hook as a PermissionRequest hook
    Install,

    /// Check that the approval service is up
    Health,

    /// List requests the approval service is still waiting on
    Pending,

    /// Look up one request by the id the service returned
    Request {
        /// Request id, as logged in "RequestID: ..." lines
        id: String,
    },

    /// Show recent hook activity
    Log {
        /// Number of log lines to show
        #[arg(short = 'n', long, default_value_t = 40)]
        lines: usize,
    },

    /// Print the resolved configuration
    Config,
}

#[tokio::main]
async fn main() {
    // Set up tracing (only show at RUST_LOG=debug level to keep output clean)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pingbridge=warn".parse().unwrap()),
        )
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    let result = match config::load() {
        Ok(config) => match cli.command {
            Commands::Install => cli::install::run_install(&config),
            Commands::Health => cli::health::run_health(&config).await,
            Commands::Pending => cli::pending::run_pending(&config).await,
            Commands::Request { id } => cli::request::run_request(&config, &id).await,
            Commands::Log { lines } => cli::log::run_log(&config, lines),
            Commands::Config => cli::config::run_config(&config),
        },
        Err(e) => Err(anyhow::Error::new(e).context("Failed to load configuration")),
    };

    if let Err(e) = result {
        eprintln!();
        eprintln!("  {} {}", "✗".red().bold(), e);
        for cause in e.chain().skip(1) {
            eprintln!("  {} {}", "caused by:".dimmed(), cause);
        }
        eprintln!();
        std::process::exit(1);
    }
}
