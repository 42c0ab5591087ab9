//! pingbridge-hook: PermissionRequest hook.
//!
//! Called by the agent's hook system when a tool needs permission. Reads the
//! tool call JSON from stdin, asks the approval service, and:
//!   - Exits 0 + decision JSON on stdout (allow OR deny)
//!   - Exits 2 + one stderr line when no verdict could be obtained
//!
//! A deny is a successful answer, so it exits 0 like an allow. Failures never
//! fall back to allow or deny; the caller sees a non-zero exit and no stdout.
//!
//! Every step is appended to `~/.pingbridge/pingbridge.log` (best-effort).

use pingbridge::approval::HttpApproval;
use pingbridge::audit::AuditLog;
use pingbridge::bridge;
use pingbridge::config::{self, BridgeConfig};
use pingbridge::decision::EXIT_DECIDED;
use pingbridge::error::{BridgeError, Result};
use pingbridge::utils::paths;
use std::io::Read;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // stdout is the decision channel; diagnostics go to stderr and stay
    // quiet unless RUST_LOG asks for them.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pingbridge=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let config = match config::load() {
        Ok(config) => config,
        Err(e) => {
            // Still try to leave a trace in the default location.
            let audit = AuditLog::new(dirs::home_dir().map(|h| paths::default_log_file(&h)));
            audit.record(bridge::RUN_MARKER);
            fail(&audit.failed(BridgeError::UnexpectedFailure(format!(
                "configuration: {}",
                e
            ))));
        }
    };

    let audit = AuditLog::new(config.log_file.clone());
    audit.record(bridge::RUN_MARKER);

    match handle(&config, &audit).await {
        Ok(line) => {
            println!("{}", line);
            process::exit(EXIT_DECIDED);
        }
        Err(e) => fail(&e),
    }
}

async fn handle(config: &BridgeConfig, audit: &AuditLog) -> Result<String> {
    let input = read_stdin().map_err(|e| audit.failed(e))?;
    let handler =
        HttpApproval::from_config(config, audit.clone()).map_err(|e| audit.failed(e))?;
    bridge::respond(&input, &handler, audit).await
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| BridgeError::MalformedInput(format!("failed to read stdin: {}", e)))?;
    Ok(input)
}

/// Report an already-audited failure and exit.
fn fail(err: &BridgeError) -> ! {
    eprintln!("[pingbridge] {}", err);
    process::exit(err.exit_code());
}
