//! `pingbridge request <id>`: look up one request by the id a verdict carried.

use crate::approval::types::PendingRequest;
use crate::config::BridgeConfig;
use crate::utils::paths;
use anyhow::{anyhow, bail, Context, Result};
use colored::Colorize;

pub async fn run_request(config: &BridgeConfig, id: &str) -> Result<()> {
    let url = request_url(&config.endpoint, id)?;
    let Some(request) = super::fetch_json_if_found::<PendingRequest>(&url).await? else {
        bail!("No such request '{}' at {}", id, url);
    };

    println!();
    println!("{}", format_request(&request));
    println!();
    Ok(())
}

/// `<sibling>/request/<id>`, with the id escaped as one path segment.
fn request_url(endpoint: &str, id: &str) -> Result<String> {
    let base = paths::sibling_url(endpoint, "request");
    let mut url =
        reqwest::Url::parse(&base).with_context(|| format!("Invalid endpoint URL {}", endpoint))?;
    url.path_segments_mut()
        .map_err(|_| anyhow!("Endpoint {} cannot carry a path", endpoint))?
        .push(id);
    Ok(url.into())
}

fn format_request(request: &PendingRequest) -> String {
    let status = request.status.as_deref().unwrap_or("PENDING");
    let status = match status {
        "APPROVED" => status.green(),
        "REJECTED" | "TIMEOUT" => status.red(),
        _ => status.yellow(),
    };

    let mut out = format!("  {} {}", request.id.cyan().bold(), status);
    if let Some(timestamp) = &request.timestamp {
        out.push_str(&format!("\n  {} {}", "asked:".dimmed(), timestamp));
    }
    out.push('\n');
    for line in request.question.lines() {
        out.push_str("\n    ");
        out.push_str(line);
    }
    if let Some(context) = request.context.as_deref().filter(|c| !c.is_empty()) {
        out.push_str(&format!("\n\n  {}", "context:".dimmed()));
        for line in context.lines() {
            out.push_str("\n    ");
            out.push_str(line);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_sits_next_to_endpoint() {
        assert_eq!(
            request_url("http://localhost:8080/api/hook/ask", "r-1").unwrap(),
            "http://localhost:8080/api/hook/request/r-1"
        );
    }

    #[test]
    fn test_request_url_escapes_id() {
        assert_eq!(
            request_url("http://localhost:8080/api/hook/ask", "a/b c").unwrap(),
            "http://localhost:8080/api/hook/request/a%2Fb%20c"
        );
    }

    #[test]
    fn test_format_request_shows_context() {
        colored::control::set_override(false);
        let request = PendingRequest {
            id: "r-1".to_string(),
            question: "Run this shell command?\n\nCommand: ls".to_string(),
            context: Some("{\"cwd\":\"/work\"}".to_string()),
            timestamp: Some("2026-10-18T09:00:00".to_string()),
            status: Some("APPROVED".to_string()),
        };
        let out = format_request(&request);
        assert!(out.starts_with("  r-1 APPROVED"));
        assert!(out.contains("asked: 2026-10-18T09:00:00"));
        assert!(out.contains("\n    Command: ls"));
        assert!(out.contains("context:\n    {\"cwd\":\"/work\"}"));
    }
}
