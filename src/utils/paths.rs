//! Filesystem and URL helpers shared by the hook and the CLI.
//!
//! Everything pingbridge keeps on disk lives under `~/.pingbridge/`:
//! `config.yaml` (optional) and `pingbridge.log` (the audit trail).

use std::path::{Path, PathBuf};

/// Name of the per-user application directory under `$HOME`.
pub const APP_DIR: &str = ".pingbridge";

/// The per-user application directory (`~/.pingbridge`).
pub fn app_dir(home: &Path) -> PathBuf {
    home.join(APP_DIR)
}

/// Default audit log location.
pub fn default_log_file(home: &Path) -> PathBuf {
    app_dir(home).join("pingbridge.log")
}

/// Default config file location.
pub fn default_config_file(home: &Path) -> PathBuf {
    app_dir(home).join("config.yaml")
}

/// Expand a leading `~/` against the given home directory.
/// Paths without the prefix (or with no home available) are returned as-is.
pub fn expand_home(path: &str, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

/// Replace the last path segment of `endpoint` with `leaf`.
///
/// The approval endpoint is `.../api/hook/ask`; the service exposes its
/// read-only routes (`health`, `pending`) next to it.
pub fn sibling_url(endpoint: &str, leaf: &str) -> String {
    let trimmed = endpoint.trim_end_matches('/');
    let path_start = trimmed.find("://").map(|i| i + 3).unwrap_or(0);
    match trimmed[path_start..].rfind('/') {
        Some(idx) => format!("{}/{}", &trimmed[..path_start + idx], leaf),
        None => format!("{}/{}", trimmed, leaf),
    }
}
