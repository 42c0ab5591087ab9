//! Config loading: defaults, then `~/.pingbridge/config.yaml`, then env vars.
//!
//! # Example config file:
//! ```yaml
//! endpoint: http://approvals.internal:8080/api/hook/ask
//! timeout_secs: 300
//! log_file: ~/logs/pingbridge.log
//! ```
//!
//! Every key is optional. A missing default file is fine; a file named
//! explicitly through `PINGBRIDGE_CONFIG` must exist.

use crate::config::types::*;
use crate::utils::paths;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The config file as written on disk.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    endpoint: Option<String>,
    #[serde(default)]
    timeout_secs: Option<u64>,
    #[serde(default)]
    log_file: Option<String>,
}

/// Load configuration from the real environment and home directory.
pub fn load() -> Result<BridgeConfig, ConfigError> {
    let home = dirs::home_dir();
    load_with(|key| std::env::var(key).ok(), home.as_deref())
}

/// Load configuration with an injectable environment lookup and home directory.
pub fn load_with(
    env: impl Fn(&str) -> Option<String>,
    home: Option<&Path>,
) -> Result<BridgeConfig, ConfigError> {
    let mut config = BridgeConfig::defaults(home);

    match env(ENV_CONFIG).filter(|v| !v.is_empty()) {
        Some(explicit) => {
            let path = paths::expand_home(&explicit, home);
            let raw = read_config_file(&path)?;
            apply_file(&mut config, raw, path, home);
        }
        None => {
            if let Some(path) = home.map(paths::default_config_file) {
                if path.exists() {
                    let raw = read_config_file(&path)?;
                    apply_file(&mut config, raw, path, home);
                }
            }
        }
    }

    apply_env(&mut config, &env, home)?;
    config.validate()?;

    tracing::debug!(
        "Resolved config: endpoint={} timeout={:?} log_file={:?}",
        config.endpoint,
        config.timeout,
        config.log_file
    );
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_config_str(content: &str) -> Result<RawConfig, serde_yaml::Error> {
    // An empty file deserializes as YAML null, not as an empty mapping.
    if content.trim().is_empty() {
        return Ok(RawConfig::default());
    }
    serde_yaml::from_str(content)
}

fn apply_file(config: &mut BridgeConfig, raw: RawConfig, path: PathBuf, home: Option<&Path>) {
    if let Some(endpoint) = raw.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(secs) = raw.timeout_secs {
        config.timeout = Duration::from_secs(secs);
    }
    if let Some(log_file) = raw.log_file {
        config.log_file = Some(paths::expand_home(&log_file, home));
    }
    config.sources.push(ConfigSource::File(path));
}

fn apply_env(
    config: &mut BridgeConfig,
    env: &impl Fn(&str) -> Option<String>,
    home: Option<&Path>,
) -> Result<(), ConfigError> {
    if let Some(endpoint) = env(ENV_ENDPOINT).filter(|v| !v.is_empty()) {
        config.endpoint = endpoint;
        config.sources.push(ConfigSource::Env(ENV_ENDPOINT));
    }

    if let Some(raw) = env(ENV_TIMEOUT_SECS).filter(|v| !v.is_empty()) {
        let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
            key: "timeout_secs",
            reason: format!("{} must be a whole number of seconds, got '{}'", ENV_TIMEOUT_SECS, raw),
        })?;
        config.timeout = Duration::from_secs(secs);
        config.sources.push(ConfigSource::Env(ENV_TIMEOUT_SECS));
    }

    if let Some(log_file) = env(ENV_LOG_FILE).filter(|v| !v.is_empty()) {
        config.log_file = Some(paths::expand_home(&log_file, home));
        config.sources.push(ConfigSource::Env(ENV_LOG_FILE));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        let home = TempDir::new().unwrap();
        let config = load_with(env_from(&[]), Some(home.path())).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(
            config.log_file,
            Some(home.path().join(".pingbridge/pingbridge.log"))
        );
        assert_eq!(config.sources, vec![ConfigSource::Defaults]);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let home = TempDir::new().unwrap();
        let dir = home.path().join(".pingbridge");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("config.yaml"),
            "endpoint: http://approvals.internal:9000/api/hook/ask\n\
             timeout_secs: 120\n\
             log_file: ~/logs/bridge.log\n",
        )
        .unwrap();

        let config = load_with(env_from(&[]), Some(home.path())).unwrap();
        assert_eq!(config.endpoint, "http://approvals.internal:9000/api/hook/ask");
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert_eq!(config.log_file, Some(home.path().join("logs/bridge.log")));
        assert_eq!(config.sources.len(), 2);
    }

    #[test]
    fn test_env_overrides_file() {
        let home = TempDir::new().unwrap();
        let dir = home.path().join(".pingbridge");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.yaml"), "timeout_secs: 120\n").unwrap();

        let config = load_with(
            env_from(&[
                (ENV_ENDPOINT, "http://127.0.0.1:7777/ask"),
                (ENV_TIMEOUT_SECS, "5"),
            ]),
            Some(home.path()),
        )
        .unwrap();
        assert_eq!(config.endpoint, "http://127.0.0.1:7777/ask");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.sources.contains(&ConfigSource::Env(ENV_ENDPOINT)));
    }

    #[test]
    fn test_empty_file_is_fine() {
        let home = TempDir::new().unwrap();
        let path = home.path().join("empty.yaml");
        std::fs::write(&path, "").unwrap();
        let config = load_with(
            env_from(&[(ENV_CONFIG, path.to_str().unwrap())]),
            Some(home.path()),
        )
        .unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let home = TempDir::new().unwrap();
        let err = load_with(
            env_from(&[(ENV_CONFIG, "/definitely/not/here.yaml")]),
            Some(home.path()),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_unknown_key_is_a_parse_error() {
        let home = TempDir::new().unwrap();
        let path = home.path().join("bad.yaml");
        std::fs::write(&path, "endpoint: http://x/ask\nretries: 3\n").unwrap();
        let err = load_with(
            env_from(&[(ENV_CONFIG, path.to_str().unwrap())]),
            Some(home.path()),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_bad_timeout_env() {
        let err = load_with(env_from(&[(ENV_TIMEOUT_SECS, "ten")]), None).unwrap_err();
        assert!(err.to_string().contains("ten"));
    }

    #[test]
    fn test_no_home_means_no_log_file() {
        let config = load_with(env_from(&[]), None).unwrap();
        assert!(config.log_file.is_none());
    }
}
