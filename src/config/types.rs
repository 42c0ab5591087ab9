//! Resolved configuration for the bridge.
//!
//! The endpoint and timeout are "fixed" from the hook's point of view: they
//! are resolved once at startup and never change during a run.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Where the approval service listens when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api/hook/ask";

/// How long the hook waits for a human to answer (10 minutes).
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

pub const ENV_ENDPOINT: &str = "PINGBRIDGE_ENDPOINT";
pub const ENV_TIMEOUT_SECS: &str = "PINGBRIDGE_TIMEOUT_SECS";
pub const ENV_LOG_FILE: &str = "PINGBRIDGE_LOG_FILE";
pub const ENV_CONFIG: &str = "PINGBRIDGE_CONFIG";

/// Which layer supplied the final configuration values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
    Env(&'static str),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Defaults => write!(f, "built-in defaults"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Env(var) => write!(f, "${}", var),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Full URL the permission envelope is POSTed to.
    pub endpoint: String,

    /// Upper bound on the whole approval round trip.
    pub timeout: Duration,

    /// Audit log location. `None` when no home directory could be found,
    /// in which case audit lines are dropped.
    pub log_file: Option<PathBuf>,

    /// Layers applied on top of the defaults, in order.
    pub sources: Vec<ConfigSource>,
}

impl BridgeConfig {
    /// Built-in defaults, with the log file placed under `home` if known.
    pub fn defaults(home: Option<&std::path::Path>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_file: home.map(crate::utils::paths::default_log_file),
            sources: vec![ConfigSource::Defaults],
        }
    }

    /// Reject values the hook could never work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                key: "endpoint",
                reason: format!("'{}' is not an http(s) URL", self.endpoint),
            });
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::Invalid {
                key: "timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}
