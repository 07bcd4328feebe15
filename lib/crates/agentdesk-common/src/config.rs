use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

/// Gateway configuration as read from `AGENTDESK_*` environment variables.
///
/// Directory fields are left unresolved here; the gateway resolves them
/// against the home directory exactly once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Listen address (default: 127.0.0.1:8787)
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,

    /// Directory holding the collection documents (default: ~/.agentdesk)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Directory scanned for projects (default: ~/.claude/projects)
    #[serde(default)]
    pub projects_dir: Option<PathBuf>,

    /// External CLI executable name or path
    #[serde(default = "default_cli_bin")]
    pub cli_bin: String,

    /// Per-invocation timeout for the external CLI, in seconds
    #[serde(default = "default_cli_timeout_secs")]
    pub cli_timeout_secs: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cli_timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("cli_bin must not be empty")]
    EmptyCliBin,
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, 8787))
}

fn default_cli_bin() -> String {
    "claude".to_string()
}

fn default_cli_timeout_secs() -> u64 {
    300
}

impl GatewayConfig {
    /// Check the values that serde defaults cannot guard.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cli_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.cli_bin.trim().is_empty() {
            return Err(ConfigError::EmptyCliBin);
        }
        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            data_dir: None,
            projects_dir: None,
            cli_bin: default_cli_bin(),
            cli_timeout_secs: default_cli_timeout_secs(),
        }
    }
}
