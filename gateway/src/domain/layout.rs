//! Resolved on-disk layout of the gateway's documents.
//!
//! Resolution happens once at startup; the resulting `StorageLayout` is
//! handed to every store and never re-derived from the environment.

use std::path::{Path, PathBuf};

use agentdesk_common::GatewayConfig;
use serde::Serialize;
use thiserror::Error;

/// Directory under `$HOME` used when no data directory is configured.
pub const DEFAULT_DATA_DIR_NAME: &str = ".agentdesk";

pub const AGENTS_FILE: &str = "agents.json";
pub const COMMANDS_FILE: &str = "commands.json";
pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("cannot determine home directory; set AGENTDESK_DATA_DIR and AGENTDESK_PROJECTS_DIR")]
    NoHomeDir,
}

/// Absolute locations of every document the gateway owns or reads.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StorageLayout {
    pub data_dir: PathBuf,
    pub agents_file: PathBuf,
    pub commands_file: PathBuf,
    pub settings_file: PathBuf,
    pub projects_dir: PathBuf,
}

impl StorageLayout {
    /// Lay out the documents beneath `data_dir`.
    #[must_use]
    pub fn new(data_dir: &Path, projects_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            agents_file: data_dir.join(AGENTS_FILE),
            commands_file: data_dir.join(COMMANDS_FILE),
            settings_file: data_dir.join(SETTINGS_FILE),
            projects_dir: projects_dir.to_path_buf(),
        }
    }

    /// Resolve configured directories, falling back to `home`-relative
    /// defaults for whatever the configuration leaves unset.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::NoHomeDir` when a default is needed and `home`
    /// is `None`.
    pub fn resolve(config: &GatewayConfig, home: Option<&Path>) -> Result<Self, LayoutError> {
        let data_dir = match (&config.data_dir, home) {
            (Some(dir), _) => dir.clone(),
            (None, Some(home)) => home.join(DEFAULT_DATA_DIR_NAME),
            (None, None) => return Err(LayoutError::NoHomeDir),
        };
        let projects_dir = match (&config.projects_dir, home) {
            (Some(dir), _) => dir.clone(),
            (None, Some(home)) => home.join(".claude").join("projects"),
            (None, None) => return Err(LayoutError::NoHomeDir),
        };
        Ok(Self::new(&data_dir, &projects_dir))
    }
}
