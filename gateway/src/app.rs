//! Application wiring — configuration loading, shared HTTP state, and the
//! per-invocation context handed to every CLI command.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use agentdesk_common::{Agent, GatewayConfig, SlashCommand};
use anyhow::{Context, Result};

use crate::application::ports::CommandRunner;
use crate::application::services::{CliToolService, ProjectService, RecordService, SettingsService};
use crate::domain::{Settings, StorageLayout, StoreError};
use crate::infra::{FsProjectSource, JsonDocumentStore, TokioCommandRunner};
use crate::output::OutputContext;

/// Environment variable prefix for every configuration field.
pub const ENV_PREFIX: &str = "AGENTDESK_";

// ── Configuration ─────────────────────────────────────────────────────────────

/// Load `GatewayConfig` from `AGENTDESK_*` environment variables.
///
/// # Errors
///
/// Returns an error if a variable is present but malformed, or the values
/// fail validation.
pub fn load_config() -> Result<GatewayConfig> {
    let config: GatewayConfig = envy::prefixed(ENV_PREFIX)
        .from_env()
        .context("failed to load config from AGENTDESK_* env vars")?;
    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// Resolve the storage layout once, against the current user's home.
///
/// # Errors
///
/// Returns an error if a default directory is needed and no home directory
/// can be determined.
pub fn resolve_layout(config: &GatewayConfig) -> Result<StorageLayout> {
    let home = dirs::home_dir();
    StorageLayout::resolve(config, home.as_deref()).context("resolving storage layout")
}

// ── HTTP state ────────────────────────────────────────────────────────────────

/// Services shared by every HTTP handler for the lifetime of the process.
pub struct AppState {
    pub layout: StorageLayout,
    pub agents: Arc<RecordService<Agent>>,
    pub commands: Arc<RecordService<SlashCommand>>,
    pub settings: Arc<SettingsService>,
    pub projects: Arc<ProjectService>,
    pub cli: Arc<CliToolService>,
}

impl AppState {
    /// Wire production stores and the tokio process runner.
    #[must_use]
    pub fn new(layout: StorageLayout, config: &GatewayConfig) -> Self {
        Self::with_runner(layout, config, Arc::new(TokioCommandRunner))
    }

    /// Wire production stores with an injected process runner.
    #[must_use]
    pub fn with_runner(
        layout: StorageLayout,
        config: &GatewayConfig,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        let agents = JsonDocumentStore::<Vec<Agent>>::new(&layout.agents_file);
        let commands = JsonDocumentStore::<Vec<SlashCommand>>::new(&layout.commands_file);
        let settings = JsonDocumentStore::<Settings>::new(&layout.settings_file);
        let projects = FsProjectSource::new(&layout.projects_dir);

        Self {
            agents: Arc::new(RecordService::new(Arc::new(agents))),
            commands: Arc::new(RecordService::new(Arc::new(commands))),
            settings: Arc::new(SettingsService::new(Arc::new(settings))),
            projects: Arc::new(ProjectService::new(Arc::new(projects))),
            cli: Arc::new(CliToolService::new(
                runner,
                config.cli_bin.clone(),
                Duration::from_secs(config.cli_timeout_secs),
            )),
            layout,
        }
    }
}

/// Create the data directory and seed every owned document that is missing.
///
/// # Errors
///
/// Returns a `StoreError` if a directory or document cannot be created.
pub fn bootstrap_documents(layout: &StorageLayout) -> Result<(), StoreError> {
    JsonDocumentStore::<Vec<Agent>>::new(&layout.agents_file).ensure_exists()?;
    JsonDocumentStore::<Vec<SlashCommand>>::new(&layout.commands_file).ensure_exists()?;
    JsonDocumentStore::<Settings>::new(&layout.settings_file).ensure_exists()?;
    Ok(())
}

// ── CLI context ───────────────────────────────────────────────────────────────

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    pub json: bool,
    pub no_color: bool,
    /// Overrides `AGENTDESK_DATA_DIR`.
    pub data_dir: Option<PathBuf>,
}

/// Unified context passed to every command handler.
pub struct AppContext {
    pub output: OutputContext,
    pub mode: OutputMode,
    pub config: GatewayConfig,
    pub layout: StorageLayout,
}

impl AppContext {
    /// Load configuration, apply flag overrides, and resolve the layout.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or the layout cannot be
    /// resolved.
    pub fn new(flags: AppFlags) -> Result<Self> {
        let mut config = load_config()?;
        if let Some(dir) = flags.data_dir {
            config.data_dir = Some(dir);
        }
        let layout = resolve_layout(&config)?;

        let mode = if flags.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Ok(Self {
            output: OutputContext::new(flags.no_color),
            mode,
            config,
            layout,
        })
    }

    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }
}
