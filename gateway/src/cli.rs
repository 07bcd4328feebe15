//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::commands;

/// Local HTTP gateway for agents, slash commands, settings and projects
#[derive(Parser)]
#[command(
    name = "agentdesk",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Data directory (overrides AGENTDESK_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP gateway
    Serve(commands::serve::ServeArgs),

    /// Inspect stored agents
    #[command(subcommand)]
    Agents(commands::records::RecordsCommand),

    /// Inspect stored slash commands
    #[command(subcommand)]
    Commands(commands::records::RecordsCommand),

    /// Show resolved storage paths
    Paths,
}

impl Cli {
    /// Dispatch to the selected command.
    ///
    /// # Errors
    ///
    /// Returns an error if context setup or the command itself fails.
    pub async fn run(self) -> Result<ExitCode> {
        let ctx = AppContext::new(AppFlags {
            json: self.json,
            no_color: self.no_color,
            data_dir: self.data_dir,
        })?;

        match self.command {
            Command::Serve(args) => commands::serve::run(&ctx, args).await,
            Command::Agents(cmd) => commands::records::run_agents(&ctx, cmd).await,
            Command::Commands(cmd) => commands::records::run_commands(&ctx, cmd).await,
            Command::Paths => commands::paths::run(&ctx),
        }
    }
}
