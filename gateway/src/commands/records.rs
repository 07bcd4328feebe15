//! `agentdesk agents …` and `agentdesk commands …` — read-only views of the
//! collection documents.

use std::process::ExitCode;
use std::sync::Arc;

use agentdesk_common::{Agent, Record, SlashCommand};
use anyhow::{Context, Result};
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::services::RecordService;
use crate::infra::JsonDocumentStore;
use crate::output::json::format_data;

/// Subcommands shared by `agents` and `commands`.
#[derive(Subcommand, Debug)]
pub enum RecordsCommand {
    /// List stored records
    List,
    /// Show one record by id
    Show {
        /// Record id
        id: String,
    },
}

/// Run an `agents` subcommand.
///
/// # Errors
///
/// Returns an error if the agents document cannot be read.
pub async fn run_agents(ctx: &AppContext, cmd: RecordsCommand) -> Result<ExitCode> {
    let store = JsonDocumentStore::<Vec<Agent>>::new(&ctx.layout.agents_file);
    let service = RecordService::<Agent>::new(Arc::new(store));
    run(ctx, &service, cmd, |agent| agent.model.clone()).await
}

/// Run a `commands` subcommand.
///
/// # Errors
///
/// Returns an error if the commands document cannot be read.
pub async fn run_commands(ctx: &AppContext, cmd: RecordsCommand) -> Result<ExitCode> {
    let store = JsonDocumentStore::<Vec<SlashCommand>>::new(&ctx.layout.commands_file);
    let service = RecordService::<SlashCommand>::new(Arc::new(store));
    run(ctx, &service, cmd, |command| command.description.clone()).await
}

async fn run<R, F>(
    ctx: &AppContext,
    service: &RecordService<R>,
    cmd: RecordsCommand,
    detail: F,
) -> Result<ExitCode>
where
    R: Record,
    F: Fn(&R) -> String,
{
    let label = R::KIND.label().to_lowercase();
    match cmd {
        RecordsCommand::List => {
            let records = service
                .list()
                .await
                .with_context(|| format!("listing {label}s"))?;
            if ctx.is_json() {
                println!("{}", format_data(&records)?);
            } else if records.is_empty() {
                ctx.output.info(&format!("no {label}s stored"));
            } else {
                for record in &records {
                    ctx.output.item(record.name(), record.id(), &detail(record));
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        RecordsCommand::Show { id } => {
            let Some(record) = service
                .get(&id)
                .await
                .with_context(|| format!("reading {label} '{id}'"))?
            else {
                anyhow::bail!("{} not found", R::KIND.label());
            };
            if ctx.is_json() {
                println!("{}", format_data(&record)?);
            } else {
                ctx.output.header(record.name());
                ctx.output.kv("id", record.id());
                ctx.output.kv("created", &record.created_at().to_rfc3339());
                ctx.output.kv("updated", &record.updated_at().to_rfc3339());
                let extra = detail(&record);
                if !extra.is_empty() {
                    ctx.output.kv("detail", &extra);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
