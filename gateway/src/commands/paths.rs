//! `agentdesk paths` — show where documents live.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::output::json::format_data;

/// Run the paths command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(ctx: &AppContext) -> Result<ExitCode> {
    let layout = &ctx.layout;
    if ctx.is_json() {
        println!("{}", format_data(layout)?);
        return Ok(ExitCode::SUCCESS);
    }
    ctx.output.header("Storage");
    ctx.output.kv("data", &layout.data_dir.display().to_string());
    ctx.output.kv("agents", &layout.agents_file.display().to_string());
    ctx.output
        .kv("commands", &layout.commands_file.display().to_string());
    ctx.output
        .kv("settings", &layout.settings_file.display().to_string());
    ctx.output
        .kv("projects", &layout.projects_dir.display().to_string());
    Ok(ExitCode::SUCCESS)
}
