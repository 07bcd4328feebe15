//! `agentdesk serve` — run the HTTP gateway until Ctrl-C.

use std::net::SocketAddr;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use crate::app::{self, AppContext, AppState};
use crate::http;

/// Arguments for `agentdesk serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on (overrides AGENTDESK_LISTEN_ADDR)
    #[arg(long, value_name = "ADDR")]
    pub listen: Option<SocketAddr>,
}

/// Run the serve command.
///
/// # Errors
///
/// Returns an error if the documents cannot be bootstrapped, the listener
/// cannot bind, or the server fails.
pub async fn run(ctx: &AppContext, args: ServeArgs) -> Result<ExitCode> {
    let listen_addr = args.listen.unwrap_or(ctx.config.listen_addr);

    app::bootstrap_documents(&ctx.layout).context("bootstrapping data directory")?;

    tracing::info!(
        listen_addr = %listen_addr,
        data_dir = %ctx.layout.data_dir.display(),
        projects_dir = %ctx.layout.projects_dir.display(),
        cli_bin = %ctx.config.cli_bin,
        "configuration loaded",
    );

    let state = AppState::new(ctx.layout.clone(), &ctx.config);
    let router = http::router(&state);

    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;

    if !ctx.is_json() {
        ctx.output
            .success(&format!("agentdesk listening on http://{listen_addr}"));
    }
    tracing::info!("gateway ready");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("gateway shut down");
    Ok(ExitCode::SUCCESS)
}

/// Wait for SIGINT (Ctrl-C) for graceful shutdown.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("received shutdown signal");
}
