//! Infrastructure implementation of the `CommandRunner` port.
//!
//! Runs the external CLI with piped output and a hard deadline.

use std::process::{Output, Stdio};

use async_trait::async_trait;
use tokio::io::AsyncReadExt;

use crate::application::ports::CommandRunner;
use crate::domain::{CliError, Invocation};

/// Production `CommandRunner`.
///
/// Dropping a `.output()` future on timeout does not reliably stop the
/// child on every platform, so the deadline branch kills it explicitly.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn run(&self, invocation: &Invocation) -> Result<Output, CliError> {
        let program = invocation.program.as_str();

        let mut command = tokio::process::Command::new(program);
        command
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(cwd) = &invocation.cwd {
            if !cwd.is_dir() {
                return Err(CliError::InvalidRequest(format!(
                    "working directory does not exist: {}",
                    cwd.display()
                )));
            }
            command.current_dir(cwd);
        }

        let mut child = command.spawn().map_err(|source| CliError::Spawn {
            program: program.to_string(),
            source,
        })?;

        let mut stdout_handle = child.stdout.take();
        let mut stderr_handle = child.stderr.take();

        tokio::select! {
            result = async {
                let (status, stdout, stderr) = tokio::join!(
                    child.wait(),
                    async {
                        let mut buf = Vec::new();
                        if let Some(ref mut h) = stdout_handle {
                            let _ = h.read_to_end(&mut buf).await;
                        }
                        buf
                    },
                    async {
                        let mut buf = Vec::new();
                        if let Some(ref mut h) = stderr_handle {
                            let _ = h.read_to_end(&mut buf).await;
                        }
                        buf
                    },
                );
                status
                    .map(|status| Output { status, stdout, stderr })
                    .map_err(|source| CliError::Wait {
                        program: program.to_string(),
                        source,
                    })
            } => result,
            () = tokio::time::sleep(invocation.timeout) => {
                let _ = child.kill().await;
                Err(CliError::Timeout {
                    program: program.to_string(),
                    secs: invocation.timeout.as_secs(),
                })
            }
        }
    }
}
