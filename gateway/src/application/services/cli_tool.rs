//! Application service — thin shim over the external CLI tool.

use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::CommandRunner;
use crate::domain::{CliError, CliRunOutput, CliRunRequest, Invocation};

pub struct CliToolService {
    runner: Arc<dyn CommandRunner>,
    program: String,
    timeout: Duration,
}

impl CliToolService {
    #[must_use]
    pub fn new(runner: Arc<dyn CommandRunner>, program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            runner,
            program: program.into(),
            timeout,
        }
    }

    /// Run the CLI once with the request's prompt and capture its output.
    ///
    /// A non-zero exit code is a successful run; it is reported in the
    /// output rather than as an error.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` for a blank prompt or unusable working
    /// directory, `Spawn`/`Wait` if the process fails, or `Timeout`.
    pub async fn run(&self, request: CliRunRequest) -> Result<CliRunOutput, CliError> {
        let invocation = Invocation::for_request(&self.program, self.timeout, request)?;
        tracing::info!(program = %invocation.program, args = invocation.args.len(), "running external CLI");

        let output = self.runner.run(&invocation).await?;
        let exit_code = output.status.code();
        if !output.status.success() {
            tracing::warn!(program = %invocation.program, ?exit_code, "external CLI exited unsuccessfully");
        }

        Ok(CliRunOutput {
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
