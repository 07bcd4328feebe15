//! Request and result types for the external CLI shim.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::error::CliError;

/// Body of `POST /api/cli/run`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CliRunRequest {
    pub prompt: String,
    /// Extra arguments appended after the prompt.
    #[serde(default)]
    pub args: Vec<String>,
    /// Working directory for the child process.
    #[serde(default)]
    pub cwd: Option<PathBuf>,
}

/// Captured result of one CLI run.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CliRunOutput {
    /// `None` when the child was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// A fully resolved process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    pub timeout: Duration,
}

impl Invocation {
    /// Build the invocation for a run request: `<program> -p <prompt> <args…>`.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidRequest` if the prompt is blank.
    pub fn for_request(
        program: &str,
        timeout: Duration,
        request: CliRunRequest,
    ) -> Result<Self, CliError> {
        if request.prompt.trim().is_empty() {
            return Err(CliError::InvalidRequest("prompt must not be empty".to_string()));
        }
        let mut args = Vec::with_capacity(request.args.len() + 2);
        args.push("-p".to_string());
        args.push(request.prompt);
        args.extend(request.args);
        Ok(Self {
            program: program.to_string(),
            args,
            cwd: request.cwd,
            timeout,
        })
    }
}
