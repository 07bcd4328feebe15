//! JSON output helpers for `--json` mode.

use agentdesk_common::ApiResponse;
use anyhow::{Context, Result};
use serde::Serialize;

/// Pretty-print a success envelope around `data`.
///
/// # Errors
///
/// Returns an error if `data` cannot be serialized.
pub fn format_data<T: Serialize>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(&ApiResponse::ok(data)).context("JSON serialization failed")
}

/// Format a failure envelope: `{"success": false, "error": "..."}`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails (should not happen in
/// practice; `serde_json` only fails on non-finite floats and maps with
/// non-string keys, neither of which appear here).
pub fn format_error(message: &str) -> Result<String> {
    serde_json::to_string_pretty(&ApiResponse::<()>::err(message))
        .context("JSON serialization failed")
}
