//! Typed domain error enums.
//!
//! Storage failures (`StoreError`) are kept apart from logical failures
//! (`RecordError::NotFound`, `Conflict`, `Validation`) so the HTTP layer can
//! map each to its own status code.

use std::path::PathBuf;

use agentdesk_common::RecordKind;
use thiserror::Error;

// ── Storage errors ────────────────────────────────────────────────────────────

/// Failures raised by the JSON document store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot serialize document for {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage task failed: {0}")]
    Task(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

// ── Record errors ─────────────────────────────────────────────────────────────

/// Errors returned by the record service.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("{0} not found")]
    NotFound(RecordKind),

    #[error("{kind} with id '{id}' already exists")]
    Conflict { kind: RecordKind, id: String },

    #[error("invalid {kind}: {reason}")]
    Validation { kind: RecordKind, reason: String },

    #[error(transparent)]
    Storage(#[from] StoreError),
}

// ── External CLI errors ───────────────────────────────────────────────────────

/// Errors from invoking the external CLI tool.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed while waiting for {program}: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} timed out after {secs}s")]
    Timeout { program: String, secs: u64 },
}
