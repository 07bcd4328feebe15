//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! They are object-safe and `Send + Sync` so services can hold them as
//! `Arc<dyn …>` inside shared HTTP state.

use std::process::Output;

use async_trait::async_trait;

use crate::domain::{CliError, Invocation, ProjectSummary, StoreError};

// ── Persistence Port ──────────────────────────────────────────────────────────

/// One JSON document on stable storage.
#[async_trait]
pub trait DocumentStore<T>: Send + Sync {
    /// Load the document. A missing document loads as `T::default()`.
    async fn load(&self) -> Result<T, StoreError>;

    /// Atomically replace the document with `doc`.
    async fn save(&self, doc: &T) -> Result<(), StoreError>;
}

// ── Project Discovery Port ────────────────────────────────────────────────────

/// Source of project summaries. Order is unspecified.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    async fn scan(&self) -> Result<Vec<ProjectSummary>, StoreError>;
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so the CLI shim can be tested without the
/// external tool installed.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run the invocation to completion and capture its output.
    ///
    /// On timeout the child process must be killed, not left orphaned.
    async fn run(&self, invocation: &Invocation) -> Result<Output, CliError>;
}
