//! Application layer — port trait definitions and use-case orchestration.
//!
//! This module depends only on `crate::domain` and `agentdesk_common` —
//! never on `crate::infra`, `crate::http`, or `crate::commands`.

pub mod ports;
pub mod services;

pub use ports::{CommandRunner, DocumentStore, ProjectSource};
