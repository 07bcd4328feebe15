//! Domain layer — pure types, errors, and merge rules.
//!
//! This module has zero imports from `crate::infra`, `crate::http`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod cli_tool;
pub mod error;
pub mod layout;
pub mod project;
pub mod settings;

pub use cli_tool::{CliRunOutput, CliRunRequest, Invocation};
pub use error::{CliError, RecordError, StoreError};
pub use layout::{LayoutError, StorageLayout};
pub use project::{ProjectSummary, sort_projects};
pub use settings::{Settings, merge_settings};
