//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: JSON document persistence,
//! process execution, and project directory scanning.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::http` or `crate::commands` are forbidden.

pub mod command_runner;
pub mod document_store;
pub mod json_file;
pub mod projects;

pub use command_runner::TokioCommandRunner;
pub use document_store::JsonDocumentStore;
pub use projects::FsProjectSource;
