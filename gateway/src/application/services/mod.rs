//! Application services — use-case orchestration.
//!
//! Each service composes domain rules with port trait calls and imports
//! only from `crate::domain` and `crate::application::ports`.

pub mod cli_tool;
pub mod projects;
pub mod records;
pub mod settings;

pub use cli_tool::CliToolService;
pub use projects::ProjectService;
pub use records::RecordService;
pub use settings::SettingsService;
