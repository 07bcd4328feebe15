//! Project summaries derived from the projects directory.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One project directory as reported to clients.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    /// Directory name; stable across scans.
    pub id: String,
    pub path: String,
    /// Number of `*.jsonl` session transcripts directly inside the directory.
    pub session_count: usize,
    pub modified_at: Option<DateTime<Utc>>,
}

/// Order projects most recently modified first, ties broken by id.
/// Projects with no known modification time sort last.
pub fn sort_projects(projects: &mut [ProjectSummary]) {
    projects.sort_by(|a, b| {
        b.modified_at
            .cmp(&a.modified_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}
