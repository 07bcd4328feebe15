//! Infrastructure implementation of the `ProjectSource` port.
//!
//! Each sub-directory of the projects root is one project; its `*.jsonl`
//! files are session transcripts.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::application::ports::ProjectSource;
use crate::domain::{ProjectSummary, StoreError};

pub struct FsProjectSource {
    root: PathBuf,
}

impl FsProjectSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ProjectSource for FsProjectSource {
    async fn scan(&self) -> Result<Vec<ProjectSummary>, StoreError> {
        let root = self.root.clone();
        tokio::task::spawn_blocking(move || scan_projects(&root))
            .await
            .map_err(|e| StoreError::Task(format!("project scan panicked: {e}")))?
    }
}

/// Summarise every directory directly under `root`. A missing root yields
/// an empty list.
///
/// # Errors
///
/// Returns `StoreError::Io` if `root` exists but cannot be listed.
pub fn scan_projects(root: &Path) -> Result<Vec<ProjectSummary>, StoreError> {
    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(root = %root.display(), "projects directory missing");
            return Ok(Vec::new());
        }
        Err(e) => return Err(StoreError::io(root, e)),
    };

    let mut projects = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| StoreError::io(root, e))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let modified_at = entry
            .metadata()
            .and_then(|m| m.modified())
            .ok()
            .map(DateTime::<Utc>::from);
        projects.push(ProjectSummary {
            id: entry.file_name().to_string_lossy().into_owned(),
            path: path.to_string_lossy().into_owned(),
            session_count: count_sessions(&path),
            modified_at,
        });
    }
    Ok(projects)
}

fn count_sessions(dir: &Path) -> usize {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(Result::ok)
            .filter(|e| {
                let path = e.path();
                path.is_file() && path.extension().is_some_and(|ext| ext == "jsonl")
            })
            .count(),
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "cannot list project sessions");
            0
        }
    }
}
