//! Application service — read-only project listing.

use std::sync::Arc;

use crate::application::ports::ProjectSource;
use crate::domain::{ProjectSummary, StoreError, sort_projects};

pub struct ProjectService {
    source: Arc<dyn ProjectSource>,
}

impl ProjectService {
    #[must_use]
    pub fn new(source: Arc<dyn ProjectSource>) -> Self {
        Self { source }
    }

    /// All projects, most recently modified first.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the projects directory cannot be scanned.
    pub async fn list(&self) -> Result<Vec<ProjectSummary>, StoreError> {
        let mut projects = self.source.scan().await?;
        sort_projects(&mut projects);
        Ok(projects)
    }

    /// The project whose directory name is `id`.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the projects directory cannot be scanned.
    pub async fn get(&self, id: &str) -> Result<Option<ProjectSummary>, StoreError> {
        Ok(self.source.scan().await?.into_iter().find(|p| p.id == id))
    }
}
