//! Infrastructure implementation of the `DocumentStore` port.
//!
//! `JsonDocumentStore` runs the blocking `json_file` operations on tokio's
//! blocking pool so request handlers never stall the async runtime.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::application::ports::DocumentStore;
use crate::domain::StoreError;
use crate::infra::json_file;

/// A JSON document at a fixed path.
pub struct JsonDocumentStore<T> {
    path: PathBuf,
    _doc: PhantomData<fn() -> T>,
}

impl<T> JsonDocumentStore<T> {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _doc: PhantomData,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T: Serialize + Default> JsonDocumentStore<T> {
    /// Seed the document with `T::default()` if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory or file cannot be created.
    pub fn ensure_exists(&self) -> Result<(), StoreError> {
        json_file::ensure_exists(&self.path, &T::default())
    }
}

#[async_trait]
impl<T> DocumentStore<T> for JsonDocumentStore<T>
where
    T: Serialize + DeserializeOwned + Default + Send + Sync + 'static,
{
    async fn load(&self) -> Result<T, StoreError> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || json_file::read::<T>(&path))
            .await
            .map_err(|e| StoreError::Task(format!("document load panicked: {e}")))?
    }

    async fn save(&self, doc: &T) -> Result<(), StoreError> {
        let bytes = json_file::to_bytes(&self.path, doc)?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || json_file::write_bytes(&path, &bytes))
            .await
            .map_err(|e| StoreError::Task(format!("document save panicked: {e}")))?
    }
}
