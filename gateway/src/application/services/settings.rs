//! Application service — the settings document.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::application::ports::DocumentStore;
use crate::domain::{Settings, StoreError, merge_settings};

pub struct SettingsService {
    store: Arc<dyn DocumentStore<Settings>>,
    write_lock: Mutex<()>,
}

impl SettingsService {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore<Settings>>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Current settings; `{}` when the document does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the document cannot be read or parsed.
    pub async fn get(&self) -> Result<Settings, StoreError> {
        self.store.load().await
    }

    /// Replace the whole settings document.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the document cannot be written.
    pub async fn replace(&self, settings: Settings) -> Result<Settings, StoreError> {
        let _guard = self.write_lock.lock().await;
        self.store.save(&settings).await?;
        tracing::info!(keys = settings.len(), "settings replaced");
        Ok(settings)
    }

    /// Shallow-merge `patch` into the stored settings (`null` removes a key).
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` on read, parse, or write failure.
    pub async fn merge(&self, patch: Settings) -> Result<Settings, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut current = self.store.load().await?;
        merge_settings(&mut current, patch);
        self.store.save(&current).await?;
        tracing::info!(keys = current.len(), "settings merged");
        Ok(current)
    }
}
