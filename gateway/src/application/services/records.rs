//! Application service — CRUD over one record collection.
//!
//! A `RecordService<R>` owns exactly one collection document. Mutations are
//! whole-document read-modify-write cycles serialized by a per-service
//! mutex, so two requests in this process can never interleave their
//! writes to the same document.

use std::sync::Arc;

use agentdesk_common::{Record, generate_record_id, validate_record_id};
use chrono::Utc;
use tokio::sync::Mutex;

use crate::application::ports::DocumentStore;
use crate::domain::RecordError;

pub struct RecordService<R: Record> {
    store: Arc<dyn DocumentStore<Vec<R>>>,
    write_lock: Mutex<()>,
}

impl<R: Record> RecordService<R> {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore<Vec<R>>>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// All records in insertion order. A missing document lists as empty.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Storage` if the document cannot be read or parsed.
    pub async fn list(&self) -> Result<Vec<R>, RecordError> {
        let records = self.store.load().await?;
        tracing::debug!(kind = %R::KIND, count = records.len(), "listed records");
        Ok(records)
    }

    /// First record whose id matches, or `None`.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Storage` on read or parse failure.
    pub async fn get(&self, id: &str) -> Result<Option<R>, RecordError> {
        Ok(self.store.load().await?.into_iter().find(|r| r.id() == id))
    }

    /// Create a record from a partial payload and append it.
    ///
    /// A supplied id is validated and must not already exist; otherwise a
    /// fresh id is generated.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for an unusable supplied id, `Conflict` when it
    /// is taken, or `Storage` on read/write failure.
    pub async fn create(&self, patch: R::Patch) -> Result<R, RecordError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load().await?;

        let id = match R::requested_id(&patch) {
            Some(requested) => {
                validate_record_id(requested).map_err(|e| RecordError::Validation {
                    kind: R::KIND,
                    reason: e.to_string(),
                })?;
                if records.iter().any(|r| r.id() == requested) {
                    return Err(RecordError::Conflict {
                        kind: R::KIND,
                        id: requested.to_string(),
                    });
                }
                requested.to_string()
            }
            None => fresh_id(&records),
        };

        let record = R::from_patch(patch, id, Utc::now());
        records.push(record.clone());
        self.store.save(&records).await?;

        tracing::info!(kind = %R::KIND, id = record.id(), "record created");
        Ok(record)
    }

    /// Merge a partial payload over an existing record.
    ///
    /// `id` and `createdAt` cannot be changed; `updatedAt` is refreshed even
    /// when the payload is empty.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has `id`, or `Storage` on read/write
    /// failure.
    pub async fn update(&self, id: &str, patch: R::Patch) -> Result<R, RecordError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load().await?;

        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(RecordError::NotFound(R::KIND))?;
        record.merge(patch);
        let now = Utc::now().max(record.created_at());
        record.touch(now);
        let updated = record.clone();

        self.store.save(&records).await?;

        tracing::info!(kind = %R::KIND, id, "record updated");
        Ok(updated)
    }

    /// Remove the first record whose id matches.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` (leaving the document untouched) if nothing
    /// matched, or `Storage` on read/write failure.
    pub async fn delete(&self, id: &str) -> Result<(), RecordError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load().await?;

        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(RecordError::NotFound(R::KIND))?;
        records.remove(index);

        self.store.save(&records).await?;

        tracing::info!(kind = %R::KIND, id, "record deleted");
        Ok(())
    }
}

/// Draw generated ids until one is not already taken.
fn fresh_id<R: Record>(records: &[R]) -> String {
    loop {
        let id = generate_record_id();
        if records.iter().all(|r| r.id() != id) {
            return id;
        }
        tracing::warn!(kind = %R::KIND, id, "generated id collided, drawing again");
    }
}
