//! The record abstraction shared by every JSON-backed collection.
//!
//! A [`Record`] knows how to build itself from a partial payload and how to
//! merge a later partial payload over itself. Identity (`id`) and
//! `createdAt` are never touched by a merge; `updatedAt` is only moved by
//! [`Record::touch`].

use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Length of a generated record identifier.
pub const RECORD_ID_LEN: usize = 9;

/// Upper bound for caller-supplied identifiers.
pub const MAX_RECORD_ID_LEN: usize = 128;

const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// The kinds of record the gateway stores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Agent,
    Command,
}

impl RecordKind {
    /// Human-facing label, used in "not found" messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Agent => "Agent",
            Self::Command => "Command",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A record stored in a collection document.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Partial payload accepted by create and update. Every field optional.
    type Patch: DeserializeOwned + Default + Send + 'static;

    const KIND: RecordKind;

    fn id(&self) -> &str;

    /// Display name.
    fn name(&self) -> &str;

    fn created_at(&self) -> DateTime<Utc>;

    fn updated_at(&self) -> DateTime<Utc>;

    /// The identifier requested by a create payload, if any.
    fn requested_id(patch: &Self::Patch) -> Option<&str>;

    /// Build a complete record from a partial payload.
    ///
    /// `id` is already resolved by the caller. Missing fields take their
    /// defaults; `createdAt` falls back to `now` and `updatedAt` is always
    /// `now`.
    fn from_patch(patch: Self::Patch, id: String, now: DateTime<Utc>) -> Self;

    /// Merge the supplied fields over `self`, leaving `id`, `createdAt`
    /// and `updatedAt` untouched.
    fn merge(&mut self, patch: Self::Patch);

    /// Stamp `updatedAt`.
    fn touch(&mut self, now: DateTime<Utc>);
}

/// Rejection reasons for caller-supplied identifiers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordIdError {
    #[error("id must not be blank")]
    Blank,

    #[error("id must be at most {MAX_RECORD_ID_LEN} characters")]
    TooLong,

    #[error("id must not contain '/' or control characters")]
    InvalidCharacter,
}

/// Validate an identifier supplied by a caller on create.
///
/// # Errors
///
/// Returns a [`RecordIdError`] when the id is blank, too long, or would
/// not survive as a single URL path segment.
pub fn validate_record_id(id: &str) -> Result<(), RecordIdError> {
    if id.trim().is_empty() {
        return Err(RecordIdError::Blank);
    }
    if id.chars().count() > MAX_RECORD_ID_LEN {
        return Err(RecordIdError::TooLong);
    }
    if id.chars().any(|c| c == '/' || c.is_control()) {
        return Err(RecordIdError::InvalidCharacter);
    }
    Ok(())
}

/// Generate a short lowercase alphanumeric identifier.
///
/// 36^9 fits in a `u64`, so a single hash supplies every character.
#[must_use]
pub fn generate_record_id() -> String {
    let mut hasher = RandomState::new().build_hasher();
    hasher.write_u128(
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0),
    );
    hasher.write_u64(RandomState::new().build_hasher().finish());
    let mut seed = hasher.finish();

    let mut id = String::with_capacity(RECORD_ID_LEN);
    for _ in 0..RECORD_ID_LEN {
        #[allow(clippy::cast_possible_truncation)]
        let idx = (seed % 36) as usize;
        id.push(char::from(ID_ALPHABET[idx]));
        seed /= 36;
    }
    id
}
