//! Whole-document JSON persistence with atomic replace.
//!
//! Every write lands in a uniquely named temp file next to the target, is
//! flushed to disk, and is then renamed over the target. The rename is the
//! only step that touches the visible file, so a failed or interrupted
//! write leaves the previous contents intact.

use std::io::Write as _;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use crate::domain::StoreError;

/// Create the containing directory and seed the file with `default` if
/// the file does not exist yet. Existing files are never touched.
///
/// # Errors
///
/// Returns `StoreError::Io` if the directory or file cannot be created for
/// any reason other than already existing.
pub fn ensure_exists<T: Serialize + ?Sized>(path: &Path, default: &T) -> Result<(), StoreError> {
    let dir = parent_dir(path);
    std::fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
    if path.exists() {
        return Ok(());
    }

    let bytes = to_bytes(path, default)?;
    let tmp = write_temp(dir, &bytes)?;
    match tmp.persist_noclobber(path) {
        Ok(_) => {
            tracing::info!(path = %path.display(), "created document");
            Ok(())
        }
        // Lost a race with another creator; their file wins.
        Err(e) if e.error.kind() == std::io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(StoreError::io(path, e.error)),
    }
}

/// Parse the whole file as JSON. A missing file reads as `T::default()`.
///
/// # Errors
///
/// Returns `StoreError::Io` if the file exists but cannot be read, or
/// `StoreError::Parse` if its content is not valid JSON of the expected shape.
pub fn read<T: DeserializeOwned + Default>(path: &Path) -> Result<T, StoreError> {
    let content = match std::fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "document missing, using default");
            return Ok(T::default());
        }
        Err(e) => return Err(StoreError::io(path, e)),
    };
    serde_json::from_slice(&content).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize `doc` and atomically replace `path` with it.
///
/// # Errors
///
/// Returns `StoreError::Serialize` if `doc` cannot be encoded, or
/// `StoreError::Io` if any filesystem step fails. On error the previous
/// file is left untouched.
pub fn write<T: Serialize + ?Sized>(path: &Path, doc: &T) -> Result<(), StoreError> {
    let bytes = to_bytes(path, doc)?;
    write_bytes(path, &bytes)
}

/// Encode a document the way it is stored: pretty JSON plus a trailing newline.
pub(crate) fn to_bytes<T: Serialize + ?Sized>(path: &Path, doc: &T) -> Result<Vec<u8>, StoreError> {
    let mut bytes = serde_json::to_vec_pretty(doc).map_err(|source| StoreError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Atomically replace `path` with already-encoded bytes.
pub(crate) fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let dir = parent_dir(path);
    std::fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;

    let tmp = write_temp(dir, bytes)?;
    tmp.persist(path).map_err(|e| StoreError::io(path, e.error))?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "document written");
    Ok(())
}

fn write_temp(dir: &Path, bytes: &[u8]) -> Result<NamedTempFile, StoreError> {
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
    tmp.write_all(bytes)
        .map_err(|e| StoreError::io(tmp.path(), e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| StoreError::io(tmp.path(), e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(tmp.path(), std::fs::Permissions::from_mode(0o600))
            .map_err(|e| StoreError::io(tmp.path(), e))?;
    }

    Ok(tmp)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
