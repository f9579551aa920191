//! Objects on the local filesystem, addressed by `/`-separated keys under a
//! root directory.

use std::path::{Path, PathBuf};

use tracing::warn;
use uuid::Uuid;

use crate::error::StorageError;

/// Resolve a key to a path under `root`.
pub fn object_path(root: &Path, key: &str) -> PathBuf {
    key.split('/')
        .filter(|part| !part.is_empty())
        .fold(root.to_path_buf(), |path, part| path.join(part))
}

/// Read an object.
pub async fn get_object(root: &Path, key: &str) -> Result<Vec<u8>, StorageError> {
    tokio::fs::read(object_path(root, key))
        .await
        .map_err(|e| StorageError::io(key, e))
}

/// Write an object, replacing any previous version.
///
/// The body goes to a hidden temporary file first and is renamed into
/// place, so readers never see a partial object.
pub async fn put_object(root: &Path, key: &str, body: &[u8]) -> Result<(), StorageError> {
    let path = object_path(root, key);
    let tmp = temp_path(&path);
    create_parent(&path, key).await?;

    tokio::fs::write(&tmp, body)
        .await
        .map_err(|e| StorageError::io(key, e))?;
    tokio::fs::rename(&tmp, &path)
        .await
        .map_err(|e| StorageError::io(key, e))
}

/// Write an object only if nothing exists under `key` yet.
///
/// The body is written to a hidden temporary file and then hard-linked
/// under `key`. The link fails if the key is taken, so the object appears
/// complete or not at all, and a failed write leaves the key free.
/// Returns [`StorageError::AlreadyExists`] on collision.
pub async fn put_object_if_absent(
    root: &Path,
    key: &str,
    body: &[u8],
) -> Result<(), StorageError> {
    let path = object_path(root, key);
    let tmp = unique_temp_path(&path);
    create_parent(&path, key).await?;

    let linked = match tokio::fs::write(&tmp, body).await {
        Ok(()) => tokio::fs::hard_link(&tmp, &path).await,
        Err(e) => Err(e),
    };
    if let Err(e) = tokio::fs::remove_file(&tmp).await
        && e.kind() != std::io::ErrorKind::NotFound
    {
        warn!(key, error = %e, "failed to remove temporary object");
    }
    linked.map_err(|e| StorageError::io(key, e))
}

/// List the JSON object keys directly under a prefix, sorted.
///
/// A prefix with nothing stored under it lists as empty.
pub async fn list_objects(root: &Path, prefix: &str) -> Result<Vec<String>, StorageError> {
    let dir = object_path(root, prefix);
    let mut entries = match tokio::fs::read_dir(&dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StorageError::io(prefix, e)),
    };

    let mut keys = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| StorageError::io(prefix, e))?
    {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || !name.ends_with(".json") {
            continue;
        }
        keys.push(format!("{prefix}{name}"));
    }
    keys.sort();
    Ok(keys)
}

async fn create_parent(path: &Path, key: &str) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| StorageError::io(key, e))?;
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}

// Concurrent appenders each get their own temporary file.
fn unique_temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.{}.tmp", Uuid::new_v4().simple()))
}
