use std::path::{Component, Path, PathBuf};

use crate::error::StorageError;

/// Resolve `key` under `root`, refusing keys that would escape it.
pub fn object_path(root: &Path, key: &str) -> Result<PathBuf, StorageError> {
    let relative = Path::new(key);
    let escapes = relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)));
    if key.is_empty() || escapes {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(root.join(relative))
}

/// Read an object's bytes.
pub async fn get_object(root: &Path, key: &str) -> Result<Vec<u8>, StorageError> {
    let path = object_path(root, key)?;
    tokio::fs::read(&path)
        .await
        .map_err(|e| StorageError::io(key, e))
}

/// Write an object, creating parent directories. The write goes to a
/// temporary sibling first and is renamed into place.
pub async fn put_object(root: &Path, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
    let path = object_path(root, key)?;
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| StorageError::io(key, e))?;
    }

    let mut tmp = path.clone().into_os_string();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    tokio::fs::write(&tmp, &body)
        .await
        .map_err(|e| StorageError::io(key, e))?;
    tokio::fs::rename(&tmp, &path)
        .await
        .map_err(|e| StorageError::io(key, e))?;

    tracing::debug!(key, bytes = body.len(), "object written");
    Ok(())
}

pub async fn object_exists(root: &Path, key: &str) -> Result<bool, StorageError> {
    let path = object_path(root, key)?;
    tokio::fs::try_exists(&path)
        .await
        .map_err(|e| StorageError::io(key, e))
}

/// Delete an object. Deleting a missing object is not an error.
pub async fn delete_object(root: &Path, key: &str) -> Result<(), StorageError> {
    let path = object_path(root, key)?;
    match tokio::fs::remove_file(&path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(StorageError::io(key, e)),
    }
}

/// List the keys of the files directly under `prefix` (a directory key
/// ending in `/`), sorted.
pub async fn list_keys(root: &Path, prefix: &str) -> Result<Vec<String>, StorageError> {
    let dir = object_path(root, prefix.trim_end_matches('/'))?;
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
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| StorageError::io(prefix, e))?;
        if !file_type.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".tmp") {
            continue;
        }
        keys.push(format!("{}/{name}", prefix.trim_end_matches('/')));
    }
    keys.sort();
    Ok(keys)
}
