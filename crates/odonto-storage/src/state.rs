use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::objects;

/// Load a JSON object and deserialize it.
pub async fn load_state<T: DeserializeOwned>(root: &Path, key: &str) -> Result<T, StorageError> {
    let body = objects::get_object(root, key).await?;
    let value: T = serde_json::from_slice(&body)?;
    Ok(value)
}

/// Serialize a value as pretty JSON and save it.
pub async fn save_state<T: Serialize>(
    root: &Path,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object(root, key, body).await
}

/// Like [`load_state`], but a missing object yields `T::default()`.
pub async fn load_state_or_default<T: DeserializeOwned + Default>(
    root: &Path,
    key: &str,
) -> Result<T, StorageError> {
    match load_state(root, key).await {
        Ok(value) => Ok(value),
        Err(StorageError::NotFound { .. }) => Ok(T::default()),
        Err(e) => Err(e),
    }
}
