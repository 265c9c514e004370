use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::objects;

/// Load a JSON value stored under `key`.
pub fn load_state<T: DeserializeOwned>(root: &Path, key: &str) -> Result<T, StorageError> {
    let body = objects::get_object(root, key)?;
    Ok(serde_json::from_slice(&body)?)
}

/// Load a JSON value, falling back to `T::default()` when the key is absent.
pub fn load_state_or_default<T: DeserializeOwned + Default>(
    root: &Path,
    key: &str,
) -> Result<T, StorageError> {
    match load_state(root, key) {
        Err(StorageError::NotFound { .. }) => Ok(T::default()),
        other => other,
    }
}

/// Save a JSON value under `key`.
pub fn save_state<T: Serialize>(root: &Path, key: &str, value: &T) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object(root, key, &body)
}
