use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use tracing::info;

use crate::error::StorageError;

/// Resolve `key` under `root`. Keys are relative, `/`-separated and may not
/// climb out of the data directory.
pub fn object_path(root: &Path, key: &str) -> Result<PathBuf, StorageError> {
    let relative = Path::new(key);
    let well_formed = !key.is_empty()
        && relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
    if !well_formed {
        return Err(StorageError::InvalidKey {
            key: key.to_string(),
        });
    }
    Ok(root.join(relative))
}

/// Read an object's bytes.
pub fn get_object(root: &Path, key: &str) -> Result<Vec<u8>, StorageError> {
    let path = object_path(root, key)?;
    std::fs::read(&path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => StorageError::NotFound {
            key: key.to_string(),
        },
        _ => StorageError::Io {
            key: key.to_string(),
            source,
        },
    })
}

/// Write an object, replacing any previous value. The bytes land in a
/// sibling temp file first and are renamed into place.
pub fn put_object(root: &Path, key: &str, body: &[u8]) -> Result<(), StorageError> {
    let path = object_path(root, key)?;
    let io_err = |source| StorageError::Io {
        key: key.to_string(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    std::fs::write(&tmp_path, body).map_err(io_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))
            .map_err(io_err)?;
    }

    std::fs::rename(&tmp_path, &path).map_err(io_err)?;

    info!(key, bytes = body.len(), "object written");
    Ok(())
}
