//! File-backed key-value store.
//!
//! Each key maps to `<data_dir>/<key>.json`. Writes go through a temp file in
//! the same directory that is renamed over the target, while an advisory lock
//! on `<data_dir>/.lock` keeps two processes from writing at once.

use super::KeyValueStore;
use crate::constants::{STORAGE_FILE_EXTENSION, STORAGE_LOCK_FILE};
use crate::errors::{AppError, AppResult, LockError, StorageError};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Ensures the data directory exists, creating it if necessary.
///
/// # Errors
///
/// Returns:
/// - `AppError::Config` if the provided path is not an absolute path
/// - `AppError::Io` if the directory creation fails
pub fn ensure_data_directory_exists(data_dir: &Path) -> AppResult<()> {
    if !data_dir.is_absolute() {
        return Err(AppError::Config(format!(
            "Data directory path must be absolute: {}",
            data_dir.display()
        )));
    }

    if !data_dir.exists() {
        fs::create_dir_all(data_dir).map_err(|e| {
            AppError::Io(io::Error::new(
                e.kind(),
                format!("Failed to create data directory: {}", e),
            ))
        })?;

        #[cfg(unix)]
        {
            use crate::constants::DEFAULT_DIR_PERMISSIONS;
            fs::set_permissions(data_dir, fs::Permissions::from_mode(DEFAULT_DIR_PERMISSIONS))
                .map_err(|e| {
                    AppError::Io(io::Error::new(
                        e.kind(),
                        format!("Failed to set permissions on data directory: {}", e),
                    ))
                })?;
            debug!("Set 0o700 permissions on data directory");
        }
    }
    Ok(())
}

/// Stores each key as a JSON file inside a data directory.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    data_dir: PathBuf,
}

impl FileKeyValueStore {
    /// Opens the store, creating `data_dir` if needed.
    pub fn open(data_dir: &Path) -> AppResult<Self> {
        ensure_data_directory_exists(data_dir)?;
        Ok(FileKeyValueStore {
            data_dir: data_dir.to_path_buf(),
        })
    }

    /// The file a key is stored in.
    ///
    /// Keys are restricted to ASCII letters, digits, `-` and `_` so they can
    /// never escape the data directory.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self
            .data_dir
            .join(format!("{}.{}", key, STORAGE_FILE_EXTENSION)))
    }

    fn lock(&self) -> Result<File, LockError> {
        let path = self.data_dir.join(STORAGE_LOCK_FILE);
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(|source| LockError::AcquisitionFailed {
                path: path.clone(),
                source,
            })?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(file),
            Err(e) if e.raw_os_error() == fs2::lock_contended_error().raw_os_error() => {
                Err(LockError::StoreBusy { path })
            }
            Err(source) => Err(LockError::AcquisitionFailed { path, source }),
        }
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read { path, source }.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        let lock = self.lock()?;

        let write_error = |source: io::Error| StorageError::Write {
            path: path.clone(),
            source,
        };

        let mut temp = NamedTempFile::new_in(&self.data_dir).map_err(write_error)?;
        #[cfg(unix)]
        {
            use crate::constants::DEFAULT_FILE_PERMISSIONS;
            temp.as_file()
                .set_permissions(fs::Permissions::from_mode(DEFAULT_FILE_PERMISSIONS))
                .map_err(write_error)?;
        }
        temp.write_all(value.as_bytes()).map_err(write_error)?;
        temp.as_file().sync_all().map_err(write_error)?;
        temp.persist(&path).map_err(|e| write_error(e.error))?;

        debug!(path = %path.display(), bytes = value.len(), "Wrote stored value");

        if let Err(e) = FileExt::unlock(&lock) {
            debug!(error = %e, "Failed to release store lock explicitly");
        }
        Ok(())
    }
}
