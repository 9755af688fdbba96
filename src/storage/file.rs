// ABOUTME: File-backed key-value store writing one JSON file per key
// ABOUTME: Writes go through a temporary file and rename so readers never see partial data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use grocermator_core::errors::StorageError;
use tracing::debug;

use super::KeyValueStore;

/// Directory name under the platform data directory
const APP_DIR_NAME: &str = "grocermator";

/// Store keeping each key in `<root>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Store rooted at `root`; the directory is created on first write
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store under the platform data directory (e.g. `~/.local/share/grocermator`)
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` when the platform has no data directory
    pub fn default_location() -> Result<Self, StorageError> {
        let base = dirs::data_dir().ok_or_else(|| {
            StorageError::Unavailable("no platform data directory found".into())
        })?;
        Ok(Self::new(base.join(APP_DIR_NAME)))
    }

    /// Directory holding the stored files
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_owned()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root)?;

        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value)?;
        fs::rename(&staging, &path)?;

        debug!(path = %path.display(), bytes = value.len(), "Wrote store entry");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_path_like_keys() {
        let store = FileStore::new("/tmp/unused");
        assert!(matches!(
            store.get("../secrets"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(store.get(""), Err(StorageError::InvalidKey(_))));
        assert!(matches!(
            store.get("nested/key"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
