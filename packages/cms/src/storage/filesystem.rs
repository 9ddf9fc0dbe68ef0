use super::KeyValueStorage;
use crate::error::StoreError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Filesystem storage backend (local development and native builds)
///
/// Each key lives in `<base_path>/<key>.json`. Writes go to a sibling temp file that
/// is renamed over the target, so a failed write keeps the previous document.
pub struct FilesystemStorage {
    base_path: PathBuf,
}

impl FilesystemStorage {
    pub fn new(base_path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let base_path = base_path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::Backend {
                key: key.to_string(),
                message: "key must be alphanumeric".to_string(),
            });
        }
        Ok(self.base_path.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FilesystemStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let file_path = self.path_for(key)?;
        match fs::read_to_string(&file_path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let file_path = self.path_for(key)?;
        let tmp_path = file_path.with_extension("json.tmp");

        fs::write(&tmp_path, value)?;
        if let Err(e) = fs::rename(&tmp_path, &file_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        tracing::debug!("storage.fs: wrote {}", file_path.display());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        let file_path = self.path_for(key)?;

        // Ignore error if file doesn't exist
        match fs::remove_file(&file_path) {
            Ok(()) => {
                tracing::debug!("storage.fs: deleted {}", file_path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("storage.fs: not found (already deleted): {}", file_path.display());
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn describe(&self) -> String {
        format!("filesystem ({})", self.base_path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FilesystemStorage::new(dir.path()).unwrap();

        assert_eq!(storage.get_item("siteContent").unwrap(), None);
        storage.set_item("siteContent", "{\"texts\":{}}").unwrap();
        assert_eq!(
            storage.get_item("siteContent").unwrap().as_deref(),
            Some("{\"texts\":{}}")
        );
        assert!(dir.path().join("siteContent.json").exists());
        assert!(!dir.path().join("siteContent.json.tmp").exists());

        storage.remove_item("siteContent").unwrap();
        storage.remove_item("siteContent").unwrap();
        assert_eq!(storage.get_item("siteContent").unwrap(), None);
    }

    #[test]
    fn rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FilesystemStorage::new(dir.path()).unwrap();

        assert!(storage.set_item("../escape", "1").is_err());
        assert!(storage.get_item("").is_err());
    }

    #[test]
    fn creates_missing_base_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join(".dev").join("store");
        let storage = FilesystemStorage::new(&nested).unwrap();
        storage.set_item("language", "\"ar\"").unwrap();
        assert!(nested.join("language.json").exists());
    }
}
