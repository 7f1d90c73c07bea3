//! JSON file store holding the whole record collection.

use crate::constants;
use crate::core::error::StorageError;
use crate::models::credential::CredentialRecord;
use crate::util::fs as store_fs;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Loads and saves the full collection as a single unit.
pub trait RecordStore {
    /// Returns an empty collection when nothing has been saved yet.
    fn load(&self) -> Result<Vec<CredentialRecord>, StorageError>;

    /// Replaces the stored collection.
    fn save(&self, records: &[CredentialRecord]) -> Result<(), StorageError>;
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Result<Vec<CredentialRecord>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store missing, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let records: Vec<CredentialRecord> =
            serde_json::from_str(&content).map_err(|source| {
                warn!(path = %self.path.display(), error = %source, "store is not valid");
                StorageError::Parse {
                    path: self.path.clone(),
                    source,
                }
            })?;
        debug!(path = %self.path.display(), count = records.len(), "loaded store");
        Ok(records)
    }

    fn save(&self, records: &[CredentialRecord]) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(records).map_err(StorageError::Serialize)?;
        let write_err = |source| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        if !parent.exists() {
            store_fs::ensure_dir(parent, constants::STORE_DIR_MODE).map_err(write_err)?;
        }

        let mut tmp = tempfile::Builder::new()
            .prefix(".credentials-")
            .suffix(".tmp")
            .tempfile_in(parent)
            .map_err(write_err)?;
        tmp.write_all(content.as_bytes()).map_err(write_err)?;
        tmp.flush().map_err(write_err)?;
        store_fs::set_file_permissions(tmp.as_file(), constants::STORE_FILE_MODE)
            .map_err(write_err)?;

        tmp.persist(&self.path)
            .map_err(|source| StorageError::Persist {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), count = records.len(), "saved store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample() -> Vec<CredentialRecord> {
        vec![
            CredentialRecord::new("db-password", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 30),
            CredentialRecord::new("api-key", NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(), 90),
        ]
    }

    #[test]
    fn test_load_missing_returns_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("credentials.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("credentials.json"));
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), sample());
    }

    #[test]
    fn test_resave_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");
        let store = JsonFileStore::new(&path);
        store.save(&sample()).unwrap();
        let first = fs::read(&path).unwrap();
        store.save(&store.load().unwrap()).unwrap();
        assert_eq!(fs::read(&path).unwrap(), first);
    }

    #[test]
    fn test_reads_two_space_indented_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");
        fs::write(
            &path,
            "[\n  {\n    \"name\": \"ssh\",\n    \"last_rotated\": \"2024-03-01\",\n    \"rotation_days\": 7\n  }\n]",
        )
        .unwrap();
        let records = JsonFileStore::new(&path).load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "ssh");
        assert_eq!(records[0].rotation_days, 7);
    }

    #[test]
    fn test_corrupt_store_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");
        fs::write(&path, "{not json").unwrap();
        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::Parse { .. }));
    }

    #[test]
    fn test_bad_date_in_store_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");
        fs::write(
            &path,
            r#"[{"name":"x","last_rotated":"March 1","rotation_days":7}]"#,
        )
        .unwrap();
        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::Parse { .. }));
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("credentials.json");
        let store = JsonFileStore::new(&path);
        store.save(&sample()).unwrap();
        assert!(path.is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_save_sets_private_mode() {
        use std::os::unix::fs::PermissionsExt;
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");
        JsonFileStore::new(&path).save(&sample()).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, constants::STORE_FILE_MODE);
    }
}
