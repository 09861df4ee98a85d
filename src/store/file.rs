//! FileStore - JSON-file-backed snapshot store.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};

use super::{SnapshotStore, StoreError};

/// Snapshot store backed by a single JSON file.
///
/// The whole collection is serialized as one JSON array and rewritten in
/// full on every `write`. A missing file reads as the empty collection —
/// this is a deliberate cold-start contract, not an error: a fresh
/// deployment has no data file until the first write creates one. Every
/// other I/O failure is reported as [`StoreError::Storage`].
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store persisting to `path`. The file is not touched until
    /// the first read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotStore for FileStore {
    fn read<T: DeserializeOwned>(&self) -> Result<Vec<T>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StoreError::Storage(err.to_string())),
        };

        serde_json::from_slice(&bytes).map_err(|e| StoreError::Serde(e.to_string()))
    }

    fn write<T: Serialize>(&self, snapshot: &[T]) -> Result<(), StoreError> {
        let bytes =
            serde_json::to_vec(snapshot).map_err(|e| StoreError::Serde(e.to_string()))?;

        fs::write(&self.path, bytes).map_err(|e| StoreError::Storage(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));

        let snapshot: Vec<u64> = store.read().unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data.json"));

        store.write(&[1u64, 2, 3]).unwrap();

        let snapshot: Vec<u64> = store.read().unwrap();
        assert_eq!(snapshot, vec![1, 2, 3]);
    }

    #[test]
    fn write_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data.json"));

        store.write(&[1u64, 2, 3]).unwrap();
        store.write(&[9u64]).unwrap();

        let snapshot: Vec<u64> = store.read().unwrap();
        assert_eq!(snapshot, vec![9]);
    }

    #[test]
    fn undecodable_content_is_a_serde_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.json");
        std::fs::write(&path, b"not json").unwrap();
        let store = FileStore::new(path);

        let result: Result<Vec<u64>, _> = store.read();
        assert!(matches!(result, Err(StoreError::Serde(_))));
    }

    #[test]
    fn unreadable_path_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        // The directory itself is not a readable data file.
        let store = FileStore::new(dir.path());

        let result: Result<Vec<u64>, _> = store.read();
        assert!(matches!(result, Err(StoreError::Storage(_))));
    }
}
