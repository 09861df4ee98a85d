//! StubStore - Fixed-response snapshot store for tests.

use serde::{de::DeserializeOwned, Serialize};

use super::{SnapshotStore, StoreError};

/// Snapshot store that answers every call with a fixed response.
///
/// Tests use this to exercise code written against [`SnapshotStore`] without
/// touching the filesystem. It carries no behavior of its own: `read` hands
/// back the configured payload (or the injected error), `write` discards its
/// input (or returns the injected error). For order verification use
/// [`SequenceMock`](super::SequenceMock) instead.
#[derive(Default)]
pub struct StubStore {
    data: Option<Vec<u8>>,
    err: Option<StoreError>,
}

impl StubStore {
    /// Stub with no payload: reads yield the empty collection, writes succeed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stub whose reads decode the given snapshot.
    pub fn with_snapshot<T: Serialize>(snapshot: &[T]) -> Result<Self, StoreError> {
        let data = serde_json::to_vec(snapshot).map_err(|e| StoreError::Serde(e.to_string()))?;
        Ok(Self {
            data: Some(data),
            err: None,
        })
    }

    /// Stub that fails every call with the given error.
    pub fn with_error(err: StoreError) -> Self {
        Self {
            data: None,
            err: Some(err),
        }
    }
}

impl SnapshotStore for StubStore {
    fn read<T: DeserializeOwned>(&self) -> Result<Vec<T>, StoreError> {
        if let Some(err) = &self.err {
            return Err(err.clone());
        }

        match &self.data {
            Some(bytes) => {
                serde_json::from_slice(bytes).map_err(|e| StoreError::Serde(e.to_string()))
            }
            None => Ok(Vec::new()),
        }
    }

    fn write<T: Serialize>(&self, _snapshot: &[T]) -> Result<(), StoreError> {
        match &self.err {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stub_reads_empty() {
        let stub = StubStore::new();
        let snapshot: Vec<u64> = stub.read().unwrap();
        assert!(snapshot.is_empty());
        stub.write(&[1u64]).unwrap();
    }

    #[test]
    fn configured_snapshot_is_returned() {
        let stub = StubStore::with_snapshot(&[10u64, 20]).unwrap();
        let snapshot: Vec<u64> = stub.read().unwrap();
        assert_eq!(snapshot, vec![10, 20]);
    }

    #[test]
    fn injected_error_fails_both_operations() {
        let err = StoreError::Storage("disk on fire".to_string());
        let stub = StubStore::with_error(err.clone());

        let read: Result<Vec<u64>, _> = stub.read();
        assert_eq!(read.unwrap_err(), err);
        assert_eq!(stub.write(&[1u64]).unwrap_err(), err);
    }
}
