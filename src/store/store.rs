//! SnapshotStore - Abstract whole-collection persistence.

use serde::{de::DeserializeOwned, Serialize};

use super::StoreError;

/// Abstract storage for a whole collection snapshot.
///
/// The contract is deliberately narrow: a backend can only read or replace
/// the entire persisted state at once. There are no partial reads, no
/// appends, and no transactions — a failed `write` may leave the medium in
/// either the old or a corrupted state.
pub trait SnapshotStore: Send + Sync {
    /// Read the full current snapshot.
    fn read<T: DeserializeOwned>(&self) -> Result<Vec<T>, StoreError>;

    /// Replace the full persisted state with `snapshot`.
    fn write<T: Serialize>(&self, snapshot: &[T]) -> Result<(), StoreError>;
}

// A shared reference to a store is itself a store, so callers can hand a
// repository `&store` and keep the original around (tests do this to call
// SequenceMock::assert_exhausted afterwards).
impl<S: SnapshotStore> SnapshotStore for &S {
    fn read<T: DeserializeOwned>(&self) -> Result<Vec<T>, StoreError> {
        (**self).read()
    }

    fn write<T: Serialize>(&self, snapshot: &[T]) -> Result<(), StoreError> {
        (**self).write(snapshot)
    }
}
