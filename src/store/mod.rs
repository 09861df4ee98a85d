//! Storage - The persistence port and its backends.
//!
//! Everything that touches the storage medium lives behind the
//! [`SnapshotStore`] trait: the production [`FileStore`], the fixed-response
//! [`StubStore`], and the order-verifying [`SequenceMock`]. Domain code is
//! written against the trait and never learns which backend it got.
//!
//! ## Example
//!
//! ```ignore
//! use stockfile::{FileStore, ProductRepository};
//!
//! let store = FileStore::new("products.json");
//! let repo = ProductRepository::new(store);
//! let product = repo.create("CellPhone", "Tech", 3, 52.0)?;
//! ```

mod file;
mod sequence_mock;
mod store;
mod stub;

use std::fmt;

/// Error type for snapshot store operations.
///
/// Storage errors propagate unchanged through the repository and service
/// layers: no retry, no wrapping, no recovery. Out-of-order calls detected
/// by [`SequenceMock`] are not represented here — those panic by design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The medium could not be read or written.
    Storage(String),
    /// The snapshot could not be encoded or decoded.
    Serde(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Storage(msg) => write!(f, "storage error: {}", msg),
            StoreError::Serde(msg) => write!(f, "snapshot serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

pub use file::FileStore;
pub use sequence_mock::{Call, Expect, Outcome, SequenceMock};
pub use store::SnapshotStore;
pub use stub::StubStore;
