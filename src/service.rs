//! ProductService - Call surface for the catalog.

use crate::product::Product;
use crate::repository::ProductRepository;
use crate::store::{SnapshotStore, StoreError};

/// Thin orchestration layer over [`ProductRepository`].
///
/// This is the surface an outer transport layer consumes. It adds no
/// behavior of its own today; it exists so validation or cross-cutting
/// concerns have a home that is not the repository.
pub struct ProductService<S> {
    repository: ProductRepository<S>,
}

impl<S: SnapshotStore> ProductService<S> {
    pub fn new(repository: ProductRepository<S>) -> Self {
        Self { repository }
    }

    /// Create a product from caller-supplied fields; the ID is assigned by
    /// the repository.
    pub fn create(
        &self,
        name: &str,
        kind: &str,
        count: i64,
        price: f64,
    ) -> Result<Product, StoreError> {
        self.repository.create(name, kind, count, price)
    }

    /// The full catalog.
    pub fn get_all(&self) -> Result<Vec<Product>, StoreError> {
        self.repository.get_all()
    }
}
