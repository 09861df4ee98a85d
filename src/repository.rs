//! ProductRepository - ID assignment over a snapshot store.

use crate::product::Product;
use crate::store::{SnapshotStore, StoreError};

/// Catalog repository over any [`SnapshotStore`].
///
/// Owns the one piece of domain logic in this crate: assigning the next
/// unique product ID. Storage errors pass through verbatim — the repository
/// never retries, wraps, or recovers.
pub struct ProductRepository<S> {
    store: S,
}

impl<S: SnapshotStore> ProductRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a product, assigning it the next free ID.
    ///
    /// The next ID is `max(existing IDs) + 1`, or `1` for an empty catalog.
    /// Using the maximum rather than the length keeps the assignment correct
    /// when external edits have left gaps in the ID sequence. The new product
    /// is appended after all existing entries and the whole snapshot is
    /// rewritten; if either the read or the write fails the error propagates
    /// and nothing is returned.
    pub fn create(
        &self,
        name: &str,
        kind: &str,
        count: i64,
        price: f64,
    ) -> Result<Product, StoreError> {
        let mut products: Vec<Product> = self.store.read()?;

        let next_id = products.iter().map(|p| p.id).max().map_or(1, |max| max + 1);

        let product = Product {
            id: next_id,
            name: name.to_string(),
            kind: kind.to_string(),
            count,
            price,
        };

        products.push(product.clone());
        self.store.write(&products)?;

        Ok(product)
    }

    /// The full catalog, exactly as persisted.
    pub fn get_all(&self) -> Result<Vec<Product>, StoreError> {
        self.store.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StubStore;

    fn product(id: u64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            kind: "Tech".to_string(),
            count: 1,
            price: 10.0,
        }
    }

    #[test]
    fn first_product_gets_id_one() {
        let repo = ProductRepository::new(StubStore::new());

        let created = repo.create("CellPhone", "Tech", 3, 52.0).unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.name, "CellPhone");
        assert_eq!(created.kind, "Tech");
        assert_eq!(created.count, 3);
        assert_eq!(created.price, 52.0);
    }

    #[test]
    fn next_id_is_max_plus_one() {
        let stub = StubStore::with_snapshot(&[product(1), product(2)]).unwrap();
        let repo = ProductRepository::new(stub);

        let created = repo.create("Notebook", "Tech", 10, 1750.5).unwrap();
        assert_eq!(created.id, 3);
    }

    #[test]
    fn id_assignment_survives_gaps() {
        let stub = StubStore::with_snapshot(&[product(1), product(7)]).unwrap();
        let repo = ProductRepository::new(stub);

        let created = repo.create("Notebook", "Tech", 10, 1750.5).unwrap();
        assert_eq!(created.id, 8);
    }

    #[test]
    fn read_error_propagates_verbatim() {
        let err = StoreError::Storage("error for Storage".to_string());
        let repo = ProductRepository::new(StubStore::with_error(err.clone()));

        assert_eq!(repo.create("CellPhone", "Tech", 3, 52.0).unwrap_err(), err);
        assert_eq!(repo.get_all().unwrap_err(), err);
    }
}
