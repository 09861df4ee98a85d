mod product;
mod repository;
mod service;
mod store;

pub use product::Product;
pub use repository::ProductRepository;
pub use service::ProductService;
pub use store::{
    Call, Expect, FileStore, Outcome, SequenceMock, SnapshotStore, StoreError, StubStore,
};
