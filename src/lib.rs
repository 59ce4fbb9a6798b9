pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{ProductError, ProductService, StorageError};
pub use domain::product::{NewProduct, Product, ProductPatch};
pub use storage::{CollectionStore, JsonFileStore, MemoryStore};
