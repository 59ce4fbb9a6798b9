//! Persistence backends for the product collection.
//!
//! A backend only knows how to load and save the whole collection; the read-modify-write cycle
//! lives in `ProductService`, which holds a backend behind this trait so the file store can be
//! swapped for the in-memory one (or a database) without touching the contract.

use crate::app::error::StorageResult;
use crate::domain::product::Product;
use async_trait::async_trait;

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Loads the full collection in stored order.
    async fn load(&self) -> StorageResult<Vec<Product>>;

    /// Replaces the stored collection with `products`.
    async fn save(&self, products: &[Product]) -> StorageResult<()>;

    /// Human readable location, used in logs and by the preflight check.
    fn describe(&self) -> String;
}
