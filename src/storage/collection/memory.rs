use super::CollectionStore;
use crate::app::error::StorageResult;
use crate::domain::product::Product;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-memory backend. Nothing survives the process.
#[derive(Default)]
pub struct MemoryStore {
    products: RwLock<Vec<Product>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing collection (handy for seeding tests).
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }
}

#[async_trait]
impl CollectionStore for MemoryStore {
    async fn load(&self) -> StorageResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn save(&self, products: &[Product]) -> StorageResult<()> {
        *self.products.write().await = products.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
