//! The Product Service.
//!
//! This module sits between the HTTP handlers and the backing store.
//! It is responsible for:
//! 1.  Validating payloads and path ids before anything is touched.
//! 2.  Running each operation as one read -> mutate -> write cycle against the store
//!     (nothing is cached between calls).
//! 3.  Assigning ids for new records (current maximum + 1).
//!
//! The service does no locking of its own. `AppState` keeps it behind a mutex so one request's
//! cycle finishes before the next starts; two processes sharing the same file can still lose
//! updates.

use crate::app::error::{ProductError, ProductResult};
use crate::domain::product::{self, NewProduct, Product, ProductPatch};
use crate::storage::CollectionStore;
use serde_json::Value as JsonValue;
use std::sync::Arc;

pub struct ProductService {
    store: Arc<dyn CollectionStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn CollectionStore> {
        &self.store
    }

    /// All products in stored order.
    pub async fn list(&self) -> ProductResult<Vec<Product>> {
        Ok(self.store.load().await?)
    }

    /// Products with `inStock == true`, in stored order.
    pub async fn list_in_stock(&self) -> ProductResult<Vec<Product>> {
        let products = self.store.load().await?;
        Ok(product::in_stock(&products))
    }

    /// Validates a full payload, appends a new record and persists the collection.
    pub async fn create(&self, payload: &JsonValue) -> ProductResult<Product> {
        let new = NewProduct::from_json(payload).map_err(ProductError::Validation)?;

        let mut products = self.store.load().await?;
        let id = product::next_id(&products).ok_or(ProductError::IdsExhausted)?;
        let created = Product::from_new(id, new);
        products.push(created.clone());
        self.store.save(&products).await?;

        tracing::info!(id = created.id, name = %created.name, "product created");
        Ok(created)
    }

    /// Merges the fields present in `payload` over the record `raw_id` and persists.
    pub async fn update(&self, raw_id: &str, payload: &JsonValue) -> ProductResult<Product> {
        let id = Self::parse_id(raw_id)?;
        let patch = ProductPatch::from_json(payload).map_err(ProductError::Validation)?;

        let mut products = self.store.load().await?;
        let idx = product::position_of(&products, id).ok_or(ProductError::NotFound(id))?;
        products[idx].apply(patch);
        let updated = products[idx].clone();
        self.store.save(&products).await?;

        tracing::info!(id, "product updated");
        Ok(updated)
    }

    /// Removes the record `raw_id` and persists. Returns the removed record.
    pub async fn delete(&self, raw_id: &str) -> ProductResult<Product> {
        let id = Self::parse_id(raw_id)?;

        let mut products = self.store.load().await?;
        let idx = product::position_of(&products, id).ok_or(ProductError::NotFound(id))?;
        let removed = products.remove(idx);
        self.store.save(&products).await?;

        tracing::info!(id, "product deleted");
        Ok(removed)
    }

    fn parse_id(raw_id: &str) -> ProductResult<u64> {
        product::parse_id(raw_id).ok_or_else(|| ProductError::InvalidId(raw_id.to_string()))
    }
}
