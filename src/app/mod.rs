pub mod error;
pub mod product_service;

pub use error::{ProductError, ProductResult, StorageError, StorageResult};
pub use product_service::ProductService;
