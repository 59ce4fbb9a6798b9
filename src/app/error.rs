use std::path::PathBuf;
use thiserror::Error;

/// Failures reading or writing the backing collection.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read products from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse products in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize products: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write products to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Everything a product operation can report back to its caller.
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Invalid id")]
    InvalidId(String),

    #[error("Product not found")]
    NotFound(u64),

    #[error("No product id left to assign (maximum id is {})", u64::MAX)]
    IdsExhausted,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type ProductResult<T> = Result<T, ProductError>;
