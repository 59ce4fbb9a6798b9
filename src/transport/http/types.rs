use crate::app::ProductService;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use utoipa::ToSchema;

/// Shared handler state.
///
/// Handlers hold the service mutex for a whole read -> mutate -> write cycle, so requests
/// handled by this process never interleave on the backing file.
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<Mutex<ProductService>>,
}

impl AppState {
    pub fn new(product_service: ProductService) -> Self {
        Self {
            product_service: Arc::new(Mutex::new(product_service)),
        }
    }
}

/// Single error message (invalid id, not found, storage failure, unparseable body).
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Itemized payload validation failures, one per violated field.
#[derive(Serialize, Debug, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<String>,
}

/// Confirmation body for successful deletes.
#[derive(Serialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Number of records in the backing store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
