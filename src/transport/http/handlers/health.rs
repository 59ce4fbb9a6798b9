use crate::transport::http::types::{AppState, HealthResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy (backing store readable)", body = HealthResponse),
        (status = 503, description = "Service is unhealthy (backing store unreadable)", body = HealthResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    let service = state.product_service.lock().await;

    match service.list().await {
        Ok(products) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                products: Some(products.len()),
                error: None,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(store = %service.store().describe(), error = %e, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy".to_string(),
                    products: None,
                    error: Some(e.to_string()),
                }),
            )
                .into_response()
        }
    }
}
