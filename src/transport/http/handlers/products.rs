use crate::domain::product::{NewProduct, Product, ProductPatch};
use crate::transport::http::handlers::common::{error_response, parse_json_body};
use crate::transport::http::types::{
    AppState, ErrorResponse, MessageResponse, ValidationErrorResponse,
};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products in stored order", body = [Product]),
        (status = 500, description = "Backing file could not be read", body = ErrorResponse)
    )
)]
pub async fn list_products_handler(State(state): State<AppState>) -> impl IntoResponse {
    let service = state.product_service.lock().await;
    match service.list().await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/products/instock",
    responses(
        (status = 200, description = "Products with inStock == true, in stored order", body = [Product]),
        (status = 500, description = "Backing file could not be read", body = ErrorResponse)
    )
)]
pub async fn list_in_stock_handler(State(state): State<AppState>) -> impl IntoResponse {
    let service = state.product_service.lock().await;
    match service.list_in_stock().await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = NewProduct,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Invalid JSON or failed validation", body = ValidationErrorResponse),
        (status = 500, description = "Backing file could not be read or written", body = ErrorResponse)
    )
)]
pub async fn create_product_handler(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let payload = match parse_json_body(&body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let service = state.product_service.lock().await;
    match service.create(&payload).await {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    params(
        ("id" = u64, Path, description = "Product id (positive integer)")
    ),
    request_body = ProductPatch,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Invalid id, invalid JSON or failed validation", body = ValidationErrorResponse),
        (status = 404, description = "No product with this id", body = ErrorResponse),
        (status = 500, description = "Backing file could not be read or written", body = ErrorResponse)
    )
)]
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> impl IntoResponse {
    update_product(&state, &id, &body).await
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(
        ("id" = u64, Path, description = "Product id (positive integer)")
    ),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "No product with this id", body = ErrorResponse),
        (status = 500, description = "Backing file could not be read or written", body = ErrorResponse)
    )
)]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    delete_product(&state, &id).await
}

/// `/products/instock` shadows `/products/:id`; PUT and DELETE on it are answered as if
/// `instock` had been passed as the id.
pub async fn update_instock_segment_handler(State(state): State<AppState>, body: Bytes) -> Response {
    update_product(&state, IN_STOCK_SEGMENT, &body).await
}

pub async fn delete_instock_segment_handler(State(state): State<AppState>) -> Response {
    delete_product(&state, IN_STOCK_SEGMENT).await
}

const IN_STOCK_SEGMENT: &str = "instock";

async fn update_product(state: &AppState, id: &str, body: &Bytes) -> Response {
    let payload = match parse_json_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let service = state.product_service.lock().await;
    match service.update(id, &payload).await {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn delete_product(state: &AppState, id: &str) -> Response {
    let service = state.product_service.lock().await;
    match service.delete(id).await {
        Ok(_) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Product deleted".to_string(),
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
