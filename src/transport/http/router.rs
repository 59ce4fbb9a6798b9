use crate::domain::product::{NewProduct, Product, ProductPatch};
use crate::transport::http::handlers::{health, products};
use crate::transport::http::types::{
    AppState, ErrorResponse, HealthResponse, MessageResponse, ValidationErrorResponse,
};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        products::list_products_handler,
        products::list_in_stock_handler,
        products::create_product_handler,
        products::update_product_handler,
        products::delete_product_handler
    ),
    components(schemas(
        Product,
        NewProduct,
        ProductPatch,
        ErrorResponse,
        ValidationErrorResponse,
        MessageResponse,
        HealthResponse
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/products",
            get(products::list_products_handler).post(products::create_product_handler),
        )
        .route(
            "/products/instock",
            get(products::list_in_stock_handler)
                .put(products::update_instock_segment_handler)
                .delete(products::delete_instock_segment_handler),
        )
        .route(
            "/products/:id",
            axum::routing::put(products::update_product_handler)
                .delete(products::delete_product_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ProductService;
    use crate::storage::{JsonFileStore, MemoryStore};
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value as JsonValue};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn app() -> Router {
        create_router(AppState::new(ProductService::new(Arc::new(MemoryStore::new()))))
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<JsonValue>,
    ) -> (StatusCode, JsonValue) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header("content-type", "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            JsonValue::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn health_endpoint() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok", "products": 0 }));
    }

    #[tokio::test]
    async fn empty_collection_lists_as_empty_array() {
        let (status, body) = send(&app(), Method::GET, "/products", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn create_returns_201_with_assigned_id() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/products",
            Some(json!({ "name": "Lamp", "price": 19.99, "inStock": true })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({ "id": 1, "name": "Lamp", "price": 19.99, "inStock": true }));
    }

    #[tokio::test]
    async fn create_without_price_is_400_mentioning_price() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/products",
            Some(json!({ "name": "Lamp", "inStock": true })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let errors = body["errors"].as_array().unwrap();
        assert!(errors.iter().any(|e| e.as_str().unwrap().contains("price")));
    }

    #[tokio::test]
    async fn create_with_empty_body_lists_every_field() {
        let (status, body) = send(&app(), Method::POST, "/products", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "errors": ["name is required", "price is required", "inStock is required"] })
        );
    }

    #[tokio::test]
    async fn malformed_json_is_400() {
        let app = app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/products")
            .header("content-type", "application/json")
            .body(Body::from("{\"name\": "))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_unknown_id_is_404() {
        let (status, body) = send(
            &app(),
            Method::PUT,
            "/products/9999",
            Some(json!({ "price": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Product not found" }));
    }

    #[tokio::test]
    async fn update_with_bad_id_is_400() {
        let (status, body) = send(&app(), Method::PUT, "/products/abc", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid id" }));
    }

    #[tokio::test]
    async fn update_with_bad_field_is_400() {
        let app = app();
        send(
            &app,
            Method::POST,
            "/products",
            Some(json!({ "name": "Lamp", "price": 5, "inStock": true })),
        )
        .await;
        let (status, body) = send(
            &app,
            Method::PUT,
            "/products/1",
            Some(json!({ "inStock": "no" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "errors": ["inStock must be a boolean"] }));
    }

    #[tokio::test]
    async fn partial_update_only_changes_price() {
        let app = app();
        send(
            &app,
            Method::POST,
            "/products",
            Some(json!({ "name": "Lamp", "price": 5, "inStock": true })),
        )
        .await;
        let (status, body) = send(
            &app,
            Method::PUT,
            "/products/1",
            Some(json!({ "price": 12.5 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "id": 1, "name": "Lamp", "price": 12.5, "inStock": true }));
    }

    #[tokio::test]
    async fn delete_then_delete_again() {
        let app = app();
        for name in ["A", "B"] {
            send(
                &app,
                Method::POST,
                "/products",
                Some(json!({ "name": name, "price": 1, "inStock": false })),
            )
            .await;
        }

        let (status, body) = send(&app, Method::DELETE, "/products/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Product deleted" }));

        let (_, list) = send(&app, Method::GET, "/products", None).await;
        let ids: Vec<u64> = list
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![2]);

        let (status, _) = send(&app, Method::DELETE, "/products/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn put_and_delete_on_instock_are_invalid_ids() {
        let app = app();
        let (status, body) = send(&app, Method::PUT, "/products/instock", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid id" }));

        let (status, body) = send(&app, Method::DELETE, "/products/instock", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid id" }));
    }

    #[tokio::test]
    async fn delete_with_zero_id_is_400() {
        let (status, _) = send(&app(), Method::DELETE, "/products/0", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn instock_route_is_not_captured_by_id_route() {
        let app = app();
        for (name, in_stock) in [("A", true), ("B", false), ("C", true)] {
            send(
                &app,
                Method::POST,
                "/products",
                Some(json!({ "name": name, "price": 2, "inStock": in_stock })),
            )
            .await;
        }
        let (status, body) = send(&app, Method::GET, "/products/instock", None).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[tokio::test]
    async fn corrupt_file_is_500_and_unhealthy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(&path, "{ broken").unwrap();
        let app = create_router(AppState::new(ProductService::new(Arc::new(
            JsonFileStore::new(&path),
        ))));

        let (status, body) = send(&app, Method::GET, "/products", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("Failed to parse products"));

        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "unhealthy");
    }

    #[test]
    fn openapi_lists_product_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/products"));
        assert!(doc.paths.paths.contains_key("/products/{id}"));
        assert!(doc.paths.paths.contains_key("/products/instock"));
    }
}
