// src/bin/api_server.rs

use product_store::infra::{config, logging};
use product_store::transport;
use product_store::{JsonFileStore, ProductService};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    // --- Store Initialization ---
    let data_file = config::data_file();
    let store = Arc::new(JsonFileStore::new(&data_file));
    let service = ProductService::new(store);
    match service.list().await {
        Ok(products) => tracing::info!(
            path = %data_file.display(),
            count = products.len(),
            "backing file loaded"
        ),
        // Keep serving: every request re-reads the file and reports the failure itself.
        Err(e) => tracing::warn!(path = %data_file.display(), error = %e, "backing file unreadable"),
    }

    // --- API Server Initialization ---
    let app_state = transport::http::AppState::new(service);
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);

    let addr = config::bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Graceful shutdown complete.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received (Ctrl+C)...");
}
