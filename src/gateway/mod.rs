//! HTTP gateway (axum)
//!
//! All ledger routes live under `/api/v1`. Swagger UI is served at `/docs`.

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use state::AppState;

/// Build the complete router over shared state
pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Accounts
        .route("/account", post(handlers::create_account))
        .route("/accounts", get(handlers::list_accounts))
        .route("/account/{account_no}", get(handlers::get_account))
        .route("/account-numbers", get(handlers::list_account_numbers))
        // Transactions
        .route("/transactions", get(handlers::list_transactions))
        .route("/transaction/{transaction_id}", get(handlers::get_transaction))
        // Transfers
        .route("/transfer", post(handlers::create_transfer))
        // System
        .route("/health", get(handlers::health_check));

    Router::new()
        .nest("/api/v1", api_routes)
        .with_state(state)
        // OpenAPI / Swagger UI (stateless, added after with_state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
}

/// Bind and serve until the server stops
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) -> std::io::Result<()> {
    let app = build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await.inspect_err(|e| {
        tracing::error!(%addr, error = %e, "Failed to bind; port may already be in use");
    })?;

    println!("🚀 Gateway listening on http://{}", addr);
    println!("📖 API Docs: http://{}/docs", addr);
    tracing::info!(%addr, "Gateway started");

    axum::serve(listener, app).await
}
