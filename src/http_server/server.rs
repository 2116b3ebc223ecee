//! # HTTP Server
//!
//! Router construction and the serve loop. All state the handlers need is
//! one `Arc<AppState>`: the injected store and the resource registry.

use std::sync::Arc;

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::resource::Registry;
use crate::store::Store;

use super::config::HttpServerConfig;
use super::handlers;

/// Shared application state.
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub registry: Registry,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, registry: Registry) -> Self {
        Self { store, registry }
    }
}

/// Build the router for the JSON:API surface.
pub fn build_router(state: Arc<AppState>, config: &HttpServerConfig) -> Router {
    let cors = if config.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .route("/health", get(health))
        .route(
            "/{collection}",
            get(handlers::list).post(handlers::create),
        )
        .route(
            "/{collection}/{id}",
            get(handlers::show)
                .put(handlers::update)
                .patch(handlers::update)
                .delete(handlers::destroy),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "status": "ok",
    }))
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: &HttpServerConfig, state: Arc<AppState>) -> Result<(), std::io::Error> {
    let router = build_router(state, config);
    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, router).await
}
