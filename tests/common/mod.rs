//! Shared helpers for the integration suites: router construction against
//! a seeded in-memory store, and response body collection.

#![allow(dead_code)]

use std::sync::Arc;

use aviary::http_server::{build_router, AppState, HttpServerConfig};
use aviary::resource::Registry;
use aviary::store::{MemoryStore, Record, Store};
use axum::body::{Body, Bytes};
use axum::http::Response;
use axum::Router;
use http_body_util::BodyExt;

pub const MEDIA_TYPE: &str = "application/vnd.api+json";

/// Router over the given store, with the default registry and config.
pub fn app(store: Arc<MemoryStore>) -> Router {
    let state = Arc::new(AppState::new(store, Registry::default()));
    build_router(state, &HttpServerConfig::default())
}

/// Seed a user holding an API token. Returns the stored record.
pub fn seed_user(store: &MemoryStore, full_name: &str, token: &str) -> Record {
    store.save(Record::with_attributes(
        "users",
        [("full_name", full_name), ("token", token)],
    ))
}

/// Seed `count` posts for simple list scenarios.
pub fn seed_posts(store: &MemoryStore, count: usize) {
    for i in 1..=count {
        store.save(Record::with_attributes(
            "posts",
            [
                ("title", format!("Post {i}")),
                ("content", format!("Content of post {i}")),
            ],
        ));
    }
}

/// Collect a response body.
pub async fn body_bytes(response: Response<Body>) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

/// Collect and parse a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}
