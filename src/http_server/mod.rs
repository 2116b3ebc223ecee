//! # HTTP Server Module
//!
//! The request pipeline: guard chain, resolver, per-collection handlers,
//! pagination, and the axum router that ties them together.
//!
//! # Endpoints
//!
//! - `GET /health` — liveness probe
//! - `GET|POST /{collection}` — list / create
//! - `GET|PUT|PATCH|DELETE /{collection}/{id}` — show / update / delete

pub mod config;
pub mod errors;
pub mod guards;
pub mod handlers;
pub mod pagination;
pub mod resolver;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::{build_router, serve, AppState};
