//! HTTP API application wiring (Axum router + shared config).
//!
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: response bodies
//! - `errors.rs`: consistent JSON error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use crate::config::ServerConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by the server and tests).
///
/// The route table is fixed here and never changes once serving starts.
pub fn build_app(config: ServerConfig) -> Router {
    let legacy_routes = config.legacy_routes;

    routes::router(legacy_routes)
        .fallback(errors::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .layer(Extension(Arc::new(config))),
        )
}
