//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: shared handler state (the catalog store)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs and request-mapping helpers
//! - `errors.rs`: the error translator

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router over `services`.
pub fn build_app(services: services::AppServices) -> Router {
    let services = Arc::new(services);

    let router = routes::router()
        .fallback(errors::route_not_found)
        .layer(Extension(services));
    with_middleware(router)
}

/// Wrap `router` in the request-logging and panic-recovery layers.
pub fn with_middleware(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(middleware::request_trace())
            .layer(middleware::catch_panic()),
    )
}

/// Router over a freshly seeded catalog (public entrypoint used by `main.rs`).
pub fn build_default_app() -> Router {
    build_app(services::build_services())
}
