//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: catalog client + registered loaders
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use storefront_catalog::{CatalogConfig, CatalogError};

use crate::middleware;

pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &CatalogConfig) -> Result<Router, CatalogError> {
    let services = Arc::new(services::build_services(config)?);

    let loaders = routes::router().layer(
        ServiceBuilder::new()
            .layer(Extension(services))
            .layer(axum::middleware::from_fn(middleware::segment_middleware)),
    );

    Ok(Router::new()
        .route("/health", get(routes::system::health))
        .merge(loaders))
}
