use axum::{Router, routing::get};

pub mod loaders;
pub mod system;

pub fn router() -> Router {
    Router::new()
        .route("/loaders", get(loaders::list))
        .route(
            "/loaders/vtex/related-products/:slug",
            get(loaders::related_products),
        )
}
