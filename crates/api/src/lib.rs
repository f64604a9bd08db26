//! HTTP host for storefront loaders: server, routing, and request mapping.

pub mod app;
pub mod context;
pub mod middleware;
