//! Legacy catalog system integration.
//!
//! This crate owns everything that talks to (or describes) the remote catalog:
//! - `client.rs`: the `CatalogClient` seam consumed by the loaders
//! - `http.rs`: reqwest-backed implementation of that seam
//! - `types.rs`: wire types returned by the catalog endpoints
//! - `endpoint.rs`: the closed set of cross-selling endpoint keys
//! - `config.rs` / `segment.rs`: per-process and per-session settings

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod segment;
pub mod types;

mod de;

pub use client::CatalogClient;
pub use config::CatalogConfig;
pub use endpoint::CrossSellingEndpoint;
pub use error::CatalogError;
pub use http::VtexCatalogClient;
pub use segment::{Segment, SegmentError};
pub use types::{CommercialOffer, LegacyImage, LegacyProduct, LegacySeller, LegacySku, PageType};
