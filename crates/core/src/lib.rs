//! `storefront-core`: shared building blocks for the storefront loaders.
//!
//! This crate contains **pure** primitives (no IO, no HTTP).

pub mod error;
pub mod id;

pub use error::CoreError;
pub use id::{ProductId, Slug};
