//! Canonical product model.
//!
//! This crate contains the catalog-independent product shape consumed by the
//! rendering layer, plus the pure transform that builds it from legacy catalog
//! records (no IO, no HTTP).

pub mod product;
pub mod transform;

pub use product::{
    AggregateOffer, Brand, ImageObject, ItemAvailability, Offer, Product, ProductGroup,
};
pub use transform::{LegacyProductTransform, ProductTransform, TransformOptions};
