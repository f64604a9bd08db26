//! Page data loaders.
//!
//! A loader turns an inbound page request plus its configured props into the
//! data a section renders. Layout:
//! - `loader.rs`: the `Loader` contract the host registers and invokes
//! - `cross_selling.rs`: public taxonomy -> catalog endpoint mapping + dispatch
//! - `page.rs`: slug -> product page resolution
//! - `related.rs`: the related-products loader

pub mod cross_selling;
pub mod error;
pub mod loader;
pub mod page;
pub mod related;

#[cfg(test)]
mod test_support;

pub use cross_selling::{CrossSellingKind, fetch_cross_selling, map_cross_selling};
pub use error::LoaderError;
pub use loader::{Loader, LoaderInfo, LoaderRequest, PropInfo};
pub use page::{ResolvedProductPage, resolve_page};
pub use related::{RelatedProductsLoader, RelatedProductsProps, load_related};
