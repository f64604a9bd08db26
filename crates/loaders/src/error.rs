use thiserror::Error;

use storefront_catalog::CatalogError;

/// Failure of a loader invocation.
///
/// "Nothing to load" is not an error; loaders return `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// A catalog call failed. Never retried.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A related product came back without any SKU to price or display.
    #[error("related product {product_id} has no sku")]
    MissingSku { product_id: String },
}
