use storefront_catalog::{CatalogConfig, CatalogError, VtexCatalogClient};
use storefront_loaders::{Loader, LoaderInfo, RelatedProductsLoader};

/// Loaders registered with the host, sharing one catalog client.
#[derive(Debug, Clone)]
pub struct AppServices {
    pub related_products: RelatedProductsLoader,
}

impl AppServices {
    /// Documentation of every registered loader.
    pub fn loaders(&self) -> Vec<LoaderInfo> {
        vec![self.related_products.info()]
    }
}

pub fn build_services(config: &CatalogConfig) -> Result<AppServices, CatalogError> {
    let client = VtexCatalogClient::new(config)?;
    tracing::info!(
        account = %config.account,
        currency = %config.currency,
        "catalog client configured"
    );

    Ok(AppServices {
        related_products: RelatedProductsLoader::new(client),
    })
}
