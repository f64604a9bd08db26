use storefront_core::ProductId;

use crate::error::CatalogError;
use crate::types::{LegacyProduct, PageType};

/// Read-only interface to the legacy catalog system.
///
/// Every async method is one outbound call. Implementations must not retry or
/// cache; failures are returned to the caller unchanged.
#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    /// Look up what kind of page `slug` represents.
    ///
    /// `slug` is the full page path (e.g. `blue-shirt/p`). Returns `None` when
    /// the catalog has no match.
    async fn page_type(&self, slug: &str) -> Result<Option<PageType>, CatalogError>;

    async fn who_saw_also_saw(
        &self,
        product_id: &ProductId,
    ) -> Result<Vec<LegacyProduct>, CatalogError>;

    async fn who_saw_also_bought(
        &self,
        product_id: &ProductId,
    ) -> Result<Vec<LegacyProduct>, CatalogError>;

    async fn who_bought_also_bought(
        &self,
        product_id: &ProductId,
    ) -> Result<Vec<LegacyProduct>, CatalogError>;

    async fn show_together(
        &self,
        product_id: &ProductId,
    ) -> Result<Vec<LegacyProduct>, CatalogError>;

    /// Fetch a cross-selling relationship by its raw key.
    ///
    /// Used for keys that have no dedicated operation above.
    async fn cross_selling(
        &self,
        key: &str,
        product_id: &ProductId,
    ) -> Result<Vec<LegacyProduct>, CatalogError>;

    /// Currency code prices are expressed in (e.g. `BRL`).
    fn currency(&self) -> &str;
}
