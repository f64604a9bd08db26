//! Slug -> product page resolution.

use storefront_catalog::{CatalogClient, CatalogError, PageType};
use storefront_core::{ProductId, Slug};

/// A slug that the catalog confirmed to be a product detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProductPage {
    pub product_id: ProductId,
    pub page: PageType,
}

/// Ask the catalog what `{slug}/p` is.
///
/// Returns `Ok(None)` unless it is a product page with an identifier.
/// Catalog failures are returned unchanged.
pub async fn resolve_page<C>(
    client: &C,
    slug: &Slug,
) -> Result<Option<ResolvedProductPage>, CatalogError>
where
    C: CatalogClient + ?Sized,
{
    let path = slug.product_path();
    let Some(page) = client.page_type(&path).await? else {
        tracing::debug!(%path, "no page matches slug");
        return Ok(None);
    };

    let Some(product_id) = page.product_id().and_then(|id| ProductId::new(id).ok()) else {
        tracing::debug!(%path, page_type = ?page.page_type, "slug is not a product page with an id");
        return Ok(None);
    };

    Ok(Some(ResolvedProductPage { product_id, page }))
}
