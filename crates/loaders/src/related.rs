//! Related products for product detail pages (`/:slug/p`).

use serde::{Deserialize, Serialize};
use url::Url;

use storefront_catalog::{CatalogClient, VtexCatalogClient};
use storefront_core::Slug;
use storefront_products::{LegacyProductTransform, Product, ProductTransform, TransformOptions};

use crate::cross_selling::{CrossSellingKind, fetch_cross_selling, map_cross_selling};
use crate::error::LoaderError;
use crate::loader::{Loader, LoaderInfo, LoaderRequest, PropInfo};
use crate::page::resolve_page;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedProductsProps {
    /// Cross-selling relationship; empty or absent disables the loader.
    #[serde(default)]
    pub cross_selling: Option<String>,
    /// Maximum number of products; all of them when absent.
    #[serde(default)]
    pub count: Option<usize>,
}

/// Load the products related to the product page at `slug`.
///
/// Returns `Ok(None)` when `slug` is not a product page or no relationship
/// was requested. Otherwise makes exactly two catalog calls (page lookup,
/// cross-selling fetch) and returns the first `count` related products in
/// catalog order, ranked from zero.
pub async fn load_related<C, T>(
    client: &C,
    transform: &T,
    url: &Url,
    slug: &str,
    props: &RelatedProductsProps,
) -> Result<Option<Vec<Product>>, LoaderError>
where
    C: CatalogClient + ?Sized,
    T: ProductTransform + ?Sized,
{
    let Ok(slug) = Slug::new(slug) else {
        tracing::debug!("blank slug; skipping related products");
        return Ok(None);
    };

    let Some(page) = resolve_page(client, &slug).await? else {
        return Ok(None);
    };

    let Some(kind) = CrossSellingKind::parse(props.cross_selling.as_deref()) else {
        tracing::debug!(%slug, "no cross-selling relationship requested");
        return Ok(None);
    };

    let endpoint = map_cross_selling(&kind);
    tracing::debug!(
        %slug,
        product_id = %page.product_id,
        endpoint = %endpoint,
        "fetching related products"
    );
    let records = fetch_cross_selling(client, &endpoint, &page.product_id).await?;

    let options = TransformOptions {
        url,
        price_currency: client.currency(),
    };
    let limit = props.count.unwrap_or(usize::MAX);

    let products = records
        .iter()
        .take(limit)
        .enumerate()
        .map(|(rank, record)| {
            let sku = record.items.first().ok_or_else(|| LoaderError::MissingSku {
                product_id: record.product_id.clone().unwrap_or_default(),
            })?;
            Ok(transform.to_product(record, sku, rank, &options))
        })
        .collect::<Result<Vec<_>, LoaderError>>()?;

    Ok(Some(products))
}

/// Registered loader: related products from the legacy catalog.
#[derive(Debug, Clone)]
pub struct RelatedProductsLoader<T = LegacyProductTransform> {
    client: VtexCatalogClient,
    transform: T,
}

impl RelatedProductsLoader {
    pub fn new(client: VtexCatalogClient) -> Self {
        Self::with_transform(client, LegacyProductTransform)
    }
}

impl<T> RelatedProductsLoader<T> {
    pub const NAME: &'static str = "vtex/related-products";

    pub fn with_transform(client: VtexCatalogClient, transform: T) -> Self {
        Self { client, transform }
    }
}

#[async_trait::async_trait]
impl<T> Loader for RelatedProductsLoader<T>
where
    T: ProductTransform,
{
    type Props = RelatedProductsProps;
    type Output = Vec<Product>;

    fn info(&self) -> LoaderInfo {
        LoaderInfo {
            name: Self::NAME,
            title: "VTEX Related Products Loader",
            description: "Works on routes of type /:slug/p",
            props: vec![
                PropInfo {
                    name: "crossSelling",
                    title: "Related Products",
                    description: "VTEX Cross Selling API. One of who-also-saw, who-also-bought, \
                                  who-bought-also-bought, show-together",
                },
                PropInfo {
                    name: "count",
                    title: "Count",
                    description: "Number of related products",
                },
            ],
        }
    }

    async fn load(
        &self,
        request: &LoaderRequest,
        props: Self::Props,
    ) -> Result<Option<Self::Output>, LoaderError> {
        let client = self.client.with_segment(&request.segment);
        load_related(&client, &self.transform, &request.url, &request.slug, &props).await
    }
}
