//! Stub collaborators for loader tests.

use std::sync::Mutex;

use storefront_catalog::{CatalogClient, CatalogError, LegacyProduct, LegacySku, PageType};
use storefront_core::ProductId;
use storefront_products::{AggregateOffer, Product, ProductGroup, ProductTransform, TransformOptions};

/// In-memory catalog that records every call it receives.
pub(crate) struct StubCatalog {
    pub page: Option<PageType>,
    pub page_fails: bool,
    pub related: Vec<LegacyProduct>,
    pub related_fails: bool,
    pub currency: String,
    calls: Mutex<Vec<String>>,
}

impl StubCatalog {
    pub fn with_page(page: Option<PageType>) -> Self {
        Self {
            page,
            page_fails: false,
            related: Vec::new(),
            related_fails: false,
            currency: "BRL".to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn product_page(id: &str) -> Self {
        Self::with_page(Some(PageType {
            id: Some(id.to_string()),
            page_type: Some("Product".to_string()),
            ..PageType::default()
        }))
    }

    pub fn with_related(mut self, related: Vec<LegacyProduct>) -> Self {
        self.related = related;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls other than the page-type lookup.
    pub fn fetch_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| !c.starts_with("page_type:"))
            .collect()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn related_result(&self) -> Result<Vec<LegacyProduct>, CatalogError> {
        if self.related_fails {
            return Err(CatalogError::Status {
                status: 503,
                url: "stub://crossselling".to_string(),
                body: "unavailable".to_string(),
            });
        }
        Ok(self.related.clone())
    }
}

#[async_trait::async_trait]
impl CatalogClient for StubCatalog {
    async fn page_type(&self, slug: &str) -> Result<Option<PageType>, CatalogError> {
        self.record(format!("page_type:{slug}"));
        if self.page_fails {
            return Err(CatalogError::Status {
                status: 500,
                url: "stub://pagetype".to_string(),
                body: "boom".to_string(),
            });
        }
        Ok(self.page.clone())
    }

    async fn who_saw_also_saw(&self, id: &ProductId) -> Result<Vec<LegacyProduct>, CatalogError> {
        self.record(format!("who_saw_also_saw:{id}"));
        self.related_result()
    }

    async fn who_saw_also_bought(
        &self,
        id: &ProductId,
    ) -> Result<Vec<LegacyProduct>, CatalogError> {
        self.record(format!("who_saw_also_bought:{id}"));
        self.related_result()
    }

    async fn who_bought_also_bought(
        &self,
        id: &ProductId,
    ) -> Result<Vec<LegacyProduct>, CatalogError> {
        self.record(format!("who_bought_also_bought:{id}"));
        self.related_result()
    }

    async fn show_together(&self, id: &ProductId) -> Result<Vec<LegacyProduct>, CatalogError> {
        self.record(format!("show_together:{id}"));
        self.related_result()
    }

    async fn cross_selling(
        &self,
        key: &str,
        id: &ProductId,
    ) -> Result<Vec<LegacyProduct>, CatalogError> {
        self.record(format!("cross_selling({key}):{id}"));
        self.related_result()
    }

    fn currency(&self) -> &str {
        &self.currency
    }
}

/// Transform that copies its inputs into an otherwise empty product.
pub(crate) struct StubTransform;

impl ProductTransform for StubTransform {
    fn to_product(
        &self,
        product: &LegacyProduct,
        sku: &LegacySku,
        rank: usize,
        options: &TransformOptions<'_>,
    ) -> Product {
        Product {
            kind: Product::KIND.to_string(),
            product_id: sku.item_id.clone().unwrap_or_default(),
            sku: sku.item_id.clone().unwrap_or_default(),
            name: product.product_name.clone(),
            description: None,
            url: options.url.to_string(),
            brand: None,
            gtin: None,
            image: Vec::new(),
            position: rank,
            is_variant_of: ProductGroup {
                product_group_id: product.product_id.clone().unwrap_or_default(),
                name: product.product_name.clone(),
                url: options.url.to_string(),
                model: None,
            },
            offers: AggregateOffer {
                price_currency: options.price_currency.to_string(),
                high_price: None,
                low_price: None,
                offer_count: 0,
                offers: Vec::new(),
            },
        }
    }
}

/// A related product with `skus` items; item ids are `{id}-{n}`.
pub(crate) fn related(id: &str, skus: usize) -> LegacyProduct {
    LegacyProduct {
        product_id: Some(id.to_string()),
        product_name: format!("Product {id}"),
        link_text: format!("product-{id}"),
        items: (0..skus)
            .map(|n| LegacySku {
                item_id: Some(format!("{id}-{n}")),
                name: format!("Sku {n}"),
                ..LegacySku::default()
            })
            .collect(),
        ..LegacyProduct::default()
    }
}
