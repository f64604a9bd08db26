use serde::{Deserialize, Serialize};

/// A purchasable product as rendered by the storefront.
///
/// Shaped after schema.org `Product`, one instance per SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "@type")]
    pub kind: String,
    /// SKU identifier.
    #[serde(rename = "productID")]
    pub product_id: String,
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    /// Absolute URL of the product page, pinned to this SKU.
    pub url: String,
    pub brand: Option<Brand>,
    pub gtin: Option<String>,
    pub image: Vec<ImageObject>,
    /// Zero-based position within the list this product was loaded for.
    pub position: usize,
    pub is_variant_of: ProductGroup,
    pub offers: AggregateOffer,
}

impl Product {
    pub const KIND: &'static str = "Product";

    /// Any seller has stock.
    pub fn is_available(&self) -> bool {
        self.offers
            .offers
            .iter()
            .any(|o| o.availability == ItemAvailability::InStock)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageObject {
    pub url: String,
    pub alternate_name: Option<String>,
}

/// The parent product a SKU belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductGroup {
    #[serde(rename = "productGroupID")]
    pub product_group_id: String,
    pub name: String,
    pub url: String,
    /// Manufacturer reference code.
    pub model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateOffer {
    pub price_currency: String,
    pub high_price: Option<f64>,
    pub low_price: Option<f64>,
    pub offer_count: usize,
    pub offers: Vec<Offer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub seller: Option<String>,
    pub seller_name: Option<String>,
    pub price: f64,
    pub list_price: f64,
    pub availability: ItemAvailability,
    pub inventory_level: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemAvailability {
    #[serde(rename = "https://schema.org/InStock")]
    InStock,
    #[serde(rename = "https://schema.org/OutOfStock")]
    OutOfStock,
}

impl ItemAvailability {
    pub fn from_quantity(quantity: u64) -> Self {
        if quantity > 0 {
            Self::InStock
        } else {
            Self::OutOfStock
        }
    }
}
