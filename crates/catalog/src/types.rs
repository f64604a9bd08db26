//! Wire types returned by the legacy catalog system.
//!
//! Only the fields the storefront reads are modelled; everything else in the
//! payload is ignored. Missing collections default to empty.

use serde::{Deserialize, Serialize};

use crate::de::opt_string_or_number;

/// Result of the page-type lookup for a slug.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageType {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub page_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub meta_tag_description: Option<String>,
}

impl PageType {
    pub const PRODUCT: &'static str = "Product";

    /// Identifier of the product, when this is a product page that has one.
    pub fn product_id(&self) -> Option<&str> {
        if self.page_type.as_deref() != Some(Self::PRODUCT) {
            return None;
        }
        self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }
}

/// A related product as returned by the cross-selling endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyProduct {
    #[serde(deserialize_with = "opt_string_or_number", default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub brand_id: Option<String>,
    #[serde(default)]
    pub link_text: String,
    #[serde(default)]
    pub product_reference: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub items: Vec<LegacySku>,
}

/// A purchasable variant of a [`LegacyProduct`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacySku {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub item_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub name_complete: Option<String>,
    #[serde(default)]
    pub ean: Option<String>,
    #[serde(default)]
    pub images: Vec<LegacyImage>,
    #[serde(default)]
    pub sellers: Vec<LegacySeller>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyImage {
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub image_text: Option<String>,
    #[serde(default)]
    pub image_label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacySeller {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub seller_id: Option<String>,
    #[serde(default)]
    pub seller_name: Option<String>,
    #[serde(default)]
    pub seller_default: bool,
    // Field name is misspelled on the wire.
    #[serde(default, rename = "commertialOffer")]
    pub commercial_offer: CommercialOffer,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommercialOffer {
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub list_price: f64,
    #[serde(default)]
    pub price_without_discount: f64,
    #[serde(default)]
    pub available_quantity: u64,
}
