//! Legacy catalog record -> canonical [`Product`].

use url::Url;

use storefront_catalog::{LegacyProduct, LegacySku};

use crate::product::{
    AggregateOffer, Brand, ImageObject, ItemAvailability, Offer, Product, ProductGroup,
};

/// Request context attached to every transformed product.
#[derive(Debug, Clone, Copy)]
pub struct TransformOptions<'a> {
    /// URL of the page being rendered; its origin is used for product links.
    pub url: &'a Url,
    pub price_currency: &'a str,
}

/// Pure conversion of one catalog record into a canonical product.
///
/// Implementations must not perform IO and must be total over well-formed
/// input.
pub trait ProductTransform: Send + Sync {
    fn to_product(
        &self,
        product: &LegacyProduct,
        sku: &LegacySku,
        rank: usize,
        options: &TransformOptions<'_>,
    ) -> Product;
}

/// Default transform for legacy catalog records.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyProductTransform;

impl ProductTransform for LegacyProductTransform {
    fn to_product(
        &self,
        product: &LegacyProduct,
        sku: &LegacySku,
        rank: usize,
        options: &TransformOptions<'_>,
    ) -> Product {
        let sku_id = sku.item_id.clone().unwrap_or_default();
        let group_id = product.product_id.clone().unwrap_or_default();

        let offers: Vec<Offer> = sku
            .sellers
            .iter()
            .map(|seller| {
                let offer = &seller.commercial_offer;
                Offer {
                    seller: seller.seller_id.clone(),
                    seller_name: seller.seller_name.clone(),
                    price: offer.price,
                    list_price: offer.list_price,
                    availability: ItemAvailability::from_quantity(offer.available_quantity),
                    inventory_level: offer.available_quantity,
                }
            })
            .collect();

        let (low_price, high_price) = price_range(&offers);

        Product {
            kind: Product::KIND.to_string(),
            product_id: sku_id.clone(),
            sku: sku_id.clone(),
            name: sku.name_complete.clone().unwrap_or_else(|| sku.name.clone()),
            description: product.description.clone(),
            url: page_url(options.url, &product.link_text, Some(&sku_id)),
            brand: product.brand.clone().map(|name| Brand { name }),
            gtin: sku.ean.clone().filter(|ean| !ean.is_empty()),
            image: sku
                .images
                .iter()
                .map(|img| ImageObject {
                    url: img.image_url.clone(),
                    alternate_name: img.image_text.clone().or_else(|| img.image_label.clone()),
                })
                .collect(),
            position: rank,
            is_variant_of: ProductGroup {
                product_group_id: group_id,
                name: product.product_name.clone(),
                url: page_url(options.url, &product.link_text, None),
                model: product.product_reference.clone(),
            },
            offers: AggregateOffer {
                price_currency: options.price_currency.to_string(),
                high_price,
                low_price,
                offer_count: offers.len(),
                offers,
            },
        }
    }
}

/// Lowest and highest price among in-stock offers, falling back to all
/// offers when nothing is in stock.
fn price_range(offers: &[Offer]) -> (Option<f64>, Option<f64>) {
    let in_stock: Vec<f64> = offers
        .iter()
        .filter(|o| o.availability == ItemAvailability::InStock)
        .map(|o| o.price)
        .collect();
    let prices = if in_stock.is_empty() {
        offers.iter().map(|o| o.price).collect()
    } else {
        in_stock
    };

    let low = prices.iter().copied().reduce(f64::min);
    let high = prices.iter().copied().reduce(f64::max);
    (low, high)
}

fn page_url(base: &Url, link_text: &str, sku_id: Option<&str>) -> String {
    let mut url = base.clone();
    url.set_path(&format!("/{}/p", link_text.trim_matches('/')));
    url.set_query(None);
    url.set_fragment(None);
    if let Some(sku_id) = sku_id.filter(|id| !id.is_empty()) {
        url.query_pairs_mut().append_pair("skuId", sku_id);
    }
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::{CommercialOffer, LegacyImage, LegacySeller};

    fn seller(id: &str, price: f64, qty: u64) -> LegacySeller {
        LegacySeller {
            seller_id: Some(id.to_string()),
            seller_name: Some(format!("Seller {id}")),
            seller_default: id == "1",
            commercial_offer: CommercialOffer {
                price,
                list_price: price + 10.0,
                price_without_discount: price + 10.0,
                available_quantity: qty,
            },
        }
    }

    fn shirt() -> LegacyProduct {
        LegacyProduct {
            product_id: Some("10".to_string()),
            product_name: "Blue Shirt".to_string(),
            brand: Some("Acme".to_string()),
            link_text: "blue-shirt".to_string(),
            product_reference: Some("REF-10".to_string()),
            description: Some("A shirt".to_string()),
            items: vec![LegacySku {
                item_id: Some("100".to_string()),
                name: "M".to_string(),
                name_complete: Some("Blue Shirt M".to_string()),
                ean: Some("7890000000001".to_string()),
                images: vec![LegacyImage {
                    image_url: "https://img/1.jpg".to_string(),
                    image_text: Some("front".to_string()),
                    image_label: None,
                }],
                sellers: vec![seller("1", 79.9, 3), seller("2", 75.0, 0), seller("3", 89.0, 1)],
            }],
            ..LegacyProduct::default()
        }
    }

    fn page() -> Url {
        Url::parse("https://shop.example.com/red-shoes/p?utm=1#reviews").unwrap()
    }

    #[test]
    fn builds_canonical_product_from_first_sku() {
        let record = shirt();
        let url = page();
        let opts = TransformOptions {
            url: &url,
            price_currency: "BRL",
        };

        let p = LegacyProductTransform.to_product(&record, &record.items[0], 2, &opts);

        assert_eq!(p.kind, "Product");
        assert_eq!(p.product_id, "100");
        assert_eq!(p.sku, "100");
        assert_eq!(p.name, "Blue Shirt M");
        assert_eq!(p.position, 2);
        assert_eq!(p.url, "https://shop.example.com/blue-shirt/p?skuId=100");
        assert_eq!(p.brand, Some(Brand { name: "Acme".to_string() }));
        assert_eq!(p.gtin.as_deref(), Some("7890000000001"));
        assert_eq!(p.image[0].alternate_name.as_deref(), Some("front"));
        assert_eq!(p.is_variant_of.product_group_id, "10");
        assert_eq!(p.is_variant_of.url, "https://shop.example.com/blue-shirt/p");
        assert_eq!(p.is_variant_of.model.as_deref(), Some("REF-10"));
        assert!(p.is_available());
    }

    #[test]
    fn price_range_ignores_out_of_stock_sellers() {
        let record = shirt();
        let url = page();
        let opts = TransformOptions {
            url: &url,
            price_currency: "USD",
        };

        let p = LegacyProductTransform.to_product(&record, &record.items[0], 0, &opts);

        assert_eq!(p.offers.price_currency, "USD");
        assert_eq!(p.offers.offer_count, 3);
        assert_eq!(p.offers.low_price, Some(79.9));
        assert_eq!(p.offers.high_price, Some(89.0));
        assert_eq!(p.offers.offers[1].availability, ItemAvailability::OutOfStock);
    }

    #[test]
    fn sku_without_sellers_has_no_price() {
        let mut record = shirt();
        record.items[0].sellers.clear();
        let url = page();
        let opts = TransformOptions {
            url: &url,
            price_currency: "BRL",
        };

        let p = LegacyProductTransform.to_product(&record, &record.items[0], 0, &opts);

        assert_eq!(p.offers.offer_count, 0);
        assert_eq!(p.offers.low_price, None);
        assert_eq!(p.offers.high_price, None);
        assert!(!p.is_available());
    }

    #[test]
    fn serializes_with_schema_org_field_names() {
        let record = shirt();
        let url = page();
        let opts = TransformOptions {
            url: &url,
            price_currency: "BRL",
        };

        let p = LegacyProductTransform.to_product(&record, &record.items[0], 0, &opts);
        let json = serde_json::to_value(&p).unwrap();

        assert_eq!(json["@type"], "Product");
        assert_eq!(json["productID"], "100");
        assert_eq!(json["isVariantOf"]["productGroupID"], "10");
        assert_eq!(json["offers"]["priceCurrency"], "BRL");
        assert_eq!(json["offers"]["offers"][0]["availability"], "https://schema.org/InStock");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: low price never exceeds high price.
            #[test]
            fn low_price_never_exceeds_high_price(
                offers in prop::collection::vec((0.0f64..10_000.0, 0u64..5), 1..8)
            ) {
                let mut record = shirt();
                record.items[0].sellers = offers
                    .iter()
                    .enumerate()
                    .map(|(i, (price, qty))| seller(&i.to_string(), *price, *qty))
                    .collect();
                let url = page();
                let opts = TransformOptions { url: &url, price_currency: "BRL" };

                let p = LegacyProductTransform.to_product(&record, &record.items[0], 0, &opts);

                let low = p.offers.low_price.unwrap();
                let high = p.offers.high_price.unwrap();
                prop_assert!(low <= high);
                prop_assert_eq!(p.offers.offer_count, offers.len());
            }
        }
    }
}
