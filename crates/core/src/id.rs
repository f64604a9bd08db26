//! Strongly-typed identifiers used across the storefront crates.
//!
//! Catalog identifiers are opaque strings owned by the remote catalog; the
//! only local invariant is that they are non-empty after trimming.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Identifier of a catalog product (the parent of one or more SKUs).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

/// URL path segment identifying a catalog entity (category, product, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

macro_rules! impl_string_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create an identifier, rejecting empty or whitespace-only input.
            pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(CoreError::invalid_id(concat!($name, " cannot be empty")));
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $t {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

impl_string_newtype!(ProductId, "ProductId");
impl_string_newtype!(Slug, "Slug");

impl Slug {
    /// Path of the product-detail page for this slug (`{slug}/p`).
    pub fn product_path(&self) -> String {
        format!("{}/p", self.0.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_rejects_blank_input() {
        assert!(ProductId::new("").is_err());
        assert!(ProductId::new("   ").is_err());
    }

    #[test]
    fn product_id_trims_surrounding_whitespace() {
        let id = ProductId::new(" 123 ").unwrap();
        assert_eq!(id.as_str(), "123");
        assert_eq!(id.to_string(), "123");
    }

    #[test]
    fn parse_reports_which_identifier_failed() {
        let err = "".parse::<Slug>().unwrap_err();
        assert_eq!(err, CoreError::InvalidId("Slug cannot be empty".to_string()));
    }

    #[test]
    fn slug_product_path_appends_marker() {
        let slug = Slug::new("blue-shirt").unwrap();
        assert_eq!(slug.product_path(), "blue-shirt/p");

        let slug = Slug::new("blue-shirt/").unwrap();
        assert_eq!(slug.product_path(), "blue-shirt/p");
    }

    #[test]
    fn identifiers_serialize_transparently() {
        let id = ProductId::new("42").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
    }
}
