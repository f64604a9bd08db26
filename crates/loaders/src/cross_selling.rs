//! Cross-selling taxonomy.
//!
//! Pages are configured with a public, kebab-case relationship name. It is
//! mapped onto the catalog client's endpoint key and dispatched explicitly.

use storefront_catalog::{CatalogClient, CatalogError, CrossSellingEndpoint, LegacyProduct};
use storefront_core::ProductId;

/// Public cross-selling relationship requested by a page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CrossSellingKind {
    WhoAlsoSaw,
    WhoAlsoBought,
    WhoBoughtAlsoBought,
    ShowTogether,
    /// Any other value, forwarded to the catalog as-is.
    Custom(String),
}

impl CrossSellingKind {
    pub const WHO_ALSO_SAW: &'static str = "who-also-saw";
    pub const WHO_ALSO_BOUGHT: &'static str = "who-also-bought";
    pub const WHO_BOUGHT_ALSO_BOUGHT: &'static str = "who-bought-also-bought";
    pub const SHOW_TOGETHER: &'static str = "show-together";

    /// Parse a configured value. Absent and empty values mean "not requested".
    pub fn parse(value: Option<&str>) -> Option<Self> {
        let value = value?;
        if value.is_empty() {
            return None;
        }
        Some(match value {
            "who-also-saw" => Self::WhoAlsoSaw,
            "who-also-bought" => Self::WhoAlsoBought,
            "who-bought-also-bought" => Self::WhoBoughtAlsoBought,
            "show-together" => Self::ShowTogether,
            other => Self::Custom(other.to_string()),
        })
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::WhoAlsoSaw => Self::WHO_ALSO_SAW,
            Self::WhoAlsoBought => Self::WHO_ALSO_BOUGHT,
            Self::WhoBoughtAlsoBought => Self::WHO_BOUGHT_ALSO_BOUGHT,
            Self::ShowTogether => Self::SHOW_TOGETHER,
            Self::Custom(value) => value,
        }
    }
}

impl core::fmt::Display for CrossSellingKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a public relationship onto the catalog endpoint key.
///
/// Unrecognized values pass through unchanged.
pub fn map_cross_selling(kind: &CrossSellingKind) -> CrossSellingEndpoint {
    match kind {
        CrossSellingKind::WhoAlsoSaw => CrossSellingEndpoint::WhoSawAlsoSaw,
        CrossSellingKind::WhoAlsoBought => CrossSellingEndpoint::WhoSawAlsoBought,
        CrossSellingKind::WhoBoughtAlsoBought => CrossSellingEndpoint::WhoBoughtAlsoBought,
        CrossSellingKind::ShowTogether => CrossSellingEndpoint::ShowTogether,
        CrossSellingKind::Custom(value) => CrossSellingEndpoint::Passthrough(value.clone()),
    }
}

/// Call the client operation that serves `endpoint`.
pub async fn fetch_cross_selling<C>(
    client: &C,
    endpoint: &CrossSellingEndpoint,
    product_id: &ProductId,
) -> Result<Vec<LegacyProduct>, CatalogError>
where
    C: CatalogClient + ?Sized,
{
    match endpoint {
        CrossSellingEndpoint::WhoSawAlsoSaw => client.who_saw_also_saw(product_id).await,
        CrossSellingEndpoint::WhoSawAlsoBought => client.who_saw_also_bought(product_id).await,
        CrossSellingEndpoint::WhoBoughtAlsoBought => {
            client.who_bought_also_bought(product_id).await
        }
        CrossSellingEndpoint::ShowTogether => client.show_together(product_id).await,
        CrossSellingEndpoint::Passthrough(key) => client.cross_selling(key, product_id).await,
    }
}
