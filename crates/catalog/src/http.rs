//! reqwest-backed [`CatalogClient`].

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use storefront_core::ProductId;

use crate::client::CatalogClient;
use crate::config::CatalogConfig;
use crate::endpoint::CrossSellingEndpoint;
use crate::error::CatalogError;
use crate::segment::Segment;
use crate::types::{LegacyProduct, PageType};

const PAGE_TYPE_PATH: [&str; 4] = ["api", "catalog_system", "pub", "portal"];
const CROSS_SELLING_PATH: [&str; 5] = ["api", "catalog_system", "pub", "products", "crossselling"];

/// HTTP client for the legacy catalog system.
///
/// Cheap to clone: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct VtexCatalogClient {
    http: reqwest::Client,
    base_url: Url,
    currency: String,
    sales_channel: Option<String>,
}

impl VtexCatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url()?,
            currency: config.currency.clone(),
            sales_channel: config.sales_channel.clone(),
        })
    }

    /// A copy of this client scoped to a visitor's segment.
    ///
    /// Segment values override the configured sales channel and currency.
    pub fn with_segment(&self, segment: &Segment) -> Self {
        let mut scoped = self.clone();
        if let Some(channel) = &segment.channel {
            scoped.sales_channel = Some(channel.clone());
        }
        if let Some(currency) = &segment.currency_code {
            scoped.currency = currency.clone();
        }
        scoped
    }

    pub fn sales_channel(&self) -> Option<&str> {
        self.sales_channel.as_deref()
    }

    pub(crate) fn endpoint_url<'a, I>(&self, segments: I) -> Result<Url, CatalogError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let segments: Vec<&str> = segments.into_iter().filter(|s| !s.is_empty()).collect();
        if let Some(dot) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(CatalogError::DotSegment((*dot).to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CatalogError::config("base url cannot be a base"))?
            .pop_if_empty()
            .extend(segments);
        if let Some(sc) = &self.sales_channel {
            url.query_pairs_mut().append_pair("sc", sc);
        }
        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response, CatalogError> {
        tracing::debug!(%url, "catalog request");
        let response = self.http.get(url).send().await?;
        Ok(response)
    }

    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, CatalogError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(%url, status = status.as_u16(), "catalog request failed");
        Err(CatalogError::Status {
            status: status.as_u16(),
            url,
            body,
        })
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, CatalogError> {
        Ok(Self::ensure_success(response).await?.json().await?)
    }

    async fn fetch_cross_selling(
        &self,
        endpoint: &CrossSellingEndpoint,
        product_id: &ProductId,
    ) -> Result<Vec<LegacyProduct>, CatalogError> {
        let url = self.endpoint_url(
            CROSS_SELLING_PATH
                .into_iter()
                .chain([endpoint.path_segment(), product_id.as_str()]),
        )?;
        let response = self.get(url).await?;
        Self::read_json(response).await
    }
}

#[async_trait::async_trait]
impl CatalogClient for VtexCatalogClient {
    async fn page_type(&self, slug: &str) -> Result<Option<PageType>, CatalogError> {
        let url = self.endpoint_url(
            PAGE_TYPE_PATH
                .into_iter()
                .chain(["pagetype"])
                .chain(slug.split('/')),
        )?;
        let response = self.get(url).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        // An unmatched slug may also come back as 200 with no body.
        let body = Self::ensure_success(response).await?.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn who_saw_also_saw(
        &self,
        product_id: &ProductId,
    ) -> Result<Vec<LegacyProduct>, CatalogError> {
        self.fetch_cross_selling(&CrossSellingEndpoint::WhoSawAlsoSaw, product_id)
            .await
    }

    async fn who_saw_also_bought(
        &self,
        product_id: &ProductId,
    ) -> Result<Vec<LegacyProduct>, CatalogError> {
        self.fetch_cross_selling(&CrossSellingEndpoint::WhoSawAlsoBought, product_id)
            .await
    }

    async fn who_bought_also_bought(
        &self,
        product_id: &ProductId,
    ) -> Result<Vec<LegacyProduct>, CatalogError> {
        self.fetch_cross_selling(&CrossSellingEndpoint::WhoBoughtAlsoBought, product_id)
            .await
    }

    async fn show_together(
        &self,
        product_id: &ProductId,
    ) -> Result<Vec<LegacyProduct>, CatalogError> {
        self.fetch_cross_selling(&CrossSellingEndpoint::ShowTogether, product_id)
            .await
    }

    async fn cross_selling(
        &self,
        key: &str,
        product_id: &ProductId,
    ) -> Result<Vec<LegacyProduct>, CatalogError> {
        self.fetch_cross_selling(&CrossSellingEndpoint::Passthrough(key.to_string()), product_id)
            .await
    }

    fn currency(&self) -> &str {
        &self.currency
    }
}
