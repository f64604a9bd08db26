//! Loader contract between the host and page data loaders.

use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use storefront_catalog::Segment;

use crate::error::LoaderError;

/// What the host knows about the page request being served.
#[derive(Debug, Clone)]
pub struct LoaderRequest {
    /// Full URL of the inbound request.
    pub url: Url,
    /// `:slug` route parameter.
    pub slug: String,
    /// Visitor segment resolved by the host (defaults when absent).
    pub segment: Segment,
}

/// Documentation for one configurable prop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Registration metadata the host exposes for a loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoaderInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub props: Vec<PropInfo>,
}

/// A named, documented page data loader.
///
/// `Ok(None)` means the loader does not apply to this request; the host
/// renders it as an empty section rather than an error.
#[async_trait::async_trait]
pub trait Loader: Send + Sync {
    type Props: DeserializeOwned + Send + Sync + 'static;
    type Output: Serialize + Send;

    fn info(&self) -> LoaderInfo;

    async fn load(
        &self,
        request: &LoaderRequest,
        props: Self::Props,
    ) -> Result<Option<Self::Output>, LoaderError>;
}
