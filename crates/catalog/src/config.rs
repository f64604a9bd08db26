//! Catalog connection settings.

use std::time::Duration;

use url::Url;

use crate::error::CatalogError;

pub const DEFAULT_ENVIRONMENT: &str = "vtexcommercestable";
pub const DEFAULT_CURRENCY: &str = "BRL";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for one catalog account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Store account name (first label of the catalog host).
    pub account: String,
    /// Hosting environment (second label of the catalog host).
    pub environment: String,
    /// Full base URL override; takes precedence over account/environment.
    pub base_url: Option<String>,
    /// Currency prices are quoted in unless the segment says otherwise.
    pub currency: String,
    /// Default sales channel (`sc` query parameter).
    pub sales_channel: Option<String>,
    pub timeout: Duration,
}

impl CatalogConfig {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            base_url: None,
            currency: DEFAULT_CURRENCY.to_string(),
            sales_channel: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the client at an explicit base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Load from process environment variables.
    ///
    /// - `VTEX_ACCOUNT` (required)
    /// - `VTEX_ENVIRONMENT`, `VTEX_BASE_URL`, `VTEX_CURRENCY`,
    ///   `VTEX_SALES_CHANNEL`, `VTEX_TIMEOUT_SECS` (optional)
    pub fn from_env() -> Result<Self, CatalogError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`CatalogConfig::from_env`] with an explicit variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, CatalogError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let account =
            non_empty("VTEX_ACCOUNT").ok_or_else(|| CatalogError::config("VTEX_ACCOUNT must be set"))?;

        let timeout = match non_empty("VTEX_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    CatalogError::config(format!("VTEX_TIMEOUT_SECS is not a number: {raw}"))
                })?;
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            account,
            environment: non_empty("VTEX_ENVIRONMENT")
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            base_url: non_empty("VTEX_BASE_URL"),
            currency: non_empty("VTEX_CURRENCY").unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            sales_channel: non_empty("VTEX_SALES_CHANNEL"),
            timeout,
        })
    }

    /// Base URL of the catalog API.
    pub fn base_url(&self) -> Result<Url, CatalogError> {
        let raw = match &self.base_url {
            Some(url) => url.clone(),
            None => format!("https://{}.{}.com.br", self.account, self.environment),
        };
        let url = Url::parse(&raw)?;
        if url.cannot_be_a_base() {
            return Err(CatalogError::config(format!("base url cannot be a base: {raw}")));
        }
        Ok(url)
    }
}
