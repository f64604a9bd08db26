use thiserror::Error;

/// Failure talking to (or configuring) the remote catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport failure or undecodable response body.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("catalog returned {status} for {url}: {body}")]
    Status { status: u16, url: String, body: String },

    /// A response body was not the expected JSON.
    #[error("undecodable catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A path segment would be collapsed by URL normalization (`.` / `..`).
    #[error("path segment {0:?} cannot be addressed")]
    DotSegment(String),

    /// A request URL could not be built.
    #[error("invalid catalog url: {0}")]
    Url(#[from] url::ParseError),

    /// Missing or malformed configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
