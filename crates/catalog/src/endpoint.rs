//! Cross-selling endpoint keys exposed by the catalog client.

/// Which cross-selling relationship to fetch.
///
/// The four named variants map onto dedicated client operations.
/// `Passthrough` carries a caller-supplied key verbatim so new relationships
/// published by the catalog can be reached without a code change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CrossSellingEndpoint {
    WhoSawAlsoSaw,
    WhoSawAlsoBought,
    WhoBoughtAlsoBought,
    ShowTogether,
    Passthrough(String),
}

impl CrossSellingEndpoint {
    /// Client-side key of this endpoint (e.g. `whoSawAlsoSaw`).
    pub fn as_str(&self) -> &str {
        match self {
            Self::WhoSawAlsoSaw => "whoSawAlsoSaw",
            Self::WhoSawAlsoBought => "whoSawAlsoBought",
            Self::WhoBoughtAlsoBought => "whoBoughtAlsoBought",
            Self::ShowTogether => "showTogether",
            Self::Passthrough(key) => key,
        }
    }

    /// Path segment used by the catalog's REST route for this endpoint.
    pub fn path_segment(&self) -> &str {
        match self {
            Self::WhoSawAlsoSaw => "whosawalsosaw",
            Self::WhoSawAlsoBought => "whosawalsobought",
            Self::WhoBoughtAlsoBought => "whoboughtalsobought",
            Self::ShowTogether => "showtogether",
            Self::Passthrough(key) => key,
        }
    }
}

impl core::fmt::Display for CrossSellingEndpoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
