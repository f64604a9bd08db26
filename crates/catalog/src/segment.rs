//! Session segment: per-visitor commercial context.
//!
//! The storefront stores it in the `vtex_segment` cookie as base64-encoded
//! JSON. Only the fields that scope catalog queries are decoded.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::de::opt_string_or_number;

pub const SEGMENT_COOKIE: &str = "vtex_segment";

const SEGMENT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Sales channel.
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub channel: Option<String>,
    #[serde(default)]
    pub currency_code: Option<String>,
    #[serde(default)]
    pub culture_info: Option<String>,
}

#[derive(Debug, Error)]
pub enum SegmentError {
    #[error("segment is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("segment is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

impl Segment {
    /// Decode a raw cookie value.
    pub fn decode(raw: &str) -> Result<Self, SegmentError> {
        let bytes = SEGMENT_ENGINE.decode(raw.trim())?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn encode(&self) -> Result<String, SegmentError> {
        let json = serde_json::to_vec(self)?;
        Ok(SEGMENT_ENGINE.encode(json))
    }

    /// Find and decode the segment cookie in a `Cookie` header value.
    ///
    /// Returns `None` when the cookie is absent or cannot be decoded.
    pub fn from_cookie_header(header: &str) -> Option<Self> {
        let raw = header.split(';').find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == SEGMENT_COOKIE).then_some(value)
        })?;

        match Self::decode(raw) {
            Ok(segment) => Some(segment),
            Err(err) => {
                tracing::debug!("ignoring undecodable segment cookie: {err}");
                None
            }
        }
    }
}
