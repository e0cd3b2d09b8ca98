//! Error and value types for snapshot encoding and share links.

use thiserror::Error;

/// Errors decoding a serialized canvas.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Empty image source")]
    Empty,

    #[error("Malformed data URL: {0}")]
    InvalidDataUrl(String),

    #[error("Unsupported image type '{0}' (expected image/png)")]
    UnsupportedMime(String),

    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Payload is not a PNG image")]
    NotPng,

    #[error("PNG decoding failed: {0}")]
    Png(String),
}

/// Errors building, parsing or publishing share links.
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("Invalid share URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Share URL has no '{0}' parameter")]
    MissingSource(String),

    #[error("Failed to encode canvas: {0}")]
    Encode(#[from] crate::draw::CanvasError),

    #[error("Clipboard operation failed: {0}")]
    Clipboard(String),
}

/// A share link produced from the current canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    /// Full URL, with the data URL percent-encoded into the query
    pub url: url::Url,
    /// The data URL carried by the link
    pub data_url: String,
}

impl ShareLink {
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl std::fmt::Display for ShareLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.url.as_str())
    }
}
