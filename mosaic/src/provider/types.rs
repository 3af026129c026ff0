//! Provider types and traits

use crate::color::ColorHex;
use std::future::Future;
use thiserror::Error;

/// Errors that can occur while looking up a glyph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// HTTP request failed or returned a non-success status
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// Response body was not a usable glyph serialization
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Async source of glyph serializations.
///
/// Given a color, returns the vector image (SVG text) that stands in for a
/// tile of that color. The lookup is opaque: implementors may call a remote
/// service, read fixtures, or synthesize glyphs locally.
pub trait GlyphProvider: Send + Sync {
    /// Fetch the SVG text for `color`.
    fn fetch_glyph(
        &self,
        color: ColorHex,
    ) -> impl Future<Output = Result<String, ProviderError>> + Send;

    /// Returns the provider's name for logging and identification.
    fn name(&self) -> &str;
}
