//! Glyph provider for the color-rendering HTTP service.
//!
//! The service answers `GET {base}/color/{hex}` with an SVG document whose
//! shape is filled with the requested color.

use super::http::AsyncHttpClient;
use super::types::{GlyphProvider, ProviderError};
use crate::color::ColorHex;

/// Default base URL of the color service.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8765";

/// Glyph provider that asks a color-rendering service over HTTP.
pub struct ColorServiceProvider<C: AsyncHttpClient> {
    http_client: C,
    base_url: String,
}

impl<C: AsyncHttpClient> ColorServiceProvider<C> {
    /// Creates a new provider for the service at `base_url`.
    ///
    /// A trailing slash on the base URL is ignored.
    pub fn new(http_client: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http_client,
            base_url,
        }
    }

    /// Base URL requests are made against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lookup URL for a color.
    pub fn glyph_url(&self, color: ColorHex) -> String {
        format!("{}/color/{}", self.base_url, color)
    }
}

impl<C: AsyncHttpClient> GlyphProvider for ColorServiceProvider<C> {
    async fn fetch_glyph(&self, color: ColorHex) -> Result<String, ProviderError> {
        let url = self.glyph_url(color);
        let body = self.http_client.get(&url).await?;

        String::from_utf8(body).map_err(|e| {
            ProviderError::InvalidResponse(format!("glyph for {} is not UTF-8: {}", color, e))
        })
    }

    fn name(&self) -> &str {
        "color-service"
    }
}
