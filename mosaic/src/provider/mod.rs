//! Glyph provider abstraction
//!
//! This module provides the trait and HTTP implementation for looking up the
//! glyph that stands in for a tile color.
//!
//! ```ignore
//! use mosaic::provider::{AsyncReqwestClient, ColorServiceProvider};
//!
//! let http_client = AsyncReqwestClient::new()?;
//! let provider = ColorServiceProvider::new(http_client, "http://localhost:8765");
//! let svg = provider.fetch_glyph("0c2238".parse()?).await?;
//! ```

mod color_service;
mod http;
mod local;
mod types;

pub use color_service::{ColorServiceProvider, DEFAULT_SERVICE_URL};
pub use http::{AsyncHttpClient, AsyncReqwestClient, DEFAULT_TIMEOUT_SECS};
pub use local::LocalGlyphProvider;
pub use types::{GlyphProvider, ProviderError};

#[cfg(test)]
pub use http::tests::MockAsyncHttpClient;
