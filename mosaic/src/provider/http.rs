//! HTTP client abstraction for testability

use super::types::ProviderError;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Trait for asynchronous HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait AsyncHttpClient: Send + Sync {
    /// Performs an async HTTP GET request.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    ///
    /// # Returns
    ///
    /// The response body as bytes or an error.
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, ProviderError>> + Send;
}

/// User-Agent sent with every glyph request.
const DEFAULT_USER_AGENT: &str = concat!("mosaic/", env!("CARGO_PKG_VERSION"));

/// Async HTTP client implementation using reqwest.
#[derive(Clone)]
pub struct AsyncReqwestClient {
    client: reqwest::Client,
}

impl AsyncReqwestClient {
    /// Creates a new AsyncReqwestClient with default configuration.
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a new AsyncReqwestClient with custom timeout.
    ///
    /// A row of glyphs is requested at once, so the pool keeps enough idle
    /// connections around for a full row.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(DEFAULT_USER_AGENT)
            .pool_max_idle_per_host(64)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .build()
            .map_err(|e| {
                ProviderError::HttpError(format!("Failed to create async HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

impl AsyncHttpClient for AsyncReqwestClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
        trace!(url = url, "HTTP GET request starting");

        let response = match self.client.get(url).send().await {
            Ok(resp) => {
                debug!(
                    url = url,
                    status = resp.status().as_u16(),
                    "HTTP response received"
                );
                resp
            }
            Err(e) => {
                warn!(
                    url = url,
                    error = %e,
                    is_connect = e.is_connect(),
                    is_timeout = e.is_timeout(),
                    "HTTP request failed"
                );
                return Err(ProviderError::HttpError(format!("Request failed: {}", e)));
            }
        };

        // Check HTTP status
        if !response.status().is_success() {
            warn!(
                url = url,
                status = response.status().as_u16(),
                "HTTP error status"
            );
            return Err(ProviderError::HttpError(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        match response.bytes().await {
            Ok(bytes) => {
                trace!(url = url, bytes = bytes.len(), "HTTP response body read");
                Ok(bytes.to_vec())
            }
            Err(e) => {
                warn!(url = url, error = %e, "Failed to read response body");
                Err(ProviderError::HttpError(format!(
                    "Failed to read response: {}",
                    e
                )))
            }
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::Arc;
    use std::thread;

    /// Mock async HTTP client for testing.
    ///
    /// Returns the same response for every request and records requested URLs.
    #[derive(Clone)]
    pub struct MockAsyncHttpClient {
        pub response: Result<Vec<u8>, ProviderError>,
        pub requests: Arc<Mutex<Vec<String>>>,
    }

    impl MockAsyncHttpClient {
        pub fn new(response: Result<Vec<u8>, ProviderError>) -> Self {
            Self {
                response,
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl AsyncHttpClient for MockAsyncHttpClient {
        async fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
            self.requests.lock().push(url.to_string());
            self.response.clone()
        }
    }

    #[tokio::test]
    async fn test_mock_async_client_success() {
        let mock = MockAsyncHttpClient::new(Ok(vec![1, 2, 3, 4]));

        let result = mock.get("http://example.com").await;
        assert_eq!(result.unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(*mock.requests.lock(), vec!["http://example.com".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_async_client_error() {
        let mock = MockAsyncHttpClient::new(Err(ProviderError::HttpError(
            "Test error".to_string(),
        )));

        let result = mock.get("http://example.com").await;
        assert!(result.is_err());
    }

    #[test]
    fn test_reqwest_client_builds() {
        assert!(AsyncReqwestClient::with_timeout(5).is_ok());
    }

    /// Answer a single request on a local port with a canned response.
    ///
    /// Returns a glyph URL pointing at the listener.
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request);
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{}/color/000000", addr)
    }

    #[tokio::test]
    async fn test_reqwest_client_returns_body() {
        let url =
            serve_once("HTTP/1.1 200 OK\r\nContent-Length: 6\r\nConnection: close\r\n\r\n<svg/>");
        let client = AsyncReqwestClient::with_timeout(5).unwrap();

        assert_eq!(client.get(&url).await.unwrap(), b"<svg/>".to_vec());
    }

    #[tokio::test]
    async fn test_reqwest_client_maps_error_status() {
        let url = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        let client = AsyncReqwestClient::with_timeout(5).unwrap();

        let result = client.get(&url).await;
        assert!(
            matches!(result, Err(ProviderError::HttpError(ref msg)) if msg.contains("503")),
            "unexpected result: {:?}",
            result
        );
    }

    #[tokio::test]
    async fn test_reqwest_client_maps_truncated_body() {
        // Connection closes after 4 of the promised 64 body bytes
        let url =
            serve_once("HTTP/1.1 200 OK\r\nContent-Length: 64\r\nConnection: close\r\n\r\n<svg");
        let client = AsyncReqwestClient::with_timeout(5).unwrap();

        let err = client.get(&url).await.unwrap_err();
        assert!(
            matches!(err, ProviderError::HttpError(ref msg) if msg.starts_with("Failed to read")),
            "unexpected error: {:?}",
            err
        );
    }
}
