//! reqwest-backed transport
//!
//! The production [`HttpTransport`]. A single `reqwest::Client` is built from
//! [`ApiConfig`] and reused for every request, so connections are pooled and
//! the transport can be shared between concurrent lookups.

use super::transport::{Headers, HttpResponse, HttpTransport};
use crate::config::ApiConfig;
use crate::domain::{Result, TransportError, ZipAddrError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder};
use std::time::{Duration, Instant};

/// HTTP transport over a pooled `reqwest::Client`
///
/// # Example
///
/// ```no_run
/// use zipaddr::adapters::http::ReqwestTransport;
/// use zipaddr::config::ApiConfig;
///
/// # fn example() -> zipaddr::domain::Result<()> {
/// let transport = ReqwestTransport::new(&ApiConfig::default())?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build the transport from API configuration
    ///
    /// Headers listed in `config.headers` are sent with every request.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured header is not a valid HTTP header or
    /// if the underlying client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .user_agent(concat!("zipaddr/", env!("CARGO_PKG_VERSION")))
            .default_headers(header_map(&config.headers)?)
            .build()
            .map_err(|e| ZipAddrError::Transport(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post(
        &self,
        url: &str,
        body: &serde_json::Value,
        headers: Option<&Headers>,
    ) -> std::result::Result<HttpResponse, TransportError> {
        let mut request = self.client.post(url).json(body);
        if let Some(headers) = headers {
            for (name, value) in headers {
                request = request.header(name.as_str(), value.as_str());
            }
        }

        let started = Instant::now();
        let resp = request.send().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "POST failed");
            map_reqwest_error(e)
        })?;

        let status = resp.status().as_u16();
        let bytes = resp.bytes().await.map_err(map_reqwest_error)?;

        tracing::debug!(
            url = %url,
            status = status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            body_bytes = bytes.len(),
            "POST completed"
        );

        Ok(HttpResponse::new(status, bytes.to_vec()))
    }
}

/// Convert configured headers into a reqwest header map
fn header_map(headers: &Headers) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            ZipAddrError::Configuration(format!("Invalid header name '{name}': {e}"))
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| {
            ZipAddrError::Configuration(format!("Invalid value for header '{name}': {e}"))
        })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(err.to_string())
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else {
        TransportError::Request(err.to_string())
    }
}
