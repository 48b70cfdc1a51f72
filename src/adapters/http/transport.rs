//! HTTP transport trait definition
//!
//! This module defines the `HttpTransport` trait that abstracts the HTTP
//! library used to reach the lookup service. The fetch pipeline only depends
//! on this trait, so a test double can be injected in place of the network.

use crate::domain::TransportError;
use async_trait::async_trait;
use std::collections::HashMap;

/// Extra request headers, by name
pub type Headers = HashMap<String, String>;

/// A response read back from the transport
///
/// Any status code is a valid response; classifying 4xx/5xx is the caller's
/// job. The body is kept as raw bytes and decoded on demand so the transport
/// stays ignorant of the address domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    status: u16,
    body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a response from a status code and raw body
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Creates a response whose body is the given JSON value
    pub fn from_json(status: u16, body: &serde_json::Value) -> Self {
        Self::new(status, body.to_string())
    }

    /// HTTP status code
    pub fn status_code(&self) -> u16 {
        self.status
    }

    /// Raw response body
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Decodes the body into an untyped JSON value
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Decode`] if the body is not valid JSON
    pub fn json(&self) -> Result<serde_json::Value, TransportError> {
        serde_json::from_slice(&self.body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

/// Trait for HTTP transports
///
/// Implementations must be safe to share between concurrent callers.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use zipaddr::adapters::http::{Headers, HttpResponse, HttpTransport};
/// use zipaddr::domain::TransportError;
///
/// struct Canned(HttpResponse);
///
/// #[async_trait]
/// impl HttpTransport for Canned {
///     async fn post(
///         &self,
///         _url: &str,
///         _body: &serde_json::Value,
///         _headers: Option<&Headers>,
///     ) -> Result<HttpResponse, TransportError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a POST with a JSON body
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute URL to post to
    /// * `body` - JSON request body
    /// * `headers` - Optional extra headers for this request
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] only when no response could be obtained
    /// (connection refused, timeout, DNS failure). HTTP error statuses are
    /// returned as `Ok` responses.
    async fn post(
        &self,
        url: &str,
        body: &serde_json::Value,
        headers: Option<&Headers>,
    ) -> Result<HttpResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_json_decodes_body() {
        let response = HttpResponse::from_json(200, &json!({"zipcode": "1000001"}));
        assert_eq!(response.status_code(), 200);
        assert_eq!(response.json().unwrap()["zipcode"], "1000001");
    }

    #[test]
    fn test_response_json_rejects_malformed_body() {
        let response = HttpResponse::new(200, "<html>bad gateway</html>");
        let err = response.json().unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));
    }

    #[test]
    fn test_response_keeps_raw_body() {
        let response = HttpResponse::new(503, "unavailable");
        assert_eq!(response.body(), b"unavailable");
    }
}
