//! Domain error types
//!
//! Lookup failures are modelled as [`FetchError`] values carrying a
//! [`FetchErrorKind`]; they are returned, never raised. [`ZipAddrError`]
//! covers application plumbing such as configuration and logging setup.
//! None of these types expose third-party HTTP client types.

use std::fmt;
use thiserror::Error;

/// Classification of a failed address lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    /// The request never produced a usable response
    NetworkError,

    /// HTTP 404
    NotFoundError,

    /// Any other 4xx status
    ClientError,

    /// Any other non-200 status, or a malformed success payload
    ServerError,

    /// The service answered with its error envelope
    ApiError,
}

impl FetchErrorKind {
    /// All kinds, in declaration order
    pub const ALL: [FetchErrorKind; 5] = [
        FetchErrorKind::NetworkError,
        FetchErrorKind::NotFoundError,
        FetchErrorKind::ClientError,
        FetchErrorKind::ServerError,
        FetchErrorKind::ApiError,
    ];

    /// Stable identifier used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::NetworkError => "network_error",
            FetchErrorKind::NotFoundError => "not_found_error",
            FetchErrorKind::ClientError => "client_error",
            FetchErrorKind::ServerError => "server_error",
            FetchErrorKind::ApiError => "api_error",
        }
    }
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed address lookup
///
/// Constructed at exactly one failure point in the fetch pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    /// What went wrong
    pub kind: FetchErrorKind,

    /// Human readable detail
    pub message: String,
}

impl FetchError {
    /// Creates a new fetch error
    pub fn new(kind: FetchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Network-level failure
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::NetworkError, message)
    }

    /// Failure classified from a non-200 HTTP status
    pub fn http_status(kind: FetchErrorKind, status: u16) -> Self {
        Self::new(kind, format!("HTTP {status}"))
    }

    /// Malformed or incomplete success payload
    pub fn server(message: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::ServerError, message)
    }

    /// Service-reported error
    pub fn api(message: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::ApiError, message)
    }
}

/// Transport-level failures
///
/// This is the only failure category that crosses the transport boundary;
/// HTTP error statuses are returned as normal responses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connection refused, DNS failure and similar
    #[error("Failed to connect: {0}")]
    Connect(String),

    /// The request did not complete in time
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Any other failure while sending or reading the response
    #[error("Request failed: {0}")]
    Request(String),

    /// The response body could not be decoded as JSON
    #[error("Failed to decode response body: {0}")]
    Decode(String),
}

impl From<TransportError> for FetchError {
    fn from(err: TransportError) -> Self {
        FetchError::network(err.to_string())
    }
}

/// Structural problems in a decoded payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// The body was not a JSON object
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// A required key was absent
    #[error("missing field '{0}'")]
    MissingField(&'static str),

    /// A key held a value that cannot be coerced
    #[error("field '{field}' has unexpected type {found}")]
    InvalidType {
        field: &'static str,
        found: &'static str,
    },
}

impl From<PayloadError> for FetchError {
    fn from(err: PayloadError) -> Self {
        FetchError::server(format!("unexpected response format: {err}"))
    }
}

/// Argument validation failure from a smart constructor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {message}")]
pub struct ValidationError {
    /// Name of the rejected argument
    pub field: String,

    /// Why it was rejected
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Main application error type
///
/// Used for configuration, logging and client construction. Lookup outcomes
/// never use this type.
#[derive(Debug, Error)]
pub enum ZipAddrError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Argument validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// HTTP client construction errors
    #[error("Transport error: {0}")]
    Transport(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ZipAddrError {
    fn from(err: std::io::Error) -> Self {
        ZipAddrError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ZipAddrError {
    fn from(err: serde_json::Error) -> Self {
        ZipAddrError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ZipAddrError {
    fn from(err: toml::de::Error) -> Self {
        ZipAddrError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::http_status(FetchErrorKind::NotFoundError, 404);
        assert_eq!(err.message, "HTTP 404");
        assert_eq!(err.to_string(), "not_found_error: HTTP 404");
    }

    #[test]
    fn test_transport_error_becomes_network_error() {
        let err: FetchError = TransportError::Connect("connection refused".to_string()).into();
        assert_eq!(err.kind, FetchErrorKind::NetworkError);
        assert!(err.message.contains("connection refused"));
    }

    #[test]
    fn test_payload_error_becomes_server_error() {
        let err: FetchError = PayloadError::MissingField("town_kana").into();
        assert_eq!(err.kind, FetchErrorKind::ServerError);
        assert!(err.message.contains("town_kana"));
    }

    #[test]
    fn test_validation_error_conversion() {
        let err: ZipAddrError = ValidationError::new("name", "must not be empty").into();
        assert!(matches!(err, ZipAddrError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation error: invalid name: must not be empty"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: ZipAddrError = io_err.into();
        assert!(matches!(err, ZipAddrError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: ZipAddrError = json_err.into();
        assert!(matches!(err, ZipAddrError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: ZipAddrError = toml_err.into();
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_kind_identifiers_are_distinct() {
        let mut names: Vec<_> = FetchErrorKind::ALL.iter().map(|k| k.as_str()).collect();
        names.dedup();
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn test_errors_implement_std_error() {
        let _: &dyn std::error::Error = &FetchError::api("bad request");
        let _: &dyn std::error::Error = &ZipAddrError::Configuration("x".to_string());
    }
}
