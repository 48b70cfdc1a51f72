//! Domain models and types for zipaddr.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`ZipCode`])
//! - **Decoded service values** ([`AddressRecord`], [`ApiErrorPayload`], [`ApiResponse`])
//! - **Output projection** ([`FormattedAddress`])
//! - **Error types** ([`FetchError`], [`FetchErrorKind`], [`ZipAddrError`])
//! - **Result type aliases** ([`Result`], [`FetchResult`])
//!
//! # Type Safety
//!
//! Postal codes are wrapped so that arbitrary strings cannot be passed where a
//! zip code is expected:
//!
//! ```rust
//! use zipaddr::domain::ZipCode;
//!
//! let zipcode = ZipCode::new("1000001");
//! // let wrong: String = zipcode;  // Compile error!
//! assert_eq!(zipcode.as_str(), "1000001");
//! ```
//!
//! # Error Handling
//!
//! Expected lookup failures are values, not panics:
//!
//! ```rust
//! use zipaddr::domain::{FetchError, FetchErrorKind, FetchResult};
//!
//! fn lookup() -> FetchResult<String> {
//!     Err(FetchError::http_status(FetchErrorKind::NotFoundError, 404))
//! }
//!
//! let err = lookup().unwrap_err();
//! assert_eq!(err.kind, FetchErrorKind::NotFoundError);
//! assert_eq!(err.message, "HTTP 404");
//! ```

pub mod address;
pub mod errors;
pub mod formatted;
pub mod ids;
pub mod result;

// Re-export commonly used types for convenience
pub use address::{
    AddressRecord, AddressRecordBuilder, ApiErrorPayload, ApiResponse, ADDRESS_API_PATH,
};
pub use errors::{
    FetchError, FetchErrorKind, PayloadError, TransportError, ValidationError, ZipAddrError,
};
pub use formatted::FormattedAddress;
pub use ids::ZipCode;
pub use result::{FetchResult, Result};
