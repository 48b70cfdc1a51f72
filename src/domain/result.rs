//! Result type aliases
//!
//! [`Result`] is used for application plumbing; [`FetchResult`] is the
//! uniform return contract of the fetch pipeline.

use super::errors::{FetchError, ZipAddrError};

/// Result type alias for application operations
///
/// # Examples
///
/// ```
/// use zipaddr::domain::result::Result;
/// use zipaddr::domain::errors::ZipAddrError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ZipAddrError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ZipAddrError>;

/// Result of an address lookup: a success value or a typed [`FetchError`]
pub type FetchResult<T> = std::result::Result<T, FetchError>;
