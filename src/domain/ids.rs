//! Domain identifier types
//!
//! This module provides the newtype wrapper for postal codes. The wrapper
//! exists for type safety only: a `ZipCode` cannot be passed where an
//! arbitrary `String` is expected and vice versa.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Postal code newtype wrapper
///
/// Represents a Japanese postal code as supplied by the user. No digit-format
/// validation is performed; the lookup service is the authority on whether a
/// code exists.
///
/// # Examples
///
/// ```
/// use zipaddr::domain::ids::ZipCode;
///
/// let zipcode = ZipCode::new("1000001");
/// assert_eq!(zipcode.as_str(), "1000001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZipCode(String);

impl ZipCode {
    /// Creates a new ZipCode from user input
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the zip code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ZipCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl AsRef<str> for ZipCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for ZipCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}
