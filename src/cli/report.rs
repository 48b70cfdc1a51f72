//! User-facing messages and exit codes
//!
//! Maps each lookup failure kind to a distinct message and process exit code.

use crate::domain::{FetchError, FetchErrorKind};

/// Lookup succeeded
pub const EXIT_SUCCESS: i32 = 0;

/// Unexpected failure outside the lookup itself
pub const EXIT_FATAL: i32 = 1;

/// Configuration or argument error
pub const EXIT_CONFIG: i32 = 2;

/// Message prefix shown for each failure kind
pub fn label(kind: FetchErrorKind) -> &'static str {
    match kind {
        FetchErrorKind::NetworkError => "Network error",
        FetchErrorKind::NotFoundError => "Zip code not found",
        FetchErrorKind::ClientError => "Request error",
        FetchErrorKind::ServerError => "Server error",
        FetchErrorKind::ApiError => "API error",
    }
}

/// Human readable description of a failed lookup
pub fn describe(error: &FetchError) -> String {
    format!("{}: {}", label(error.kind), error.message)
}

/// Process exit code for a failure kind
pub fn exit_code(kind: FetchErrorKind) -> i32 {
    match kind {
        FetchErrorKind::NetworkError => 3,
        FetchErrorKind::NotFoundError => 4,
        FetchErrorKind::ClientError => 5,
        FetchErrorKind::ServerError => 6,
        FetchErrorKind::ApiError => 7,
    }
}
