//! Core lookup logic
//!
//! - [`classify`] - Status classification and payload parsing
//! - [`format`] - Projection of a record into the output shape
//! - [`fetch`] - The fetch-validate-format pipeline

pub mod classify;
pub mod fetch;
pub mod format;

pub use classify::{classify_status, parse_payload};
pub use fetch::{fetch_and_format_address, AddressClient, DEFAULT_BASE_URL};
pub use format::AddressFormatter;
