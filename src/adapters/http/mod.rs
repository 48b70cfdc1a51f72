//! HTTP transport adapter
//!
//! This module provides the transport abstraction used by the fetch pipeline
//! and its production implementation on top of `reqwest`.

pub mod client;
pub mod transport;

pub use client::ReqwestTransport;
pub use transport::{Headers, HttpResponse, HttpTransport};
