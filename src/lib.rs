// zipaddr - Zip code to address lookup client
// Copyright (c) 2026 zipaddr Contributors
// Licensed under the MIT License

//! # zipaddr - Zip code to address lookup
//!
//! zipaddr looks up a Japanese postal code against a remote address service,
//! validates the response into a typed record, and formats it for output with
//! an optional kana rendering.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Response classification, formatting and the fetch pipeline
//! - [`adapters`] - HTTP transport abstraction and its reqwest implementation
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use zipaddr::adapters::http::ReqwestTransport;
//! use zipaddr::config::ApiConfig;
//! use zipaddr::core::fetch_and_format_address;
//! use zipaddr::domain::ZipCode;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = ReqwestTransport::new(&ApiConfig::default())?;
//!
//!     match fetch_and_format_address(&ZipCode::new("1000001"), true, &transport, None).await {
//!         Ok(address) => println!("{}", address.to_pretty_json()?),
//!         Err(e) => eprintln!("lookup failed ({}): {}", e.kind, e.message),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Lookups never panic on expected failures. The pipeline returns
//! [`domain::FetchResult`], whose error side is a [`domain::FetchError`]
//! tagged with one of five [`domain::FetchErrorKind`]s:
//!
//! | Kind            | Cause                                              |
//! |-----------------|----------------------------------------------------|
//! | `NetworkError`  | connection, timeout or undecodable body            |
//! | `NotFoundError` | HTTP 404                                           |
//! | `ClientError`   | other 4xx                                          |
//! | `ServerError`   | other non-200 status, or a malformed payload       |
//! | `ApiError`      | the service's `error_code` envelope                |
//!
//! ## Testing
//!
//! The transport is a trait, so tests can inject a double instead of the
//! network:
//!
//! ```rust
//! use async_trait::async_trait;
//! use serde_json::json;
//! use zipaddr::adapters::http::{Headers, HttpResponse, HttpTransport};
//! use zipaddr::core::fetch_and_format_address;
//! use zipaddr::domain::{FetchErrorKind, TransportError, ZipCode};
//!
//! struct NotFound;
//!
//! #[async_trait]
//! impl HttpTransport for NotFound {
//!     async fn post(
//!         &self,
//!         _url: &str,
//!         _body: &serde_json::Value,
//!         _headers: Option<&Headers>,
//!     ) -> Result<HttpResponse, TransportError> {
//!         Ok(HttpResponse::from_json(404, &json!({})))
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() {
//! let err = fetch_and_format_address(&ZipCode::new("0000000"), false, &NotFound, None)
//!     .await
//!     .unwrap_err();
//! assert_eq!(err.kind, FetchErrorKind::NotFoundError);
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
