//! External system integrations for zipaddr.
//!
//! - [`http`] - HTTP transport used to reach the lookup service
//!
//! # Design Pattern
//!
//! Adapters isolate third-party crates behind traits so the core can be
//! tested with in-memory implementations:
//!
//! ```rust,no_run
//! use zipaddr::adapters::http::ReqwestTransport;
//! use zipaddr::config::ApiConfig;
//! use zipaddr::core::AddressClient;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ApiConfig {
//!     base_url: "http://localhost:8080".to_string(),
//!     timeout_seconds: 5,
//!     ..Default::default()
//! };
//!
//! let client = AddressClient::new(ReqwestTransport::new(&config)?, &config.base_url);
//! # Ok(())
//! # }
//! ```

pub mod http;
