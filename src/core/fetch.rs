//! Fetch pipeline
//!
//! Orchestrates transport, classification and formatting for one lookup.
//! Every expected failure is returned as a [`FetchError`]; nothing here
//! panics, prints or keeps state between calls.

use super::classify::{classify_status, parse_payload, HTTP_OK};
use super::format::format;
use crate::adapters::http::{Headers, HttpTransport};
use crate::domain::{
    AddressRecord, ApiResponse, FetchError, FetchResult, FormattedAddress, ZipCode,
    ADDRESS_API_PATH,
};
use serde_json::json;

/// Base URL of the public lookup service
pub const DEFAULT_BASE_URL: &str = "https://api.zipcode-jp.example";

/// Look up a zip code against [`DEFAULT_BASE_URL`] and format the result
///
/// # Arguments
///
/// * `zipcode` - Postal code to look up
/// * `include_kana` - Whether `full_address_kana` is emitted
/// * `transport` - HTTP transport used for the single POST
/// * `headers` - Optional extra request headers
///
/// # Example
///
/// ```no_run
/// use zipaddr::adapters::http::ReqwestTransport;
/// use zipaddr::config::ApiConfig;
/// use zipaddr::core::fetch::fetch_and_format_address;
/// use zipaddr::domain::ZipCode;
///
/// # async fn example() -> zipaddr::domain::Result<()> {
/// let transport = ReqwestTransport::new(&ApiConfig::default())?;
/// match fetch_and_format_address(&ZipCode::new("1000001"), true, &transport, None).await {
///     Ok(address) => println!("{}", address.full_address),
///     Err(e) => eprintln!("{} ({})", e.message, e.kind),
/// }
/// # Ok(())
/// # }
/// ```
pub async fn fetch_and_format_address<T>(
    zipcode: &ZipCode,
    include_kana: bool,
    transport: &T,
    headers: Option<&Headers>,
) -> FetchResult<FormattedAddress>
where
    T: HttpTransport + ?Sized,
{
    let record = lookup(DEFAULT_BASE_URL, zipcode, transport, headers).await?;
    Ok(format(&record, include_kana))
}

/// Address lookup client bound to one transport and base URL
///
/// The client is immutable; sharing it between concurrent lookups is safe as
/// long as the transport is.
///
/// # Example
///
/// ```no_run
/// use zipaddr::adapters::http::ReqwestTransport;
/// use zipaddr::config::ApiConfig;
/// use zipaddr::core::fetch::AddressClient;
/// use zipaddr::domain::ZipCode;
///
/// # async fn example() -> zipaddr::domain::Result<()> {
/// let config = ApiConfig::default();
/// let client = AddressClient::new(ReqwestTransport::new(&config)?, &config.base_url);
///
/// let formatted = client
///     .fetch_and_format_address(&ZipCode::new("1000001"), false, None)
///     .await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AddressClient<T> {
    transport: T,
    base_url: String,
}

impl<T: HttpTransport> AddressClient<T> {
    /// Create a client for the given base URL
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// Create a client for [`DEFAULT_BASE_URL`]
    pub fn with_default_base_url(transport: T) -> Self {
        Self::new(transport, DEFAULT_BASE_URL)
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the lookup endpoint
    pub fn endpoint_url(&self) -> String {
        endpoint_url(&self.base_url)
    }

    /// Fetch and parse the address record for a zip code
    pub async fn lookup(
        &self,
        zipcode: &ZipCode,
        headers: Option<&Headers>,
    ) -> FetchResult<AddressRecord> {
        lookup(&self.base_url, zipcode, &self.transport, headers).await
    }

    /// Fetch a zip code and format the result
    pub async fn fetch_and_format_address(
        &self,
        zipcode: &ZipCode,
        include_kana: bool,
        headers: Option<&Headers>,
    ) -> FetchResult<FormattedAddress> {
        let record = self.lookup(zipcode, headers).await?;
        Ok(format(&record, include_kana))
    }
}

fn endpoint_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), ADDRESS_API_PATH)
}

async fn lookup<T>(
    base_url: &str,
    zipcode: &ZipCode,
    transport: &T,
    headers: Option<&Headers>,
) -> FetchResult<AddressRecord>
where
    T: HttpTransport + ?Sized,
{
    let url = endpoint_url(base_url);
    let body = json!({ "zipcode": zipcode });

    let response = transport.post(&url, &body, headers).await?;

    let status = response.status_code();
    if status != HTTP_OK {
        return Err(FetchError::http_status(classify_status(status), status));
    }

    let payload = response.json()?;
    match parse_payload(&payload)? {
        ApiResponse::Address(record) => Ok(record),
        ApiResponse::Error(error) => Err(FetchError::api(error.message)),
    }
}
