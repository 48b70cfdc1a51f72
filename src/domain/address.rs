//! Address domain models
//!
//! This module defines the values decoded from the lookup service: the
//! address record returned on success, the error envelope the service uses to
//! report its own failures, and the tagged union over the two.

use serde::{Deserialize, Serialize};

/// Path of the address lookup endpoint, relative to the service base URL
pub const ADDRESS_API_PATH: &str = "/v1/address";

/// A postal address as returned by the lookup service
///
/// All seven fields are required. Records are produced once per successful
/// response and consumed by the formatter.
///
/// # Examples
///
/// ```
/// use zipaddr::domain::AddressRecord;
///
/// let record = AddressRecord::builder()
///     .zipcode("1000001")
///     .prefecture("東京都", "トウキョウト")
///     .city("千代田区", "チヨダク")
///     .town("千代田", "チヨダ")
///     .build()
///     .unwrap();
///
/// assert_eq!(record.full_address(), "東京都千代田区千代田");
/// assert_eq!(record.full_address_kana(), "トウキョウトチヨダクチヨダ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    /// Postal code echoed back by the service
    pub zipcode: String,

    /// Prefecture name
    pub prefecture: String,

    /// Prefecture name in kana
    pub prefecture_kana: String,

    /// City, ward or village name
    pub city: String,

    /// City name in kana
    pub city_kana: String,

    /// Town area name
    pub town: String,

    /// Town area name in kana
    pub town_kana: String,
}

impl AddressRecord {
    /// Creates a new builder for constructing an AddressRecord
    pub fn builder() -> AddressRecordBuilder {
        AddressRecordBuilder::default()
    }

    /// Prefecture, city and town joined without separators
    pub fn full_address(&self) -> String {
        [
            self.prefecture.as_str(),
            self.city.as_str(),
            self.town.as_str(),
        ]
        .concat()
    }

    /// Kana rendering of [`full_address`](Self::full_address)
    pub fn full_address_kana(&self) -> String {
        [
            self.prefecture_kana.as_str(),
            self.city_kana.as_str(),
            self.town_kana.as_str(),
        ]
        .concat()
    }
}

/// Builder for constructing AddressRecord instances
#[derive(Debug, Default)]
pub struct AddressRecordBuilder {
    zipcode: Option<String>,
    prefecture: Option<(String, String)>,
    city: Option<(String, String)>,
    town: Option<(String, String)>,
}

impl AddressRecordBuilder {
    /// Sets the postal code
    pub fn zipcode(mut self, zipcode: impl Into<String>) -> Self {
        self.zipcode = Some(zipcode.into());
        self
    }

    /// Sets the prefecture and its kana reading
    pub fn prefecture(mut self, name: impl Into<String>, kana: impl Into<String>) -> Self {
        self.prefecture = Some((name.into(), kana.into()));
        self
    }

    /// Sets the city and its kana reading
    pub fn city(mut self, name: impl Into<String>, kana: impl Into<String>) -> Self {
        self.city = Some((name.into(), kana.into()));
        self
    }

    /// Sets the town and its kana reading
    pub fn town(mut self, name: impl Into<String>, kana: impl Into<String>) -> Self {
        self.town = Some((name.into(), kana.into()));
        self
    }

    /// Builds the AddressRecord
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing field
    pub fn build(self) -> Result<AddressRecord, String> {
        let zipcode = self.zipcode.ok_or("zipcode is required")?;
        let (prefecture, prefecture_kana) = self.prefecture.ok_or("prefecture is required")?;
        let (city, city_kana) = self.city.ok_or("city is required")?;
        let (town, town_kana) = self.town.ok_or("town is required")?;

        Ok(AddressRecord {
            zipcode,
            prefecture,
            prefecture_kana,
            city,
            city_kana,
            town,
            town_kana,
        })
    }
}

/// Error envelope reported by the lookup service
///
/// The service may deliver this with HTTP 200, so it is detected from the
/// body rather than from the status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorPayload {
    /// Service-defined error code
    pub error_code: i64,

    /// Human readable message from the service
    pub message: String,
}

impl ApiErrorPayload {
    /// Creates a new error payload
    pub fn new(error_code: i64, message: impl Into<String>) -> Self {
        Self {
            error_code,
            message: message.into(),
        }
    }
}

/// A decoded response body, resolved to exactly one of its two shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    /// Successful lookup
    Address(AddressRecord),

    /// Service-reported failure
    Error(ApiErrorPayload),
}
