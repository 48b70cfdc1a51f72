//! Address formatting
//!
//! Builds the output projection from a parsed record. Formatting is pure:
//! the same record and flag always produce the same [`FormattedAddress`].

use crate::domain::{AddressRecord, FormattedAddress};

/// Builder that projects an [`AddressRecord`] into a [`FormattedAddress`]
///
/// # Example
///
/// ```
/// use zipaddr::core::format::AddressFormatter;
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
/// let formatted = AddressFormatter::from_address(&record).with_kana(true).build();
/// assert_eq!(formatted.full_address_kana.as_deref(), Some("トウキョウトチヨダクチヨダ"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AddressFormatter<'a> {
    address: &'a AddressRecord,
    include_kana: bool,
}

impl<'a> AddressFormatter<'a> {
    /// Start formatting a record; kana output is off by default
    pub fn from_address(address: &'a AddressRecord) -> Self {
        Self {
            address,
            include_kana: false,
        }
    }

    /// Set whether the kana rendering is included
    pub fn with_kana(self, include_kana: bool) -> Self {
        Self {
            include_kana,
            ..self
        }
    }

    /// Build the output projection
    pub fn build(&self) -> FormattedAddress {
        FormattedAddress {
            zipcode: self.address.zipcode.clone(),
            full_address: self.address.full_address(),
            prefecture: self.address.prefecture.clone(),
            city: self.address.city.clone(),
            town: self.address.town.clone(),
            full_address_kana: self
                .include_kana
                .then(|| self.address.full_address_kana()),
        }
    }
}

/// Format a record in one call
pub fn format(record: &AddressRecord, include_kana: bool) -> FormattedAddress {
    AddressFormatter::from_address(record)
        .with_kana(include_kana)
        .build()
}
