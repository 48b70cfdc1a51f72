//! Output projection of an address lookup

use serde::{Deserialize, Serialize};

/// The externally visible representation of a looked-up address
///
/// `full_address_kana` is only present when kana output was requested. When
/// it is `None` the key is left out of the serialized output entirely rather
/// than being written as `null`.
///
/// Construct values through [`crate::core::format::AddressFormatter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedAddress {
    /// Postal code
    pub zipcode: String,

    /// Prefecture, city and town joined
    pub full_address: String,

    /// Prefecture name
    pub prefecture: String,

    /// City name
    pub city: String,

    /// Town name
    pub town: String,

    /// Kana rendering of the full address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_address_kana: Option<String>,
}

impl FormattedAddress {
    /// Serializes as indented JSON, leaving non-ASCII characters unescaped
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes as single-line JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_compact_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kana: Option<&str>) -> FormattedAddress {
        FormattedAddress {
            zipcode: "1000001".to_string(),
            full_address: "東京都千代田区千代田".to_string(),
            prefecture: "東京都".to_string(),
            city: "千代田区".to_string(),
            town: "千代田".to_string(),
            full_address_kana: kana.map(str::to_string),
        }
    }

    #[test]
    fn test_kana_key_absent_when_none() {
        let json = serde_json::to_value(sample(None)).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("full_address_kana"));
        assert_eq!(object.len(), 5);
    }

    #[test]
    fn test_kana_key_present_when_some() {
        let json = serde_json::to_value(sample(Some("トウキョウトチヨダクチヨダ"))).unwrap();
        assert_eq!(json["full_address_kana"], "トウキョウトチヨダクチヨダ");
    }

    #[test]
    fn test_pretty_json_keeps_non_ascii() {
        let output = sample(None).to_pretty_json().unwrap();
        assert!(output.contains("東京都千代田区千代田"));
        assert!(!output.contains("\\u"));
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_field_order() {
        let output = sample(Some("カナ")).to_compact_json().unwrap();
        let zipcode = output.find("\"zipcode\"").unwrap();
        let full_address = output.find("\"full_address\"").unwrap();
        let town = output.find("\"town\"").unwrap();
        let kana = output.find("\"full_address_kana\"").unwrap();
        assert!(zipcode < full_address);
        assert!(full_address < town);
        assert!(town < kana);
    }
}
