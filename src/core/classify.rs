//! Response classification
//!
//! Maps non-200 status codes to failure kinds and resolves a decoded body into
//! either an address record or the service's error envelope.

use crate::domain::{AddressRecord, ApiErrorPayload, ApiResponse, FetchErrorKind, PayloadError};
use serde_json::{Map, Value};

/// The only status treated as success
pub const HTTP_OK: u16 = 200;

/// Key whose presence marks a body as the service error envelope
pub const ERROR_DISCRIMINATOR: &str = "error_code";

/// Classify a non-200 HTTP status
///
/// 404 is `NotFoundError`, every other 4xx is `ClientError`, and anything
/// else is `ServerError`. Callers only invoke this when the status is not
/// [`HTTP_OK`].
pub fn classify_status(status: u16) -> FetchErrorKind {
    match status {
        404 => FetchErrorKind::NotFoundError,
        400..=499 => FetchErrorKind::ClientError,
        _ => FetchErrorKind::ServerError,
    }
}

/// Resolve a decoded body into one of the two response shapes
///
/// The `error_code` key is checked before any field access; an envelope is
/// recognised regardless of the HTTP status it arrived with. Otherwise all
/// seven address fields are required and coerced to strings.
///
/// # Errors
///
/// Returns a [`PayloadError`] if the body is not an object, a required field
/// is missing, or a field holds a value that cannot be coerced.
///
/// # Example
///
/// ```
/// use zipaddr::core::classify::parse_payload;
/// use zipaddr::domain::ApiResponse;
/// use serde_json::json;
///
/// let response = parse_payload(&json!({"error_code": 1001, "message": "invalid zipcode"})).unwrap();
/// assert!(matches!(response, ApiResponse::Error(e) if e.message == "invalid zipcode"));
/// ```
pub fn parse_payload(payload: &Value) -> Result<ApiResponse, PayloadError> {
    let object = payload
        .as_object()
        .ok_or_else(|| PayloadError::NotAnObject(json_type(payload)))?;

    if object.contains_key(ERROR_DISCRIMINATOR) {
        return parse_error_payload(object).map(ApiResponse::Error);
    }

    parse_address_record(object).map(ApiResponse::Address)
}

fn parse_error_payload(object: &Map<String, Value>) -> Result<ApiErrorPayload, PayloadError> {
    let raw_code = required(object, ERROR_DISCRIMINATOR)?;
    let error_code = match raw_code {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole_number)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
    .ok_or_else(|| PayloadError::InvalidType {
        field: ERROR_DISCRIMINATOR,
        found: json_type(raw_code),
    })?;

    Ok(ApiErrorPayload {
        error_code,
        message: required_string(object, "message")?,
    })
}

/// Integral floats such as `1001.0` are accepted as codes
fn whole_number(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.fract() == 0.0 && in_range).then_some(value as i64)
}

fn parse_address_record(object: &Map<String, Value>) -> Result<AddressRecord, PayloadError> {
    Ok(AddressRecord {
        zipcode: required_string(object, "zipcode")?,
        prefecture: required_string(object, "prefecture")?,
        prefecture_kana: required_string(object, "prefecture_kana")?,
        city: required_string(object, "city")?,
        city_kana: required_string(object, "city_kana")?,
        town: required_string(object, "town")?,
        town_kana: required_string(object, "town_kana")?,
    })
}

fn required<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, PayloadError> {
    object.get(field).ok_or(PayloadError::MissingField(field))
}

/// Read a field and coerce scalars to their string form
fn required_string(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<String, PayloadError> {
    match required(object, field)? {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(PayloadError::InvalidType {
            field,
            found: json_type(other),
        }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn tokyo_payload() -> Value {
        json!({
            "zipcode": "1000001",
            "prefecture": "東京都",
            "prefecture_kana": "トウキョウト",
            "city": "千代田区",
            "city_kana": "チヨダク",
            "town": "千代田",
            "town_kana": "チヨダ"
        })
    }

    #[test_case(404 => FetchErrorKind::NotFoundError ; "not found")]
    #[test_case(400 => FetchErrorKind::ClientError ; "bad request")]
    #[test_case(451 => FetchErrorKind::ClientError ; "unavailable for legal reasons")]
    #[test_case(499 => FetchErrorKind::ClientError ; "upper client bound")]
    #[test_case(500 => FetchErrorKind::ServerError ; "internal server error")]
    #[test_case(503 => FetchErrorKind::ServerError ; "service unavailable")]
    #[test_case(302 => FetchErrorKind::ServerError ; "redirect")]
    #[test_case(204 => FetchErrorKind::ServerError ; "non-200 success")]
    fn test_classify_status(status: u16) -> FetchErrorKind {
        classify_status(status)
    }

    #[test]
    fn test_parse_address_payload() {
        let response = parse_payload(&tokyo_payload()).unwrap();
        match response {
            ApiResponse::Address(record) => {
                assert_eq!(record.zipcode, "1000001");
                assert_eq!(record.prefecture, "東京都");
                assert_eq!(record.town_kana, "チヨダ");
            }
            ApiResponse::Error(e) => panic!("Expected address, got {e:?}"),
        }
    }

    #[test]
    fn test_error_envelope_wins_over_address_fields() {
        let mut payload = tokyo_payload();
        payload["error_code"] = json!(2001);
        payload["message"] = json!("zipcode is deprecated");

        let response = parse_payload(&payload).unwrap();
        assert_eq!(
            response,
            ApiResponse::Error(ApiErrorPayload::new(2001, "zipcode is deprecated"))
        );
    }

    #[test]
    fn test_error_code_accepts_numeric_string() {
        let response = parse_payload(&json!({"error_code": "42", "message": "bad"})).unwrap();
        assert_eq!(response, ApiResponse::Error(ApiErrorPayload::new(42, "bad")));
    }

    #[test_case(json!(1001.0) => 1001 ; "integral float")]
    #[test_case(json!(-3.0) => -3 ; "negative integral float")]
    #[test_case(json!(" 7 ") => 7 ; "padded string")]
    fn test_error_code_numeric_forms(code: Value) -> i64 {
        match parse_payload(&json!({"error_code": code, "message": "bad"})).unwrap() {
            ApiResponse::Error(e) => e.error_code,
            ApiResponse::Address(r) => panic!("Expected error envelope, got {r:?}"),
        }
    }

    #[test]
    fn test_error_code_rejects_fractional_float() {
        let err = parse_payload(&json!({"error_code": 1.5, "message": "bad"})).unwrap_err();
        assert_eq!(
            err,
            PayloadError::InvalidType {
                field: "error_code",
                found: "number"
            }
        );
    }

    #[test]
    fn test_error_code_rejects_non_numeric() {
        let err = parse_payload(&json!({"error_code": "E42", "message": "bad"})).unwrap_err();
        assert_eq!(
            err,
            PayloadError::InvalidType {
                field: "error_code",
                found: "string"
            }
        );
    }

    #[test]
    fn test_error_envelope_requires_message() {
        let err = parse_payload(&json!({"error_code": 1})).unwrap_err();
        assert_eq!(err, PayloadError::MissingField("message"));
    }

    #[test]
    fn test_missing_field_is_reported() {
        let mut payload = tokyo_payload();
        payload.as_object_mut().unwrap().remove("town_kana");

        let err = parse_payload(&payload).unwrap_err();
        assert_eq!(err, PayloadError::MissingField("town_kana"));
    }

    #[test]
    fn test_numeric_fields_are_coerced() {
        let mut payload = tokyo_payload();
        payload["zipcode"] = json!(1000001);

        let response = parse_payload(&payload).unwrap();
        assert!(matches!(response, ApiResponse::Address(r) if r.zipcode == "1000001"));
    }

    #[test_case(json!(null) ; "null")]
    #[test_case(json!(["東京都"]) ; "array")]
    #[test_case(json!({"name": "東京都"}) ; "object")]
    fn test_non_scalar_field_is_rejected(value: Value) {
        let mut payload = tokyo_payload();
        payload["prefecture"] = value;

        let err = parse_payload(&payload).unwrap_err();
        assert!(matches!(
            err,
            PayloadError::InvalidType {
                field: "prefecture",
                ..
            }
        ));
    }

    #[test_case(json!([]) => PayloadError::NotAnObject("array") ; "array body")]
    #[test_case(json!("ok") => PayloadError::NotAnObject("string") ; "string body")]
    #[test_case(json!(null) => PayloadError::NotAnObject("null") ; "null body")]
    fn test_non_object_payload(payload: Value) -> PayloadError {
        parse_payload(&payload).unwrap_err()
    }
}
