//! Deserialization helpers for loosely typed marketplace JSON
//!
//! The marketplace API is not strict about scalar types: shop ids arrive as
//! numbers or numeric strings depending on the endpoint, and refund ids as
//! strings or integers. These helpers normalize both at construction so the
//! rest of the workspace only ever sees one representation.

use serde::{Deserialize, Deserializer, de::Error as _};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    String(String),
}

/// Deserialize an id field that may arrive as a JSON number or string,
/// normalizing to `String`.
pub fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n.to_string()),
        NumberOrString::String(s) => Ok(s),
    }
}

/// Deserialize an integer field that may arrive as a JSON number or numeric
/// string, parsed once here.
pub fn de_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected an integer, got {s:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "super::de_id")]
        id: String,
        #[serde(deserialize_with = "super::de_i64")]
        shop_id: i64,
    }

    #[test]
    fn test_id_from_number_and_string() {
        let probe: Probe = serde_json::from_str(r#"{"id": 1988, "shop_id": "2000"}"#).unwrap();
        assert_eq!(probe.id, "1988");
        assert_eq!(probe.shop_id, 2000);

        let probe: Probe = serde_json::from_str(r#"{"id": "1988-A", "shop_id": 2000}"#).unwrap();
        assert_eq!(probe.id, "1988-A");
        assert_eq!(probe.shop_id, 2000);
    }

    #[test]
    fn test_non_numeric_shop_id_rejected() {
        let result = serde_json::from_str::<Probe>(r#"{"id": "1", "shop_id": "shop-1"}"#);
        assert!(result.is_err());
    }
}
