//! The service's conversion result as an open record.
//!
//! # Design
//! The service returns a flat JSON object of roughly 45 string fields and
//! adds new ones over time, so the result is kept as a string-to-string map
//! instead of a fixed struct. Values are stored exactly as received: numbers
//! may carry thousands separators (`"-5,069,012.439"`) and fields that do not
//! apply to a conversion hold the literal sentinel `"N/A"`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Value the service uses for fields that do not apply to a conversion.
pub const NOT_APPLICABLE: &str = "N/A";

/// Decoded response body of a successful conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversionResponse {
    fields: BTreeMap<String, String>,
}

impl ConversionResponse {
    /// Raw value of `key`, including the `"N/A"` sentinel.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Like `get`, but `None` when the service marked the field `"N/A"`.
    pub fn applicable(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| *v != NOT_APPLICABLE)
    }

    /// Read `key` as a number, ignoring thousands separators.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.applicable(key)?.replace(',', "").trim().parse().ok()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.fields
    }
}

impl From<BTreeMap<String, String>> for ConversionResponse {
    fn from(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConversionResponse {
        serde_json::from_str(
            r#"{"srcLat":"40.0000000000","x":"-217,687.297","srcOrthoht":"N/A","utmZone":"UTM Zone 17"}"#,
        )
        .unwrap()
    }

    #[test]
    fn raw_values_are_untouched() {
        let resp = sample();
        assert_eq!(resp.get("x"), Some("-217,687.297"));
        assert_eq!(resp.get("srcOrthoht"), Some("N/A"));
        assert_eq!(resp.len(), 4);
    }

    #[test]
    fn sentinel_is_not_applicable() {
        let resp = sample();
        assert_eq!(resp.applicable("srcOrthoht"), None);
        assert_eq!(resp.applicable("utmZone"), Some("UTM Zone 17"));
        assert_eq!(resp.number("srcOrthoht"), None);
    }

    #[test]
    fn numbers_drop_thousands_separators() {
        let resp = sample();
        assert_eq!(resp.number("srcLat"), Some(40.0));
        assert_eq!(resp.number("x"), Some(-217687.297));
        assert_eq!(resp.number("utmZone"), None);
        assert_eq!(resp.number("missing"), None);
    }

    #[test]
    fn non_string_values_are_rejected() {
        let result: Result<ConversionResponse, _> = serde_json::from_str(r#"{"srcLat":40.0}"#);
        assert!(result.is_err());
    }
}
