use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};

/// Argument mapping carried by a method call.
pub type ArgumentMap = BTreeMap<String, EncodableValue>;

/// Dynamically typed value crossing the runtime boundary.
/// 跨越运行时边界的动态类型值。
///
/// The UI runtime marshals arguments into this shape; nothing about the
/// presence or type of a field is guaranteed, so typed code must convert
/// through the accessors below rather than assume a variant.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodableValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Raw binary payload, base64 on the wire.
    Bytes(#[serde_as(as = "Base64")] Vec<u8>),
    List(Vec<EncodableValue>),
    Map(BTreeMap<String, EncodableValue>),
}

impl EncodableValue {
    pub fn is_null(&self) -> bool {
        matches!(self, EncodableValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            EncodableValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            EncodableValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Consume the value, keeping it only if it is a string.
    pub fn into_string(self) -> Option<String> {
        match self {
            EncodableValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Consume the value, keeping it only if it is a binary payload.
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            EncodableValue::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

impl From<&str> for EncodableValue {
    fn from(value: &str) -> Self {
        EncodableValue::String(value.to_string())
    }
}

impl From<String> for EncodableValue {
    fn from(value: String) -> Self {
        EncodableValue::String(value)
    }
}

impl From<Vec<u8>> for EncodableValue {
    fn from(value: Vec<u8>) -> Self {
        EncodableValue::Bytes(value)
    }
}

impl From<bool> for EncodableValue {
    fn from(value: bool) -> Self {
        EncodableValue::Bool(value)
    }
}

impl From<i64> for EncodableValue {
    fn from(value: i64) -> Self {
        EncodableValue::Int(value)
    }
}

impl From<f64> for EncodableValue {
    fn from(value: f64) -> Self {
        EncodableValue::Float(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_are_base64_on_the_wire() {
        let value = EncodableValue::Bytes(vec![0x89, 0x50, 0x4e, 0x47]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"bytes":"iVBORw=="}"#);
    }

    #[test]
    fn null_is_a_bare_tag() {
        let json = serde_json::to_string(&EncodableValue::Null).unwrap();
        assert_eq!(json, r#""null""#);
        let back: EncodableValue = serde_json::from_str(&json).unwrap();
        assert!(back.is_null());
    }

    #[test]
    fn accessors_reject_other_variants() {
        let s = EncodableValue::from("photo.png");
        assert_eq!(s.as_str(), Some("photo.png"));
        assert!(s.as_bytes().is_none());

        let b = EncodableValue::from(vec![1u8, 2, 3]);
        assert_eq!(b.as_bytes(), Some(&[1u8, 2, 3][..]));
        assert!(b.clone().into_string().is_none());
        assert_eq!(b.into_bytes(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn nested_map_survives_json() {
        let mut inner = BTreeMap::new();
        inner.insert("w".to_string(), EncodableValue::Int(640));
        inner.insert("ratio".to_string(), EncodableValue::Float(1.5));
        let value = EncodableValue::List(vec![
            EncodableValue::Map(inner),
            EncodableValue::Bool(true),
        ]);

        let json = serde_json::to_vec(&value).unwrap();
        let back: EncodableValue = serde_json::from_slice(&json).unwrap();
        assert_eq!(back, value);
    }
}
