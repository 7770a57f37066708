//! Node keys.

use std::fmt;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// The unique key of a tree node.
///
/// Node lists identify nodes by a string or integer `value`. Both forms are
/// kept distinct: `1` and `"1"` are different keys.
///
/// Numeric keys must be whole numbers that fit in an `i64`. Fractional
/// values such as `1.5` and integers above `i64::MAX` are rejected when
/// deserializing, with an error naming the accepted forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum NodeValue {
    /// An integer key.
    Int(i64),
    /// A string key.
    String(String),
}

impl NodeValue {
    /// Returns the string key, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Int(_) => None,
        }
    }

    /// Returns the integer key, if this is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::String(_) => None,
        }
    }
}

struct NodeValueVisitor;

impl Visitor<'_> for NodeValueVisitor {
    type Value = NodeValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or an integer in the i64 range")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<NodeValue, E> {
        Ok(NodeValue::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<NodeValue, E> {
        Ok(NodeValue::String(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<NodeValue, E> {
        Ok(NodeValue::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<NodeValue, E> {
        i64::try_from(v)
            .map(NodeValue::Int)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<NodeValue, E> {
        Err(E::invalid_type(Unexpected::Float(v), &self))
    }
}

impl<'de> Deserialize<'de> for NodeValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NodeValueVisitor)
    }
}

impl fmt::Display for NodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for NodeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for NodeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for NodeValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<&NodeValue> for NodeValue {
    fn from(value: &NodeValue) -> Self {
        value.clone()
    }
}

impl From<i64> for NodeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for NodeValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for NodeValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl PartialEq<str> for NodeValue {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for NodeValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_and_int_are_distinct() {
        assert_ne!(NodeValue::from("1"), NodeValue::from(1));
        assert_eq!(NodeValue::from("1").to_string(), NodeValue::from(1).to_string());
    }

    #[test]
    fn test_deserialize_untagged() {
        let values: Vec<NodeValue> = serde_json::from_str(r#"["a", 3, "0-1"]"#).unwrap();
        assert_eq!(
            values,
            vec![NodeValue::from("a"), NodeValue::from(3), NodeValue::from("0-1")]
        );
    }

    #[test]
    fn test_deserialize_rejects_non_i64_numbers() {
        let err = serde_json::from_str::<NodeValue>("1.5").unwrap_err();
        assert!(err.to_string().contains("a string or an integer"), "{err}");
        assert!(err.to_string().contains("floating point"), "{err}");

        let err = serde_json::from_str::<NodeValue>("18446744073709551615").unwrap_err();
        assert!(err.to_string().contains("a string or an integer"), "{err}");

        let err = serde_json::from_str::<NodeValue>("true").unwrap_err();
        assert!(err.to_string().contains("a string or an integer"), "{err}");

        assert_eq!(
            serde_json::from_str::<NodeValue>("-9223372036854775808").unwrap(),
            NodeValue::from(i64::MIN)
        );
        assert_eq!(
            serde_json::from_str::<NodeValue>("9223372036854775807").unwrap(),
            NodeValue::from(i64::MAX)
        );
    }

    #[test]
    fn test_compare_with_str() {
        assert_eq!(NodeValue::from("leaf"), "leaf");
        assert!(NodeValue::from(4) != "4");
    }
}
