//! Point value and type declarations.
//!
//! This module provides:
//! - [`PointValue`] - The dynamic value type carried between the driver and
//!   the point storage
//! - [`PointType`] - The declared type of a point, checked on writes

use serde::{Deserialize, Serialize};

/// A dynamic value held by (or written to) a point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointValue {
    /// Boolean value.
    Bool(bool),
    /// Single raw byte (unsigned).
    Byte(u8),
    /// Wider integer value.
    Integer(i64),
    /// String value.
    String(String),
}

impl PointValue {
    /// Convert to bool if the value is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PointValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Convert to a raw byte if the value is a byte.
    pub fn as_byte(&self) -> Option<u8> {
        match self {
            PointValue::Byte(v) => Some(*v),
            _ => None,
        }
    }

    /// Convert to i64 if the value is numeric.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            PointValue::Byte(v) => Some(*v as i64),
            PointValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Convert to a string slice if the value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PointValue::String(v) => Some(v),
            _ => None,
        }
    }

    /// The declared type this value satisfies.
    pub fn point_type(&self) -> PointType {
        match self {
            PointValue::Bool(_) => PointType::Bool,
            PointValue::Byte(_) => PointType::Byte,
            PointValue::Integer(_) => PointType::Integer,
            PointValue::String(_) => PointType::String,
        }
    }
}

impl std::fmt::Display for PointValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointValue::Bool(v) => write!(f, "{}", v),
            PointValue::Byte(v) => write!(f, "{}", v),
            PointValue::Integer(v) => write!(f, "{}", v),
            PointValue::String(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for PointValue {
    fn from(v: bool) -> Self {
        PointValue::Bool(v)
    }
}

impl From<u8> for PointValue {
    fn from(v: u8) -> Self {
        PointValue::Byte(v)
    }
}

impl From<i64> for PointValue {
    fn from(v: i64) -> Self {
        PointValue::Integer(v)
    }
}

impl From<&str> for PointValue {
    fn from(v: &str) -> Self {
        PointValue::String(v.to_string())
    }
}

/// The declared type of a point, registered at schema time.
///
/// Writes against a point are checked against its declared type; a mismatch
/// is rejected rather than coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointType {
    /// Boolean point.
    Bool,
    /// Single-byte point.
    Byte,
    /// Wider integer point.
    Integer,
    /// String point.
    String,
}

impl PointType {
    /// Whether a value matches this declared type. No numeric widening:
    /// a Byte point only accepts Byte values.
    pub fn matches(&self, value: &PointValue) -> bool {
        *self == value.point_type()
    }
}

impl std::fmt::Display for PointType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointType::Bool => write!(f, "Bool"),
            PointType::Byte => write!(f, "Byte"),
            PointType::Integer => write!(f, "Integer"),
            PointType::String => write!(f, "String"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(PointValue::Bool(true).as_bool(), Some(true));
        assert_eq!(PointValue::Byte(0x42).as_byte(), Some(0x42));
        assert_eq!(PointValue::Byte(7).as_i64(), Some(7));
        assert_eq!(PointValue::Integer(-3).as_i64(), Some(-3));
        assert_eq!(PointValue::Bool(true).as_byte(), None);
        assert_eq!(PointValue::Byte(1).as_bool(), None);
    }

    #[test]
    fn test_type_matching() {
        assert!(PointType::Bool.matches(&PointValue::Bool(false)));
        assert!(PointType::Byte.matches(&PointValue::Byte(0xFF)));
        assert!(!PointType::Bool.matches(&PointValue::Byte(1)));
        assert!(!PointType::Byte.matches(&PointValue::Integer(1)));
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(PointValue::from(true), PointValue::Bool(true));
        assert_eq!(PointValue::from(0x10u8), PointValue::Byte(0x10));
        assert_eq!(PointValue::from("On"), PointValue::String("On".into()));
    }

    #[test]
    fn test_serde_untagged() {
        let json = serde_json::to_string(&PointValue::Bool(true)).unwrap();
        assert_eq!(json, "true");
        let json = serde_json::to_string(&PointValue::Byte(255)).unwrap();
        assert_eq!(json, "255");
    }
}
