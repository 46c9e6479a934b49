//! Scalar value model for record mapping

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A scalar value carried between records during mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// String value
    String(String),

    /// Integer value
    Integer(i64),

    /// Decimal value
    Decimal(f64),

    /// Boolean value
    Boolean(bool),

    /// Calendar date value
    Date(NaiveDate),

    /// Null/absent value
    Null,
}

/// Declared semantic type of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// UTF-8 string
    String,

    /// Signed 64-bit integer
    Integer,

    /// 64-bit floating point decimal
    Decimal,

    /// Boolean flag
    Boolean,

    /// Calendar date
    Date,
}

impl Value {
    /// The kind of this value, or `None` for null.
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Value::String(_) => Some(ValueKind::String),
            Value::Integer(_) => Some(ValueKind::Integer),
            Value::Decimal(_) => Some(ValueKind::Decimal),
            Value::Boolean(_) => Some(ValueKind::Boolean),
            Value::Date(_) => Some(ValueKind::Date),
            Value::Null => None,
        }
    }

    /// Human-readable name of this value's kind, including null.
    pub fn kind_name(&self) -> &'static str {
        match self.kind() {
            Some(kind) => kind.name(),
            None => "Null",
        }
    }

    /// Convert the value to its string representation
    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Integer(i) => Some(i.to_string()),
            Value::Decimal(d) => Some(d.to_string()),
            Value::Boolean(b) => Some(b.to_string()),
            Value::Date(d) => Some(d.to_string()),
            Value::Null => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl ValueKind {
    /// Stable display name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::String => "String",
            ValueKind::Integer => "Integer",
            ValueKind::Decimal => "Decimal",
            ValueKind::Boolean => "Boolean",
            ValueKind::Date => "Date",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kind() {
        assert_eq!(Value::Integer(1).kind(), Some(ValueKind::Integer));
        assert_eq!(
            Value::String("x".to_string()).kind(),
            Some(ValueKind::String)
        );
        assert_eq!(Value::Null.kind(), None);
    }

    #[test]
    fn test_kind_name_for_null() {
        assert_eq!(Value::Null.kind_name(), "Null");
        assert_eq!(Value::Boolean(true).kind_name(), "Boolean");
    }

    #[test]
    fn test_as_string() {
        assert_eq!(Value::Integer(42).as_string(), Some("42".to_string()));
        assert_eq!(
            Value::Date(NaiveDate::from_ymd_opt(2021, 11, 21).unwrap()).as_string(),
            Some("2021-11-21".to_string())
        );
        assert_eq!(Value::Null.as_string(), None);
    }

    #[test]
    fn test_is_null() {
        assert!(Value::Null.is_null());
        assert!(!Value::Integer(0).is_null());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ValueKind::Decimal.to_string(), "Decimal");
    }

    #[test]
    fn test_value_serde_round_trip() {
        let value = Value::String("hello".to_string());
        let json = serde_json::to_string(&value).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
