//! The converter trait and built-in converters
//!
//! Converters are looked up by the ordered pair of declared field kinds,
//! not by runtime value kind, so a converter may be handed a null value.
//! Built-in converters reject null; the engine then leaves the target
//! field unset instead of failing the map.

use std::fmt::Write as _;

use chrono::NaiveDate;
use fieldmap_value::{Value, ValueKind};

use crate::Error;

/// A registered value conversion between two declared kinds
pub trait Converter: Send + Sync {
    /// Declared kind this converter reads.
    fn source_kind(&self) -> ValueKind;

    /// Declared kind this converter produces.
    fn target_kind(&self) -> ValueKind;

    /// Convert one value. Returning `Value::Null` leaves the target field
    /// unset.
    ///
    /// # Errors
    ///
    /// Returns an error when the input cannot be converted. An error on a
    /// null input is treated by the engine as "converter does not accept
    /// null" and leaves the target field unset.
    fn convert(&self, value: &Value) -> crate::Result<Value>;
}

/// Formats a date value as a string using a chrono format (e.g. `%Y-%m-%d`)
#[derive(Debug, Clone)]
pub struct DateToStringConverter {
    format: String,
}

impl DateToStringConverter {
    /// Create a converter for the given chrono format string.
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    fn format_date(&self, date: NaiveDate) -> crate::Result<String> {
        let mut formatted = String::new();
        write!(formatted, "{}", date.format(&self.format)).map_err(|_| {
            Error::Conversion(format!(
                "Cannot format date {date} with format '{}'",
                self.format
            ))
        })?;
        Ok(formatted)
    }
}

impl Converter for DateToStringConverter {
    fn source_kind(&self) -> ValueKind {
        ValueKind::Date
    }

    fn target_kind(&self) -> ValueKind {
        ValueKind::String
    }

    fn convert(&self, value: &Value) -> crate::Result<Value> {
        match value {
            Value::Date(date) => Ok(Value::String(self.format_date(*date)?)),
            other => Err(Error::Conversion(format!(
                "Date-to-string converter cannot read a {} value",
                other.kind_name()
            ))),
        }
    }
}

/// Parses a string value into a date using a chrono format
#[derive(Debug, Clone)]
pub struct StringToDateConverter {
    format: String,
}

impl StringToDateConverter {
    /// Create a converter for the given chrono format string.
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }
}

impl Converter for StringToDateConverter {
    fn source_kind(&self) -> ValueKind {
        ValueKind::String
    }

    fn target_kind(&self) -> ValueKind {
        ValueKind::Date
    }

    fn convert(&self, value: &Value) -> crate::Result<Value> {
        match value {
            Value::String(input) => NaiveDate::parse_from_str(input, &self.format)
                .map(Value::Date)
                .map_err(|error| {
                    Error::Conversion(format!(
                        "Cannot parse '{input}' as date with format '{}': {error}",
                        self.format
                    ))
                }),
            other => Err(Error::Conversion(format!(
                "String-to-date converter cannot read a {} value",
                other.kind_name()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_to_string() {
        let converter = DateToStringConverter::new("%Y-%m-%d");
        let date = NaiveDate::from_ymd_opt(2021, 11, 21).unwrap();

        let converted = converter.convert(&Value::Date(date)).unwrap();
        assert_eq!(converted, Value::String("2021-11-21".to_string()));
    }

    #[test]
    fn test_date_to_string_custom_format() {
        let converter = DateToStringConverter::new("%d/%m/%Y");
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

        let converted = converter.convert(&Value::Date(date)).unwrap();
        assert_eq!(converted, Value::String("15/01/2024".to_string()));
    }

    #[test]
    fn test_date_to_string_rejects_null() {
        let converter = DateToStringConverter::new("%Y-%m-%d");
        assert!(converter.convert(&Value::Null).is_err());
    }

    #[test]
    fn test_string_to_date() {
        let converter = StringToDateConverter::new("%Y-%m-%d");
        let converted = converter
            .convert(&Value::String("2021-11-21".to_string()))
            .unwrap();
        assert_eq!(
            converted,
            Value::Date(NaiveDate::from_ymd_opt(2021, 11, 21).unwrap())
        );
    }

    #[test]
    fn test_string_to_date_invalid_input() {
        let converter = StringToDateConverter::new("%Y-%m-%d");
        let err = converter
            .convert(&Value::String("not a date".to_string()))
            .unwrap_err();
        assert!(matches!(err, Error::Conversion(_)));
    }

    #[test]
    fn test_declared_kind_pairs() {
        let to_string = DateToStringConverter::new("%Y-%m-%d");
        assert_eq!(to_string.source_kind(), ValueKind::Date);
        assert_eq!(to_string.target_kind(), ValueKind::String);

        let to_date = StringToDateConverter::new("%Y-%m-%d");
        assert_eq!(to_date.source_kind(), ValueKind::String);
        assert_eq!(to_date.target_kind(), ValueKind::Date);
    }
}
