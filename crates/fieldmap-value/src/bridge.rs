//! Typed bridging between Rust field types and dynamic values
//!
//! [`FieldValue`] is implemented for each Rust type that may back a record
//! field. Descriptor accessors go through this trait so the declared
//! [`ValueKind`] of a field always agrees with the values its getter
//! produces and its setter accepts.

use chrono::NaiveDate;

use crate::numeric::integer_to_decimal;
use crate::{Error, Value, ValueKind};

/// A concrete Rust type that can back a record field
pub trait FieldValue: Sized {
    /// Declared kind of fields backed by this type.
    const KIND: ValueKind;

    /// Wrap a concrete value into the dynamic model.
    fn into_value(self) -> Value;

    /// Extract a concrete value from the dynamic model.
    ///
    /// The only implicit coercion is Integer → Decimal widening; every
    /// other cross-kind extraction is an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] when the value does not carry this
    /// type's kind.
    fn from_value(value: Value) -> crate::Result<Self>;
}

impl FieldValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn into_value(self) -> Value {
        Value::String(self)
    }

    fn from_value(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(Error::kind_mismatch(Self::KIND, &other)),
        }
    }
}

impl FieldValue for i64 {
    const KIND: ValueKind = ValueKind::Integer;

    fn into_value(self) -> Value {
        Value::Integer(self)
    }

    fn from_value(value: Value) -> crate::Result<Self> {
        match value {
            Value::Integer(i) => Ok(i),
            other => Err(Error::kind_mismatch(Self::KIND, &other)),
        }
    }
}

impl FieldValue for f64 {
    const KIND: ValueKind = ValueKind::Decimal;

    fn into_value(self) -> Value {
        Value::Decimal(self)
    }

    fn from_value(value: Value) -> crate::Result<Self> {
        match value {
            Value::Decimal(d) => Ok(d),
            Value::Integer(i) => integer_to_decimal(i),
            other => Err(Error::kind_mismatch(Self::KIND, &other)),
        }
    }
}

impl FieldValue for bool {
    const KIND: ValueKind = ValueKind::Boolean;

    fn into_value(self) -> Value {
        Value::Boolean(self)
    }

    fn from_value(value: Value) -> crate::Result<Self> {
        match value {
            Value::Boolean(b) => Ok(b),
            other => Err(Error::kind_mismatch(Self::KIND, &other)),
        }
    }
}

impl FieldValue for NaiveDate {
    const KIND: ValueKind = ValueKind::Date;

    fn into_value(self) -> Value {
        Value::Date(self)
    }

    fn from_value(value: Value) -> crate::Result<Self> {
        match value {
            Value::Date(d) => Ok(d),
            other => Err(Error::kind_mismatch(Self::KIND, &other)),
        }
    }
}
