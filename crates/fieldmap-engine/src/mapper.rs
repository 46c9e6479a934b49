//! The mapping engine
//!
//! Resolves each target field in priority order: explicit binding, then
//! same-name source field, then leave the field at its `Default` value.
//! A registered converter for the declared kind pair is applied to the
//! resolved value; otherwise the value must be assignment-compatible
//! (same kind, or Integer widened to Decimal).

use std::any::TypeId;

use fieldmap_descriptor::Record;
use fieldmap_value::ValueKind;

use crate::factory::MapperFactory;
use crate::Error;

/// Read-only mapping facade over a [`MapperFactory`] configuration
pub struct Mapper<'a> {
    factory: &'a MapperFactory,
}

impl<'a> Mapper<'a> {
    pub(crate) fn new(factory: &'a MapperFactory) -> Self {
        Self { factory }
    }

    /// Map one source record into a freshly constructed target record.
    ///
    /// The source is never mutated; the returned target is owned by the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullToPrimitive`] when a null source value lands on
    /// a non-nullable target field, [`Error::UnmappableField`] when the
    /// declared kinds are incompatible and no converter is registered, and
    /// [`Error::Conversion`] when a converter fails on a non-null value.
    pub fn map<S, T>(&self, source: &S) -> crate::Result<T>
    where
        S: Record,
        T: Record + Default,
    {
        let source_descriptor = self.factory.descriptors().descriptor_of::<S>();
        let target_descriptor = self.factory.descriptors().descriptor_of::<T>();
        let class_map = self
            .factory
            .class_map_for((TypeId::of::<S>(), TypeId::of::<T>()));

        tracing::trace!(
            source = source_descriptor.name(),
            target = target_descriptor.name(),
            explicit_bindings = class_map.map_or(0, |m| m.bindings().len()),
            "mapping record"
        );

        let mut target = T::default();
        for target_field in target_descriptor.fields() {
            // Explicit binding first, same-name match second.
            let source_field = match class_map
                .and_then(|map| map.binding_for_target(target_field.name()))
            {
                Some(binding) => source_descriptor.field(binding.source_field()),
                None => source_descriptor.field(target_field.name()),
            };
            let Some(source_field) = source_field else {
                continue;
            };

            let raw = source_field.read(source)?;

            match self
                .factory
                .converter_for(source_field.kind(), target_field.kind())
            {
                Some(converter) => match converter.convert(&raw) {
                    Ok(converted) if converted.is_null() => {}
                    Ok(converted) => target_field.write(&mut target, converted)?,
                    // Converter does not accept null; the field stays unset.
                    Err(_) if raw.is_null() => {}
                    Err(error) => return Err(error),
                },
                None if raw.is_null() => {
                    if !target_field.nullable() {
                        return Err(Error::NullToPrimitive {
                            field: target_field.name().to_string(),
                        });
                    }
                }
                None if assignable(source_field.kind(), target_field.kind()) => {
                    target_field.write(&mut target, raw)?;
                }
                None => {
                    return Err(Error::UnmappableField {
                        field: target_field.name().to_string(),
                        source_kind: source_field.kind(),
                        target_kind: target_field.kind(),
                    });
                }
            }
        }

        Ok(target)
    }

    /// Map a slice of sources, preserving order and count.
    ///
    /// All-or-nothing: the first element error aborts the whole batch.
    ///
    /// # Errors
    ///
    /// Returns the first element's mapping error, if any.
    pub fn map_as_list<S, T>(&self, sources: &[S]) -> crate::Result<Vec<T>>
    where
        S: Record,
        T: Record + Default,
    {
        sources.iter().map(|source| self.map(source)).collect()
    }
}

/// Whether a value of the source kind may be written as-is to a field of
/// the target kind. Integer → Decimal widening is the only cross-kind case.
fn assignable(source: ValueKind, target: ValueKind) -> bool {
    source == target || (source == ValueKind::Integer && target == ValueKind::Decimal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::{Converter, DateToStringConverter};
    use chrono::NaiveDate;
    use fieldmap_value::Value;

    #[derive(Debug, Default, Clone)]
    struct Reading {
        sensor: Option<String>,
        count: Option<i64>,
        taken: Option<NaiveDate>,
    }

    #[derive(Debug, Default)]
    struct Report {
        sensor: Option<String>,
        count: f64,
        taken: Option<String>,
    }

    fieldmap_descriptor::record! {
        Reading {
            optional sensor: String,
            optional count: i64,
            optional taken: NaiveDate,
        }
    }

    fieldmap_descriptor::record! {
        Report {
            optional sensor: String,
            required count: f64,
            optional taken: String,
        }
    }

    fn reading() -> Reading {
        Reading {
            sensor: Some("s-1".to_string()),
            count: Some(3),
            taken: None,
        }
    }

    #[test]
    fn test_assignable_rules() {
        assert!(assignable(ValueKind::String, ValueKind::String));
        assert!(assignable(ValueKind::Integer, ValueKind::Decimal));
        assert!(!assignable(ValueKind::Decimal, ValueKind::Integer));
        assert!(!assignable(ValueKind::Date, ValueKind::String));
    }

    #[test]
    fn test_integer_widens_to_decimal_field() {
        let factory = MapperFactory::new();
        let report: Report = factory.mapper().map(&reading()).unwrap();
        assert!((report.count - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_null_onto_required_field_fails() {
        let factory = MapperFactory::new();
        let mut source = reading();
        source.count = None;

        let err = factory.mapper().map::<Reading, Report>(&source).unwrap_err();
        assert!(matches!(err, Error::NullToPrimitive { field } if field == "count"));
    }

    #[test]
    fn test_kind_mismatch_without_converter_fails() {
        let factory = MapperFactory::new();
        let mut source = reading();
        source.taken = NaiveDate::from_ymd_opt(2021, 11, 21);

        let err = factory.mapper().map::<Reading, Report>(&source).unwrap_err();
        assert!(matches!(
            err,
            Error::UnmappableField {
                field,
                source_kind: ValueKind::Date,
                target_kind: ValueKind::String,
            } if field == "taken"
        ));
    }

    #[test]
    fn test_null_with_converter_leaves_field_unset() {
        let mut factory = MapperFactory::new();
        factory.register_converter(DateToStringConverter::new("%Y-%m-%d"));

        // taken is None; the date converter rejects null, so the target
        // field stays unset instead of failing the map.
        let report: Report = factory.mapper().map(&reading()).unwrap();
        assert_eq!(report.taken, None);
    }

    #[test]
    fn test_converter_returning_null_leaves_field_unset() {
        struct RedactingConverter;

        impl Converter for RedactingConverter {
            fn source_kind(&self) -> ValueKind {
                ValueKind::Date
            }

            fn target_kind(&self) -> ValueKind {
                ValueKind::String
            }

            fn convert(&self, _value: &Value) -> crate::Result<Value> {
                Ok(Value::Null)
            }
        }

        let mut factory = MapperFactory::new();
        factory.register_converter(RedactingConverter);

        let mut source = reading();
        source.taken = NaiveDate::from_ymd_opt(2021, 11, 21);

        let report: Report = factory.mapper().map(&source).unwrap();
        assert_eq!(report.taken, None);
    }

    #[test]
    fn test_converter_applies_by_declared_kinds() {
        let mut factory = MapperFactory::new();
        factory.register_converter(DateToStringConverter::new("%Y-%m-%d"));

        let mut source = reading();
        source.taken = NaiveDate::from_ymd_opt(2021, 11, 21);

        let report: Report = factory.mapper().map(&source).unwrap();
        assert_eq!(report.taken.as_deref(), Some("2021-11-21"));
    }

    #[test]
    fn test_map_as_list_is_all_or_nothing() {
        let factory = MapperFactory::new();
        let mut bad = reading();
        bad.count = None;
        let sources = vec![reading(), bad, reading()];

        let result = factory.mapper().map_as_list::<Reading, Report>(&sources);
        assert!(result.is_err());
    }
}
