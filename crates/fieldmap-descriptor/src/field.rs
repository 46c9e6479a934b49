//! Per-field metadata and type-erased accessors
//!
//! Accessors are only built through the typed [`FieldDescriptor::required`]
//! and [`FieldDescriptor::optional`] constructors, so the declared kind of
//! a field always agrees with the values its getter produces and its setter
//! accepts.

use std::any::Any;
use std::sync::Arc;

use fieldmap_value::{FieldValue, Value, ValueKind};

use crate::Error;

/// Type alias for a type-erased read accessor
pub type ReadAccessor = Arc<dyn Fn(&dyn Any) -> crate::Result<Value> + Send + Sync>;

/// Type alias for a type-erased write accessor
pub type WriteAccessor = Arc<dyn Fn(&mut dyn Any, Value) -> crate::Result<()> + Send + Sync>;

/// Metadata and accessors for a single record field
#[derive(Clone)]
pub struct FieldDescriptor {
    name: &'static str,
    kind: ValueKind,
    nullable: bool,
    read: ReadAccessor,
    write: WriteAccessor,
}

impl FieldDescriptor {
    /// Describe a non-nullable field backed by `V`.
    pub fn required<R, V>(name: &'static str, get: fn(&R) -> V, set: fn(&mut R, V)) -> Self
    where
        R: Any,
        V: FieldValue + 'static,
    {
        Self {
            name,
            kind: V::KIND,
            nullable: false,
            read: Arc::new(move |record| {
                let record = downcast_ref::<R>(record)?;
                Ok(get(record).into_value())
            }),
            write: Arc::new(move |record, value| {
                let record = downcast_mut::<R>(record)?;
                set(record, V::from_value(value)?);
                Ok(())
            }),
        }
    }

    /// Describe a nullable field backed by `Option<V>`.
    pub fn optional<R, V>(
        name: &'static str,
        get: fn(&R) -> Option<V>,
        set: fn(&mut R, Option<V>),
    ) -> Self
    where
        R: Any,
        V: FieldValue + 'static,
    {
        Self {
            name,
            kind: V::KIND,
            nullable: true,
            read: Arc::new(move |record| {
                let record = downcast_ref::<R>(record)?;
                Ok(get(record).map_or(Value::Null, FieldValue::into_value))
            }),
            write: Arc::new(move |record, value| {
                let record = downcast_mut::<R>(record)?;
                if value.is_null() {
                    set(record, None);
                } else {
                    set(record, Some(V::from_value(value)?));
                }
                Ok(())
            }),
        }
    }

    /// Field name, exact and case-sensitive.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared semantic kind of the field.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Whether the field accepts a null/absent value.
    pub fn nullable(&self) -> bool {
        self.nullable
    }

    /// Read the field's value from a record; null for an absent optional.
    ///
    /// # Errors
    ///
    /// Returns an error when `record` is not the type this descriptor was
    /// built for.
    pub fn read(&self, record: &dyn Any) -> crate::Result<Value> {
        (self.read)(record)
    }

    /// Write a value into the field of a record.
    ///
    /// # Errors
    ///
    /// Returns an error when `record` is not the type this descriptor was
    /// built for, or when the value does not carry the declared kind.
    pub fn write(&self, record: &mut dyn Any, value: Value) -> crate::Result<()> {
        (self.write)(record, value)
    }
}

impl std::fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("nullable", &self.nullable)
            .finish_non_exhaustive()
    }
}

fn downcast_ref<R: Any>(record: &dyn Any) -> crate::Result<&R> {
    record.downcast_ref::<R>().ok_or(Error::Downcast {
        type_name: std::any::type_name::<R>(),
    })
}

fn downcast_mut<R: Any>(record: &mut dyn Any) -> crate::Result<&mut R> {
    record.downcast_mut::<R>().ok_or(Error::Downcast {
        type_name: std::any::type_name::<R>(),
    })
}
