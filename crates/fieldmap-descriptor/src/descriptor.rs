//! Type descriptors and their builder

use std::any::{Any, TypeId};
use std::marker::PhantomData;

use fieldmap_value::FieldValue;

use crate::field::FieldDescriptor;

/// Ordered field table describing one record type; immutable after build
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    name: &'static str,
    type_id: TypeId,
    fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    /// Begin building a descriptor for record type `R`.
    pub fn builder<R: Any>(name: &'static str) -> TypeDescriptorBuilder<R> {
        TypeDescriptorBuilder {
            name,
            fields: Vec::new(),
            _record: PhantomData,
        }
    }

    /// Name of the described type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Identity of the described type.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Look up a field by exact, case-sensitive name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Whether a field with this exact name exists.
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Number of described fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the descriptor has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builder collecting the field table for one record type
pub struct TypeDescriptorBuilder<R: Any> {
    name: &'static str,
    fields: Vec<FieldDescriptor>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Any> TypeDescriptorBuilder<R> {
    /// Add a pre-built field descriptor.
    #[must_use]
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a non-nullable field backed by `V`.
    #[must_use]
    pub fn required<V>(self, name: &'static str, get: fn(&R) -> V, set: fn(&mut R, V)) -> Self
    where
        V: FieldValue + 'static,
    {
        self.field(FieldDescriptor::required::<R, V>(name, get, set))
    }

    /// Add a nullable field backed by `Option<V>`.
    #[must_use]
    pub fn optional<V>(
        self,
        name: &'static str,
        get: fn(&R) -> Option<V>,
        set: fn(&mut R, Option<V>),
    ) -> Self
    where
        V: FieldValue + 'static,
    {
        self.field(FieldDescriptor::optional::<R, V>(name, get, set))
    }

    /// Finish the descriptor.
    #[must_use]
    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor {
            name: self.name,
            type_id: TypeId::of::<R>(),
            fields: self.fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldmap_value::{Value, ValueKind};

    #[derive(Default)]
    struct Order {
        number: Option<String>,
        total: f64,
        paid: Option<bool>,
    }

    fn order_descriptor() -> TypeDescriptor {
        TypeDescriptor::builder::<Order>("Order")
            .optional("number", |o| o.number.clone(), |o, v| o.number = v)
            .required("total", |o| o.total, |o, v| o.total = v)
            .optional("paid", |o| o.paid, |o, v| o.paid = v)
            .build()
    }

    #[test]
    fn test_fields_keep_declaration_order() {
        let descriptor = order_descriptor();
        let names: Vec<&str> = descriptor.fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["number", "total", "paid"]);
    }

    #[test]
    fn test_field_lookup_is_exact_and_case_sensitive() {
        let descriptor = order_descriptor();
        assert!(descriptor.has_field("total"));
        assert!(!descriptor.has_field("Total"));
        assert!(!descriptor.has_field("tot"));
    }

    #[test]
    fn test_descriptor_identity() {
        let descriptor = order_descriptor();
        assert_eq!(descriptor.name(), "Order");
        assert_eq!(descriptor.type_id(), TypeId::of::<Order>());
        assert_eq!(descriptor.len(), 3);
        assert!(!descriptor.is_empty());
    }

    #[test]
    fn test_declared_kinds() {
        let descriptor = order_descriptor();
        assert_eq!(descriptor.field("number").unwrap().kind(), ValueKind::String);
        assert_eq!(descriptor.field("total").unwrap().kind(), ValueKind::Decimal);
        assert!(descriptor.field("number").unwrap().nullable());
        assert!(!descriptor.field("total").unwrap().nullable());
    }

    #[test]
    fn test_accessors_round_trip_through_descriptor() {
        let descriptor = order_descriptor();
        let mut order = Order::default();

        descriptor
            .field("number")
            .unwrap()
            .write(&mut order, Value::String("ORD-1".to_string()))
            .unwrap();
        assert_eq!(order.number.as_deref(), Some("ORD-1"));
        assert_eq!(
            descriptor.field("number").unwrap().read(&order).unwrap(),
            Value::String("ORD-1".to_string())
        );
    }
}
