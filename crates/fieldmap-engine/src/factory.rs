//! The factory holding the binding and converter registries
//!
//! All configuration goes through `&mut MapperFactory`, so mutation is
//! serialized by the borrow checker. The [`Mapper`] facade borrows the
//! factory shared; mapping calls may run concurrently once configuration
//! has stabilized.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use fieldmap_descriptor::{DescriptorCache, Record, TypeDescriptor};
use fieldmap_value::ValueKind;

use crate::class_map::{ClassMap, ClassMapBuilder};
use crate::config::ClassMapSpec;
use crate::converter::Converter;
use crate::mapper::Mapper;
use crate::Error;

struct NamedType {
    type_id: TypeId,
    descriptor: Arc<TypeDescriptor>,
}

/// Registry of class maps, converters, and named record types
#[derive(Default)]
pub struct MapperFactory {
    descriptors: DescriptorCache,
    types_by_name: HashMap<&'static str, NamedType>,
    class_maps: HashMap<(TypeId, TypeId), ClassMap>,
    converters: HashMap<(ValueKind, ValueKind), Arc<dyn Converter>>,
}

impl MapperFactory {
    /// Create an empty factory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache `T`'s descriptor and index it by type name so declarative
    /// class-map specs can refer to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when a different type is already
    /// registered under the same name.
    pub fn register_type<T: Record>(&mut self) -> crate::Result<()> {
        let descriptor = self.descriptors.descriptor_of::<T>();
        let type_id = TypeId::of::<T>();

        if let Some(existing) = self.types_by_name.get(T::type_name()) {
            if existing.type_id != type_id {
                return Err(Error::Configuration(format!(
                    "Type name '{}' is already registered for another type",
                    T::type_name()
                )));
            }
            return Ok(());
        }

        tracing::debug!(type_name = T::type_name(), "registering record type");
        self.types_by_name.insert(
            T::type_name(),
            NamedType {
                type_id,
                descriptor,
            },
        );
        Ok(())
    }

    /// Begin fluent class-map configuration for the ordered pair (S, T).
    ///
    /// Describability is guaranteed by the [`Record`] bounds, so this never
    /// fails; field names are validated as they are bound.
    pub fn class_map<S: Record, T: Record>(&mut self) -> ClassMapBuilder<'_> {
        let source = self.descriptors.descriptor_of::<S>();
        let target = self.descriptors.descriptor_of::<T>();
        let key = (TypeId::of::<S>(), TypeId::of::<T>());
        ClassMapBuilder::new(self, source, target, key)
    }

    /// Register a class map from a declarative spec, resolving both type
    /// names against previously registered record types.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] for an unknown type name or an
    /// unknown field name.
    pub fn apply_spec(&mut self, spec: &ClassMapSpec) -> crate::Result<()> {
        let source = self.named_type(&spec.source_type)?;
        let target = self.named_type(&spec.target_type)?;
        let key = (source.type_id, target.type_id);
        let (source, target) = (Arc::clone(&source.descriptor), Arc::clone(&target.descriptor));

        let mut builder = ClassMapBuilder::new(self, source, target, key);
        for binding in &spec.fields {
            builder = builder.field(&binding.source, &binding.target)?;
        }
        if spec.by_default {
            builder = builder.by_default();
        }
        builder.register();
        Ok(())
    }

    /// Add or overwrite the converter for its declared ordered kind pair.
    pub fn register_converter(&mut self, converter: impl Converter + 'static) {
        let key = (converter.source_kind(), converter.target_kind());
        tracing::debug!(source = %key.0, target = %key.1, "registering converter");
        self.converters.insert(key, Arc::new(converter));
    }

    /// The class map registered for the ordered pair (S, T), if any.
    pub fn class_map_of<S: Record, T: Record>(&self) -> Option<&ClassMap> {
        self.class_maps
            .get(&(TypeId::of::<S>(), TypeId::of::<T>()))
    }

    /// Read-only mapping facade over this configuration.
    #[must_use]
    pub fn mapper(&self) -> Mapper<'_> {
        Mapper::new(self)
    }

    pub(crate) fn insert_class_map(&mut self, key: (TypeId, TypeId), class_map: ClassMap) {
        self.class_maps.insert(key, class_map);
    }

    pub(crate) fn descriptors(&self) -> &DescriptorCache {
        &self.descriptors
    }

    pub(crate) fn class_map_for(&self, key: (TypeId, TypeId)) -> Option<&ClassMap> {
        self.class_maps.get(&key)
    }

    pub(crate) fn converter_for(
        &self,
        source: ValueKind,
        target: ValueKind,
    ) -> Option<&Arc<dyn Converter>> {
        self.converters.get(&(source, target))
    }

    fn named_type(&self, name: &str) -> crate::Result<&NamedType> {
        self.types_by_name
            .get(name)
            .ok_or_else(|| Error::Configuration(format!("Unknown record type '{name}'")))
    }
}
