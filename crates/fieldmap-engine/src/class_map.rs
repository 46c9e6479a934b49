//! Class maps, field bindings, and the fluent builder
//!
//! A [`ClassMap`] collects the explicit field bindings for one ordered pair
//! of record types. Binding names are validated against both descriptors
//! when recorded, so an unknown field is a registration-time error and never
//! a mapping-time one. The reverse pair is an independent registration;
//! nothing is inferred bidirectionally.

use std::any::TypeId;
use std::sync::Arc;

use fieldmap_descriptor::TypeDescriptor;

use crate::factory::MapperFactory;
use crate::Error;

/// An explicit source-field to target-field correspondence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    source_field: String,
    target_field: String,
}

impl FieldBinding {
    pub(crate) fn new(source_field: impl Into<String>, target_field: impl Into<String>) -> Self {
        Self {
            source_field: source_field.into(),
            target_field: target_field.into(),
        }
    }

    /// Name of the bound field on the source type.
    pub fn source_field(&self) -> &str {
        &self.source_field
    }

    /// Name of the bound field on the target type.
    pub fn target_field(&self) -> &str {
        &self.target_field
    }
}

/// Explicit bindings and matching policy for one ordered type pair
#[derive(Debug, Clone, Default)]
pub struct ClassMap {
    bindings: Vec<FieldBinding>,
    by_default: bool,
}

impl ClassMap {
    pub(crate) fn new(bindings: Vec<FieldBinding>, by_default: bool) -> Self {
        Self {
            bindings,
            by_default,
        }
    }

    /// Registered bindings in registration order.
    pub fn bindings(&self) -> &[FieldBinding] {
        &self.bindings
    }

    /// Whether `by_default()` was called when building this map.
    ///
    /// The engine applies same-name fallback either way; the flag is kept
    /// for interface symmetry with the default matching algorithm.
    pub fn by_default(&self) -> bool {
        self.by_default
    }

    /// The binding naming this target field, if any. The most recently
    /// recorded binding wins.
    pub fn binding_for_target(&self, target_field: &str) -> Option<&FieldBinding> {
        self.bindings
            .iter()
            .rev()
            .find(|b| b.target_field == target_field)
    }
}

/// Fluent configuration for one ordered type pair
///
/// Obtained from [`MapperFactory::class_map`]; committed with
/// [`register`](ClassMapBuilder::register), which replaces any previous
/// class map for the same ordered pair.
pub struct ClassMapBuilder<'a> {
    factory: &'a mut MapperFactory,
    source: Arc<TypeDescriptor>,
    target: Arc<TypeDescriptor>,
    key: (TypeId, TypeId),
    bindings: Vec<FieldBinding>,
    by_default: bool,
}

impl<'a> ClassMapBuilder<'a> {
    pub(crate) fn new(
        factory: &'a mut MapperFactory,
        source: Arc<TypeDescriptor>,
        target: Arc<TypeDescriptor>,
        key: (TypeId, TypeId),
    ) -> Self {
        Self {
            factory,
            source,
            target,
            key,
            bindings: Vec::new(),
            by_default: false,
        }
    }

    /// Record one explicit binding from a source field to a target field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when either name is absent from its
    /// respective descriptor.
    pub fn field(mut self, source_field: &str, target_field: &str) -> crate::Result<Self> {
        if !self.source.has_field(source_field) {
            return Err(Error::Configuration(format!(
                "Unknown field '{}' on source type {}",
                source_field,
                self.source.name()
            )));
        }
        if !self.target.has_field(target_field) {
            return Err(Error::Configuration(format!(
                "Unknown field '{}' on target type {}",
                target_field,
                self.target.name()
            )));
        }

        self.bindings.push(FieldBinding::new(source_field, target_field));
        Ok(self)
    }

    /// Mark that unbound fields fall back to same-name matching.
    ///
    /// The engine always applies same-name fallback, so this only records
    /// the flag on the resulting [`ClassMap`].
    #[must_use]
    pub fn by_default(mut self) -> Self {
        self.by_default = true;
        self
    }

    /// Commit the class map, replacing any previous one for this pair.
    pub fn register(self) {
        tracing::debug!(
            source = self.source.name(),
            target = self.target.name(),
            bindings = self.bindings.len(),
            "registering class map"
        );
        self.factory
            .insert_class_map(self.key, ClassMap::new(self.bindings, self.by_default));
    }
}

impl std::fmt::Debug for ClassMapBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassMapBuilder")
            .field("source", &self.source.name())
            .field("target", &self.target.name())
            .field("bindings", &self.bindings)
            .field("by_default", &self.by_default)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_for_target() {
        let map = ClassMap::new(
            vec![
                FieldBinding::new("email", "my_email"),
                FieldBinding::new("name", "my_email"),
            ],
            true,
        );

        // Later binding for the same target wins.
        let binding = map.binding_for_target("my_email").unwrap();
        assert_eq!(binding.source_field(), "name");
        assert!(map.binding_for_target("other").is_none());
    }

    #[test]
    fn test_empty_class_map() {
        let map = ClassMap::default();
        assert!(map.bindings().is_empty());
        assert!(!map.by_default());
        assert!(map.binding_for_target("anything").is_none());
    }
}
