//! Concurrent descriptor cache keyed by type identity

use std::any::TypeId;
use std::sync::Arc;

use dashmap::DashMap;

use crate::{Record, TypeDescriptor};

/// Cache computing each type's descriptor at most once in the steady state
///
/// Safe under concurrent first-use: two callers racing on the same type both
/// compute equal descriptors and the last writer wins.
#[derive(Debug, Default)]
pub struct DescriptorCache {
    descriptors: DashMap<TypeId, Arc<TypeDescriptor>>,
}

impl DescriptorCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            descriptors: DashMap::new(),
        }
    }

    /// Get or compute the descriptor for `T`.
    pub fn descriptor_of<T: Record>(&self) -> Arc<TypeDescriptor> {
        if let Some(found) = self.descriptors.get(&TypeId::of::<T>()) {
            return Arc::clone(&found);
        }

        tracing::debug!(type_name = T::type_name(), "computing type descriptor");
        let descriptor = Arc::new(T::descriptor());
        self.descriptors
            .insert(TypeId::of::<T>(), Arc::clone(&descriptor));
        descriptor
    }

    /// Whether a descriptor for `T` has already been computed.
    pub fn contains<T: Record>(&self) -> bool {
        self.descriptors.contains_key(&TypeId::of::<T>())
    }

    /// Number of cached descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
