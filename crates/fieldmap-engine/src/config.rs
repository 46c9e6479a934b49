//! Declarative class-map configuration
//!
//! A [`ClassMapSpec`] is the serialized form of a class map: type names,
//! field bindings, and the by-default flag. Specs are resolved against
//! record types previously registered with
//! [`MapperFactory::register_type`](crate::MapperFactory::register_type).

use serde::{Deserialize, Serialize};

use crate::Error;

/// Declarative form of one class map
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassMapSpec {
    /// Name of the source record type.
    pub source_type: String,

    /// Name of the target record type.
    pub target_type: String,

    /// Whether `by_default()` applies; recorded on the resulting class map.
    #[serde(default)]
    pub by_default: bool,

    /// Explicit field bindings.
    #[serde(default)]
    pub fields: Vec<FieldBindingSpec>,
}

/// One declarative field binding
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldBindingSpec {
    pub source: String,
    pub target: String,
}

impl ClassMapSpec {
    /// Parse a spec from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when the YAML is malformed.
    pub fn from_yaml(yaml: &str) -> crate::Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|error| Error::Configuration(format!("Failed to parse class map spec: {error}")))
    }

    /// Serialize the spec to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when serialization fails.
    pub fn to_yaml(&self) -> crate::Result<String> {
        serde_yaml::to_string(self)
            .map_err(|error| Error::Configuration(format!("Failed to serialize class map spec: {error}")))
    }
}
