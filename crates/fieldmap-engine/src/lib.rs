//! # fieldmap-engine
//!
//! Class-map registry, converters, and the mapping facade.
//!
//! Configuration is collected on a [`MapperFactory`]: explicit field
//! bindings per ordered type pair through [`MapperFactory::class_map`], and
//! value converters through [`MapperFactory::register_converter`]. The
//! read-only [`Mapper`] facade then copies data between record types:
//! explicit bindings first, same-name matching as the fallback, registered
//! converters applied by declared kind pair.
//!
//! ## Example
//!
//! ```rust
//! use fieldmap_engine::MapperFactory;
//!
//! #[derive(Default)]
//! struct Source {
//!     id: Option<i64>,
//!     name: Option<String>,
//! }
//!
//! #[derive(Default)]
//! struct Target {
//!     id: Option<i64>,
//!     name: Option<String>,
//! }
//!
//! fieldmap_descriptor::record! {
//!     Source {
//!         optional id: i64,
//!         optional name: String,
//!     }
//! }
//!
//! fieldmap_descriptor::record! {
//!     Target {
//!         optional id: i64,
//!         optional name: String,
//!     }
//! }
//!
//! let factory = MapperFactory::new();
//! let source = Source { id: Some(1), name: Some("test".to_string()) };
//! let target: Target = factory.mapper().map(&source).unwrap();
//! assert_eq!(target.id, Some(1));
//! assert_eq!(target.name.as_deref(), Some("test"));
//! ```

/// Class maps, field bindings, and the fluent builder.
pub mod class_map;
/// Declarative class-map configuration.
pub mod config;
/// The converter trait and built-in converters.
pub mod converter;
/// The factory holding registries and the mapping facade.
pub mod factory;
/// The mapping engine itself.
pub mod mapper;

pub use class_map::{ClassMap, ClassMapBuilder, FieldBinding};
pub use config::{ClassMapSpec, FieldBindingSpec};
pub use converter::{Converter, DateToStringConverter, StringToDateConverter};
pub use factory::MapperFactory;
pub use mapper::Mapper;

use fieldmap_value::ValueKind;
use thiserror::Error;

/// Errors that can occur during configuration or mapping
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Cannot map field '{field}': no conversion from {source_kind} to {target_kind}")]
    UnmappableField {
        field: String,
        source_kind: ValueKind,
        target_kind: ValueKind,
    },

    #[error("Null value for non-nullable field '{field}'")]
    NullToPrimitive { field: String },

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error(transparent)]
    Descriptor(#[from] fieldmap_descriptor::Error),
}

/// Crate-local result type for mapping operations.
pub type Result<T> = std::result::Result<T, Error>;
