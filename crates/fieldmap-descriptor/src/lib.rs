//! # fieldmap-descriptor
//!
//! Field tables, record descriptors, and the descriptor cache.
//!
//! A [`TypeDescriptor`] is the statically-registered equivalent of a
//! reflective type description: an ordered table of named fields, each with
//! a declared [`ValueKind`](fieldmap_value::ValueKind), a nullability flag,
//! and type-erased read/write accessors. Descriptors are computed at most
//! once per type through the [`DescriptorCache`] and are immutable after
//! construction.
//!
//! ## Example
//!
//! ```rust
//! use fieldmap_descriptor::Record;
//!
//! #[derive(Default)]
//! struct Person {
//!     name: Option<String>,
//!     age: i64,
//! }
//!
//! fieldmap_descriptor::record! {
//!     Person {
//!         optional name: String,
//!         required age: i64,
//!     }
//! }
//!
//! let descriptor = Person::descriptor();
//! assert_eq!(descriptor.len(), 2);
//! assert!(descriptor.field("age").is_some());
//! ```

/// Concurrent descriptor cache keyed by type identity.
pub mod cache;
/// Type descriptors and their builder.
pub mod descriptor;
/// Per-field metadata and type-erased accessors.
pub mod field;
/// The `Record` trait implemented by mappable types.
pub mod record;

pub use cache::DescriptorCache;
pub use descriptor::{TypeDescriptor, TypeDescriptorBuilder};
pub use field::FieldDescriptor;
pub use record::Record;

use thiserror::Error;

/// Errors that can occur when working with descriptors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Record downcast failed: accessor for {type_name} invoked on another type")]
    Downcast { type_name: &'static str },

    #[error(transparent)]
    Value(#[from] fieldmap_value::Error),
}

/// Crate-local result type for descriptor operations.
pub type Result<T> = std::result::Result<T, Error>;
