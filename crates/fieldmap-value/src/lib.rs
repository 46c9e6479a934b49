#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # fieldmap-value
//!
//! Dynamic value model and typed field bridging for record mapping.
//!
//! This crate provides the scalar [`Value`] enum exchanged between records
//! during mapping, the [`ValueKind`] tags describing a field's declared
//! semantic type, and the [`FieldValue`] bridge between concrete Rust field
//! types and the dynamic model.

/// Bridge between concrete Rust field types and dynamic values.
pub mod bridge;
mod numeric;
/// Scalar value model and kind tags.
pub mod value;

pub use bridge::FieldValue;
pub use value::{Value, ValueKind};

use thiserror::Error;

/// Errors that can occur when working with dynamic values
#[derive(Error, Debug)]
pub enum Error {
    #[error("Kind mismatch: expected {expected}, found {found}")]
    KindMismatch { expected: ValueKind, found: String },

    #[error("Coercion error: {0}")]
    Coercion(String),
}

impl Error {
    /// Build a kind-mismatch error from the expected kind and the raw value.
    pub fn kind_mismatch(expected: ValueKind, found: &Value) -> Self {
        Self::KindMismatch {
            expected,
            found: found.kind_name().to_string(),
        }
    }
}

/// Crate-local result type for value operations.
pub type Result<T> = std::result::Result<T, Error>;
