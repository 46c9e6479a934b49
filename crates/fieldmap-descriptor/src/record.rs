//! The `Record` trait and the `record!` field-table macro

use crate::TypeDescriptor;

/// A record type with a statically-registered field table
///
/// Implement by hand through [`TypeDescriptor::builder`], or declare the
/// table with the [`record!`](crate::record) macro.
pub trait Record: Sized + 'static {
    /// Stable name of the type, used for declarative configuration.
    fn type_name() -> &'static str;

    /// Build the field table. Called at most once per type in the steady
    /// state; callers go through [`DescriptorCache`](crate::DescriptorCache).
    fn descriptor() -> TypeDescriptor;
}

/// Declare the field table for an existing struct.
///
/// Each line is `required <field>: <Type>` for a plain field or
/// `optional <field>: <Type>` for an `Option<Type>` field. The field order
/// in the macro becomes the descriptor order.
///
/// ```rust
/// #[derive(Default)]
/// struct Account {
///     id: i64,
///     owner: Option<String>,
/// }
///
/// fieldmap_descriptor::record! {
///     Account {
///         required id: i64,
///         optional owner: String,
///     }
/// }
/// ```
#[macro_export]
macro_rules! record {
    ($ty:ident { $( $mode:ident $field:ident : $vty:ty ),+ $(,)? }) => {
        impl $crate::Record for $ty {
            fn type_name() -> &'static str {
                stringify!($ty)
            }

            fn descriptor() -> $crate::TypeDescriptor {
                $crate::TypeDescriptor::builder::<$ty>(stringify!($ty))
                    $(
                        .$mode::<$vty>(
                            stringify!($field),
                            |record: &$ty| record.$field.clone(),
                            |record: &mut $ty, value| record.$field = value,
                        )
                    )+
                    .build()
            }
        }
    };
}
