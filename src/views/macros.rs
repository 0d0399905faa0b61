//! Macros for reducing boilerplate when defining view records
//!
//! Every record type needs a closed field enum with wire names; these
//! macros generate it together with its `FieldKey` implementation.

/// Declare the field enum of a record type
///
/// Each variant is paired with the wire name used in sort expressions,
/// filter objects and rendered cells.
///
/// # Example
///
/// ```rust,ignore
/// use admin_views::record_fields;
///
/// record_fields! {
///     /// Columns of the reviews table
///     pub enum ReviewField {
///         Author => "author",
///         Rating => "rating",
///         Status => "status",
///     }
/// }
///
/// assert_eq!(ReviewField::from_name("rating"), Some(ReviewField::Rating));
/// ```
#[macro_export]
macro_rules! record_fields {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::core::field::FieldKey for $name {
            fn name(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }

            fn all() -> &'static [Self] {
                &[ $( $name::$variant ),+ ]
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::field::FieldKey::name(self))
            }
        }
    };
}
