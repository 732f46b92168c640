//! Macro for declaring open integer enums
//!
//! The remote API grows its enums over time, so closed Rust enums would
//! turn every new value into a decode failure. This macro declares an
//! integer newtype with named constants for the known values: unknown
//! integers are carried through untouched and compare by value, and
//! `Display` falls back to `Unknown(<n>)` rather than failing.
//!
//! # Example
//!
//! ```rust
//! use tricorn_domain::int_enum;
//!
//! int_enum! {
//!     /// Damage types a weapon can deal.
//!     pub struct DamageType(i32) {
//!         NONE = 0 => "None",
//!         KINETIC = 1 => "Kinetic",
//!         ARC = 2 => "Arc",
//!     }
//! }
//!
//! assert_eq!(DamageType::ARC.value(), 2);
//! assert_eq!(DamageType::from(99i64).to_string(), "Unknown(99)");
//! ```

/// Declares an open integer enum as a transparent newtype over an
/// integer representation.
///
/// Generates:
/// - associated constants for every named value
/// - `value()` returning the raw integer the remote transmits
/// - `Display` with an `Unknown(<n>)` fallback
/// - lossless `From` conversions to and from the integer forms the
///   deserialization framework reads out of JSON
#[macro_export]
macro_rules! int_enum {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($repr:ty) {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub $repr);

        impl $name {
            $( $(#[$vmeta])* pub const $variant: Self = Self($value); )+

            /// The raw integer value as the remote API transmits it.
            #[must_use]
            pub const fn value(self) -> $repr {
                self.0
            }

            /// Whether this value is one the library knows by name.
            #[must_use]
            pub const fn is_known(self) -> bool {
                matches!(self.0, $($value)|+)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self.0 {
                    $($value => write!(f, $label),)+
                    other => write!(f, "Unknown({other})"),
                }
            }
        }

        impl From<$repr> for $name {
            fn from(value: $repr) -> Self {
                Self(value)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value as $repr)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0 as i64
            }
        }
    };
}
