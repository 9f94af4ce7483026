//! Macros for declaring reference-data entities
//!
//! Every reference kind served by `/referenceData/*` shares the same
//! `id`/`label`/`value` triple; kinds scoped to a parent add extra fields.
//! The macro generates the struct together with its [`ReferenceItem`] and
//! [`AsLabel`] implementations so the filter helpers and search builders
//! accept any of them.
//!
//! # Example
//!
//! ```rust
//! use kcdb_domain::{reference_data, ReferenceItem};
//!
//! reference_data!(
//!     /// A unit of something.
//!     Widget
//! );
//!
//! let widget = Widget { id: 1, label: "W".into(), value: "Widget".into() };
//! assert_eq!(widget.label(), "W");
//! ```
//!
//! [`ReferenceItem`]: crate::types::reference::ReferenceItem
//! [`AsLabel`]: crate::types::reference::AsLabel

/// Declares a reference-data struct with optional parent fields.
///
/// Generated structs derive `Debug`, `Clone`, equality, hashing, ordering and
/// serde support. Ordering compares `id`, then `label`, then `value`, then
/// the extra fields in declaration order.
#[macro_export]
macro_rules! reference_data {
    (
        $(#[$meta:meta])*
        $name:ident
        $({
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty
            ),* $(,)?
        })?
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        pub struct $name {
            /// Reference data identity.
            pub id: i64,
            /// Reference data label.
            pub label: String,
            /// Reference data value.
            pub value: String,
            $($(
                $(#[$field_meta])*
                pub $field: $ty,
            )*)?
        }

        impl $crate::types::reference::ReferenceItem for $name {
            fn id(&self) -> i64 {
                self.id
            }

            fn label(&self) -> &str {
                &self.label
            }

            fn value(&self) -> &str {
                &self.value
            }
        }

        impl $crate::types::reference::AsLabel for &$name {
            fn as_label(&self) -> &str {
                &self.label
            }
        }
    };
}

/// Implements `Display` and `FromStr` for enums carried verbatim on the wire.
///
/// Unlike labels, these values are matched exactly: the server only ever
/// sends the canonical spelling, so anything else is a schema mismatch.
///
/// # Example
///
/// ```rust
/// use kcdb_domain::impl_wire_enum;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// pub enum Mode {
///     Absolute,
///     Relative,
/// }
///
/// impl_wire_enum!(Mode {
///     Absolute => "Absolute",
///     Relative => "Relative",
/// });
///
/// assert_eq!("Relative".parse::<Mode>(), Ok(Mode::Relative));
/// ```
#[macro_export]
macro_rules! impl_wire_enum {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::types::reference::{AsLabel, ReferenceItem};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Mode {
        Absolute,
        Relative,
    }

    impl_wire_enum!(Mode {
        Absolute => "Absolute",
        Relative => "Relative",
    });

    reference_data!(
        /// Scoped test kind.
        Probe {
            parent: String,
        }
    );

    #[test]
    fn test_wire_enum_roundtrip() {
        for mode in [Mode::Absolute, Mode::Relative] {
            assert_eq!(Mode::from_str(&mode.to_string()), Ok(mode));
        }
    }

    #[test]
    fn test_wire_enum_is_case_sensitive() {
        let result = Mode::from_str("ABSOLUTE");
        assert_eq!(result, Err("Invalid Mode: ABSOLUTE".to_string()));
    }

    #[test]
    fn test_reference_data_accessors() {
        let probe = Probe { id: 3, label: "P".into(), value: "Probe".into(), parent: "x".into() };
        assert_eq!(probe.id(), 3);
        assert_eq!(probe.label(), "P");
        assert_eq!(probe.value(), "Probe");
        assert_eq!((&probe).as_label(), "P");
    }

    #[test]
    fn test_reference_data_orders_by_id_first() {
        let a = Probe { id: 1, label: "Z".into(), value: String::new(), parent: String::new() };
        let b = Probe { id: 2, label: "A".into(), value: String::new(), parent: String::new() };
        assert!(a < b);
    }
}
