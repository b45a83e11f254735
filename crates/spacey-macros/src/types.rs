// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Type definition macros.
//!
//! Provides macros for defining types with common patterns.

/// Define a C-style enum with a total, two-way string conversion.
///
/// Every variant is paired with exactly one name. The macro generates:
///
/// - `ALL`: every variant, in declaration order
/// - `as_str`: variant to name
/// - `from_name`: name to variant (`None` for unknown names)
/// - a `Display` impl that writes the name
///
/// Variants may carry their own attributes (doc comments included).
///
/// # Example
///
/// ```
/// use spacey_macros::str_enum;
///
/// str_enum! {
///     #[derive(Debug, Clone, Copy, PartialEq)]
///     pub enum Status {
///         /// Currently running
///         Active => "active",
///         Inactive => "inactive",
///         Pending => "pending",
///     }
/// }
///
/// assert_eq!(Status::Active.as_str(), "active");
/// assert_eq!(Status::from_name("inactive"), Some(Status::Inactive));
/// assert_eq!(Status::from_name("unknown"), None);
/// assert_eq!(Status::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! str_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $str:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant
            ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the stable name of this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }

            /// Looks a variant up by its stable name.
            pub fn from_name(s: &str) -> Option<Self> {
                match s {
                    $($str => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    str_enum! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Radix {
            /// Base 2
            Binary => "BINARY",
            Octal => "OCTAL",
            Hex => "HEX",
        }
    }

    #[test]
    fn test_names_round_trip() {
        for radix in Radix::ALL {
            assert_eq!(Radix::from_name(radix.as_str()), Some(*radix));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(Radix::from_name("DECIMAL"), None);
        assert_eq!(Radix::from_name("binary"), None);
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Radix::Hex.to_string(), "HEX");
    }
}
