//! Open option identifiers.
//!
//! Every choice field of a stall selection is an enum of the options the
//! rate table knows about plus an `Other` variant that carries any
//! identifier the client sent. Unknown identifiers survive a round trip and
//! price at zero instead of failing deserialization.

/// Declares an option enum serialized as its snake_case identifier.
///
/// ```ignore
/// option_enum! {
///     /// Wall construction material.
///     WallType {
///         Octonorm => "octonorm",
///         Mdf => "mdf",
///     }
/// }
/// ```
macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $id:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// Identifier not present in the rate table.
            Other(String),
        }

        impl $name {
            /// Every known option, in declaration order.
            pub const KNOWN: &'static [&'static str] = &[$($id),+];

            /// Returns the wire identifier used for rate lookups.
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $id,)+
                    $name::Other(raw) => raw.as_str(),
                }
            }

            /// True when the identifier is not one of the known options.
            pub fn is_other(&self) -> bool {
                matches!(self, $name::Other(_))
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                let known = match raw.as_str() {
                    $($id => Some($name::$variant),)+
                    _ => None,
                };
                known.unwrap_or_else(|| $name::Other(raw))
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::from(raw.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.as_str().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use option_enum;
