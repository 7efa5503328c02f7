//! Declaration macro for code lists

/// Declare a code list type and its well-known values
///
/// Each value is declared as an associated constant. After the constant name
/// come, all optional and in this order: a programmatic name in parentheses
/// when it differs from the constant name, `= "identifier"` for the ISO/UML
/// identifier, `["alias", ...]` for extra lookup names, and `: "description"`.
///
/// ```rust
/// use geoapi::{code_list, CodeList};
///
/// code_list! {
///     /// Weather hampering an acquisition.
///     pub struct Weather("XX_WeatherCode") {
///         /// Cloud cover.
///         CLOUD = "cloud";
///         FOG = "fog" ["mist"];
///         SMOG("Smog") : "Smoke mixed with fog";
///     }
/// }
///
/// assert_eq!(Weather::value_of("MIST"), Some(Weather::FOG));
/// assert_eq!(Weather::SMOG.name(), "Smog");
/// assert_eq!(Weather::values().len(), 3);
/// ```
///
/// Declaring two values with a common name (ignoring case) is a fatal error
/// raised when the code list is first used.
#[macro_export]
macro_rules! code_list {
    (@name $konst:ident) => { stringify!($konst) };
    (@name $konst:ident $name:literal) => { $name };
    (@opt) => { ::core::option::Option::None };
    (@opt $value:literal) => { ::core::option::Option::Some($value) };

    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident $(($uml:literal))? {
            $(
                $(#[$doc:meta])*
                $konst:ident $(($cname:literal))? $(= $id:literal)? $([$($alias:literal),+])? $(: $desc:literal)?;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $Name(usize);

        #[allow(dead_code, missing_docs)]
        impl $Name {
            const WELL_KNOWN: &'static [$crate::registry::WellKnown] = &[
                $(
                    $crate::registry::WellKnown {
                        name: $crate::code_list!(@name $konst $($cname)?),
                        identifier: $crate::code_list!(@opt $($id)?),
                        aliases: &[$($($alias),+)?],
                        description: $crate::code_list!(@opt $($desc)?),
                    },
                )*
            ];

            $(
                $(#[$doc])*
                pub const $konst: Self = Self($crate::registry::well_known_index(
                    Self::WELL_KNOWN,
                    $crate::code_list!(@name $konst $($cname)?),
                ));
            )*
        }

        impl $crate::CodeList for $Name {
            fn registry() -> &'static $crate::Registry {
                static REGISTRY: $crate::__private::Lazy<&'static $crate::Registry> =
                    $crate::__private::Lazy::new(|| {
                        $crate::catalog::install_well_known(
                            ::core::any::TypeId::of::<$Name>(),
                            stringify!($Name),
                            $crate::code_list!(@opt $($uml)?),
                            $Name::WELL_KNOWN,
                        )
                    });
                *REGISTRY
            }

            fn from_ordinal(ordinal: usize) -> Self {
                Self(ordinal)
            }

            fn ordinal(&self) -> usize {
                self.0
            }
        }

        impl ::core::fmt::Debug for $Name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt($crate::CodeList::entry(self), f)
            }
        }

        impl ::core::fmt::Display for $Name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::CodeList::name(self))
            }
        }

        impl ::core::str::FromStr for $Name {
            type Err = $crate::Error;

            fn from_str(name: &str) -> $crate::Result<Self> {
                $crate::code_list::parse_code(name)
            }
        }

        impl ::core::convert::From<$Name> for $crate::Code {
            fn from(code: $Name) -> Self {
                $crate::CodeList::erase(code)
            }
        }

        impl $crate::__private::serde::Serialize for $Name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::code_list::serialize_code(self, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $Name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::code_list::deserialize_code(deserializer)
            }
        }
    };
}
