//! Provides some useful macros to avoid repetitive code.

/// A macro to define a closed set of options which have a stable textual representation.
macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident as $desc:literal {
        $($(#[$vmeta:meta])* $variant:ident => $value:literal,)+
    }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            #[doc = " All variants in declaration order."]
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            #[doc = " Returns a textual representation used in external formats."]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::utils::GenericError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($value => Ok($name::$variant),)+
                    _ => Err(format!("unknown {}: '{}'", $desc, value).into()),
                }
            }
        }
    };
}
