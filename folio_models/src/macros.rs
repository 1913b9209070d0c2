/// Defines a closed set of `<select>` options.
///
/// Each variant carries the value submitted by the form and the label shown
/// to humans. Serde and [`FromStr`](std::str::FromStr) use the value,
/// [`Display`](std::fmt::Display) uses the label.
macro_rules! select_options {
    (
        $(#[$meta:meta])*
        $vis:vis enum $ident:ident {
            $($variant:ident($value:tt, $label:tt)),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize,
        )]
        $vis enum $ident {
            $(#[serde(rename = $value)] $variant,)*
        }

        impl $ident {
            pub const ALL: &[Self] = &[$(Self::$variant),*];

            pub fn value(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)*
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)*
                }
            }
        }

        impl ::std::str::FromStr for $ident {
            type Err = $crate::contact::UnknownSelectOption;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.value() == s)
                    .ok_or($crate::contact::UnknownSelectOption)
            }
        }

        impl ::std::fmt::Display for $ident {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

pub(crate) use select_options;
