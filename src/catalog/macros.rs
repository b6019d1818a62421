//! Macro for declaring the pattern registry.

/// Generate a catalogue enum from `Variant => "name"` pairs.
///
/// The generated enum serializes as its name and gets an `ALL` constant in
/// declaration order, `name()`, `Display`, and a `FromStr` that accepts
/// exactly the declared names.
///
/// # Example
///
/// ```
/// use patterns::pattern_catalog;
///
/// pattern_catalog! {
///     pub enum Demo {
///         First => "first",
///         Second => "second",
///     }
/// }
///
/// assert_eq!(Demo::ALL, [Demo::First, Demo::Second]);
/// assert_eq!(Demo::Second.name(), "second");
/// assert_eq!("first".parse::<Demo>().unwrap(), Demo::First);
/// assert!("third".parse::<Demo>().is_err());
/// ```
#[macro_export]
macro_rules! pattern_catalog {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $key:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $key)]
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: [Self; [$(stringify!($variant)),*].len()] = [$(Self::$variant),*];

            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $key),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::catalog::UnknownPattern;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($key => Ok(Self::$variant),)*
                    other => Err($crate::catalog::UnknownPattern(other.to_string())),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    pattern_catalog! {
        enum Sample {
            One => "one",
            Two => "two",
            Three => "three",
        }
    }

    #[test]
    fn all_lists_variants_in_order() {
        assert_eq!(Sample::ALL, [Sample::One, Sample::Two, Sample::Three]);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for sample in Sample::ALL {
            assert_eq!(Sample::from_str(sample.name()).unwrap(), sample);
            assert_eq!(sample.to_string(), sample.name());
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = Sample::from_str("four").unwrap_err();
        assert_eq!(err.0, "four");
    }

    #[test]
    fn catalogue_enum_serializes_by_name() {
        let json = serde_json::to_string(&Sample::Two).unwrap();
        assert_eq!(json, "\"two\"");
    }

    #[test]
    fn single_variant_catalogue() {
        pattern_catalog! {
            pub enum Lonely {
                Only => "only",
            }
        }

        assert_eq!(Lonely::ALL.len(), 1);
    }
}
