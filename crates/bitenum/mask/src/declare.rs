/// Declare a flag newtype and register it as a bitmask type.
///
/// Generates the struct, one associated constant per flag,
/// [`BitmaskEnum`](crate::BitmaskEnum), the bitwise operators, `Debug`,
/// `FromStr` and (with the `serde` feature) `Serialize`/`Deserialize`.
/// `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd` and `Ord` are
/// derived, so do not derive them again.
///
/// ```
/// use bitenum_mask::bitmask;
///
/// bitmask! {
///     /// Window decorations.
///     pub struct Decor: u32 {
///         const TITLE = 1 << 0;
///         const BORDER = 1 << 1;
///         const SHADOW = 1 << 2;
///         const FRAME = Self::TITLE.bits() | Self::BORDER.bits();
///     }
/// }
///
/// let decor = Decor::FRAME | Decor::SHADOW;
/// assert_eq!(decor, Decor::all());
/// assert_eq!(format!("{decor:?}"), "Decor(TITLE | BORDER | SHADOW)");
/// ```
#[macro_export]
macro_rules! bitmask {
    (@all $repr:ty;) => {
        <$repr as $crate::Bits>::ALL_ONES
    };
    (@all $repr:ty; $($flag:ident)+) => {
        0 $(| Self::$flag.0)+
    };
    (
        $(#[$outer:meta])*
        $vis:vis struct $name:ident: $repr:ty {
            $(
                $(#[$inner:meta])*
                const $flag:ident = $value:expr;
            )*
        }
    ) => {
        $(#[$outer])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        $vis struct $name($repr);

        #[allow(dead_code)]
        impl $name {
            $(
                $(#[$inner])*
                pub const $flag: Self = Self($value);
            )*

            /// The value with no bits set.
            #[inline]
            pub const fn empty() -> Self {
                Self(0)
            }

            /// Union of every named flag, or every bit when none are declared.
            #[inline]
            pub const fn all() -> Self {
                Self($crate::bitmask!(@all $repr; $($flag)*))
            }

            /// Wrap raw bits, keeping bits that belong to no flag.
            #[inline]
            pub const fn from_bits(bits: $repr) -> Self {
                Self(bits)
            }

            #[inline]
            pub const fn bits(self) -> $repr {
                self.0
            }

            #[inline]
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// Check if every bit of `other` is set.
            #[inline]
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }
        }

        impl $crate::BitmaskEnum for $name {
            type Repr = $repr;
            const NONE: Self = Self::empty();
            const ALL: Self = Self::all();
            const FLAGS: &'static [(&'static str, Self)] = &[
                $((::core::stringify!($flag), Self::$flag),)*
            ];

            #[inline]
            fn from_bits(bits: $repr) -> Self {
                Self(bits)
            }

            #[inline]
            fn bits(self) -> $repr {
                self.0
            }
        }

        $crate::impl_bitmask_ops!($name);

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(::core::stringify!($name))?;
                f.write_str("(")?;
                $crate::write_flags(*self, f)?;
                f.write_str(")")
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::ParseError;

            fn from_str(input: &str) -> ::core::result::Result<Self, Self::Err> {
                $crate::from_str(input)
            }
        }

        $crate::__impl_serde!($name);
    };
}

#[cfg(feature = "serde")]
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_serde {
    ($name:ident) => {
        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::serde::serialize(self, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::serde::deserialize(deserializer)
            }
        }
    };
}

#[cfg(not(feature = "serde"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_serde {
    ($name:ident) => {};
}
