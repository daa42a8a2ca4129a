use std::fmt::{Binary, Debug, LowerHex};
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// Fixed-width integer that can back a bitmask type.
pub trait Bits:
    Copy
    + Eq
    + Hash
    + Debug
    + Binary
    + LowerHex
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ALL_ONES: Self;
    const BITS: u32;

    fn count_ones(self) -> u32;

    /// Parse digits in `radix`. Non-decimal digits are read as the unsigned
    /// type of the same width, so `ff` is `-1` for `i8`.
    fn from_str_radix(src: &str, radix: u32) -> Option<Self>;

    fn try_from_u128(value: u128) -> Option<Self>;

    fn try_from_i128(value: i128) -> Option<Self>;
}

macro_rules! impl_bits {
    ($($t:ty => $unsigned:ty),+ $(,)?) => {
        $(
            impl Bits for $t {
                const ZERO: Self = 0;
                const ALL_ONES: Self = !0;
                const BITS: u32 = <$t>::BITS;

                #[inline]
                fn count_ones(self) -> u32 {
                    <$t>::count_ones(self)
                }

                #[allow(clippy::cast_possible_wrap, clippy::unnecessary_cast)]
                fn from_str_radix(src: &str, radix: u32) -> Option<Self> {
                    if radix == 10 {
                        return <$t>::from_str_radix(src, radix).ok();
                    }
                    <$unsigned>::from_str_radix(src, radix).ok().map(|bits| bits as $t)
                }

                fn try_from_u128(value: u128) -> Option<Self> {
                    <$t>::try_from(value).ok()
                }

                fn try_from_i128(value: i128) -> Option<Self> {
                    <$t>::try_from(value).ok()
                }
            }
        )+
    };
}

impl_bits!(
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    u128 => u128,
    usize => usize,
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
);
