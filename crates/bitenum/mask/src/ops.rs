/// Implement the bitwise operators for registered bitmask types.
///
/// Each type must already implement [`BitmaskEnum`](crate::BitmaskEnum);
/// the operators delegate to its named algebra, so unregistered types fail
/// to compile here rather than at the call site.
///
/// ```
/// use bitenum_mask::{impl_bitmask_ops, BitmaskEnum};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Lights(u16);
///
/// impl BitmaskEnum for Lights {
///     type Repr = u16;
///     const NONE: Self = Lights(0);
///     const ALL: Self = Lights(0b11);
///
///     fn from_bits(bits: u16) -> Self {
///         Lights(bits)
///     }
///
///     fn bits(self) -> u16 {
///         self.0
///     }
/// }
///
/// impl_bitmask_ops!(Lights);
///
/// let mut lights = Lights(0b01);
/// lights |= Lights(0b10);
/// assert_eq!(lights, Lights(0b11));
/// ```
#[macro_export]
macro_rules! impl_bitmask_ops {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ::core::ops::BitOr for $ty {
                type Output = Self;

                #[inline]
                fn bitor(self, rhs: Self) -> Self {
                    <Self as $crate::BitmaskEnum>::union(self, rhs)
                }
            }

            impl ::core::ops::BitAnd for $ty {
                type Output = Self;

                #[inline]
                fn bitand(self, rhs: Self) -> Self {
                    <Self as $crate::BitmaskEnum>::intersection(self, rhs)
                }
            }

            impl ::core::ops::BitXor for $ty {
                type Output = Self;

                #[inline]
                fn bitxor(self, rhs: Self) -> Self {
                    <Self as $crate::BitmaskEnum>::symmetric_difference(self, rhs)
                }
            }

            impl ::core::ops::Not for $ty {
                type Output = Self;

                #[inline]
                fn not(self) -> Self {
                    <Self as $crate::BitmaskEnum>::complement(self)
                }
            }

            impl ::core::ops::BitOrAssign for $ty {
                #[inline]
                fn bitor_assign(&mut self, rhs: Self) {
                    *self = <Self as $crate::BitmaskEnum>::union(*self, rhs);
                }
            }

            impl ::core::ops::BitAndAssign for $ty {
                #[inline]
                fn bitand_assign(&mut self, rhs: Self) {
                    *self = <Self as $crate::BitmaskEnum>::intersection(*self, rhs);
                }
            }

            impl ::core::ops::BitXorAssign for $ty {
                #[inline]
                fn bitxor_assign(&mut self, rhs: Self) {
                    *self = <Self as $crate::BitmaskEnum>::symmetric_difference(*self, rhs);
                }
            }
        )+
    };
}
