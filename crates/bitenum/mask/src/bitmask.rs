use crate::{BitmaskEnum, Bits};

/// Read-only view over one value of a bitmask type.
///
/// Every query is defined relative to the zero value `T::NONE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bitmask<T: BitmaskEnum>(T);

impl<T: BitmaskEnum> Bitmask<T> {
    /// Wrap a value for querying.
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Return the wrapped value.
    #[inline]
    pub fn get(self) -> T {
        self.0
    }

    /// Check if any bit is set.
    #[inline]
    pub fn any(self) -> bool {
        !self.none()
    }

    /// Check if all bits are clear.
    #[inline]
    pub fn none(self) -> bool {
        self.0.bits() == <T::Repr as Bits>::ZERO
    }

    /// Check if any bit of `mask` is set.
    #[inline]
    pub fn any_of(self, mask: T) -> bool {
        !self.none_of(mask)
    }

    /// Check if every bit of `mask` is set. True for an empty mask.
    #[inline]
    pub fn all_of(self, mask: T) -> bool {
        self.0.bits() & mask.bits() == mask.bits()
    }

    /// Check if no bit of `mask` is set.
    #[inline]
    pub fn none_of(self, mask: T) -> bool {
        self.0.bits() & mask.bits() == <T::Repr as Bits>::ZERO
    }

    /// Check if any bit outside of `mask` is set.
    #[inline]
    pub fn any_except(self, mask: T) -> bool {
        !self.none_except(mask)
    }

    /// Check if the value is a subset of `mask`.
    #[inline]
    pub fn none_except(self, mask: T) -> bool {
        self.0.bits() & !mask.bits() == <T::Repr as Bits>::ZERO
    }

    /// Count the number of bits set.
    #[inline]
    pub fn count(self) -> u32 {
        self.0.bits().count_ones()
    }

    /// Names of the flags fully contained in the value, in declaration order.
    pub fn iter_names(self) -> impl Iterator<Item = &'static str> {
        T::FLAGS
            .iter()
            .filter(move |(_, flag)| !flag.is_none() && self.all_of(*flag))
            .map(|(name, _)| *name)
    }
}

impl<T: BitmaskEnum> From<T> for Bitmask<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: BitmaskEnum> From<Bitmask<T>> for bool {
    fn from(mask: Bitmask<T>) -> Self {
        mask.any()
    }
}

#[cfg(feature = "serde")]
impl<T> ::serde::Serialize for Bitmask<T>
where
    T: BitmaskEnum,
    T::Repr: ::serde::Serialize,
{
    fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        crate::serde::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: BitmaskEnum> ::serde::Deserialize<'de> for Bitmask<T> {
    fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        crate::serde::deserialize(deserializer).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::Bitmask;
    use crate::bitmask;

    bitmask! {
        struct Flag: u8 {
            const A = 1 << 0;
            const B = 1 << 1;
            const C = 1 << 2;
            const D = 1 << 3;
        }
    }

    const Z: Flag = Flag::empty();

    fn q(value: Flag) -> Bitmask<Flag> {
        Bitmask::new(value)
    }

    #[test]
    fn zero_has_no_bits() {
        assert!(!q(Z).any());
        assert!(q(Z).none());
        assert!(!bool::from(q(Z)));
    }

    #[test]
    fn none_is_negation_of_any() {
        for bits in 0..=u8::MAX {
            let mask = q(Flag::from_bits(bits));
            assert_eq!(mask.none(), !mask.any());
            assert_eq!(bool::from(mask), mask.any());
        }
    }

    #[test]
    fn all_of_requires_every_bit() {
        let ab = q(Flag::A | Flag::B);
        assert!(ab.all_of(Flag::A));
        assert!(ab.all_of(Flag::B));
        assert!(ab.all_of(Flag::A | Flag::B));
        assert!(!ab.all_of(Flag::A | Flag::B | Flag::C));
    }

    #[test]
    fn any_of_requires_one_bit() {
        let ab = q(Flag::A | Flag::B);
        assert!(ab.any_of(Flag::A));
        assert!(ab.any_of(Flag::B | Flag::C));
        assert!(!ab.any_of(Flag::C));
    }

    #[test]
    fn none_of_is_complement_of_any_of() {
        assert!(q(Flag::A).none_of(Flag::B));
        assert!(!q(Flag::A | Flag::B).none_of(Flag::B));
        for bits in 0..16 {
            let mask = q(Flag::from_bits(bits));
            for other in [Z, Flag::A, Flag::C | Flag::D, Flag::all()] {
                assert_eq!(mask.none_of(other), !mask.any_of(other));
            }
        }
    }

    #[test]
    fn any_except_looks_outside_mask() {
        assert!(q(Flag::A | Flag::B).any_except(Flag::A));
        assert!(!q(Flag::A).any_except(Flag::A | Flag::B));
        assert!(!q(Z).any_except(Flag::A));
    }

    #[test]
    fn none_except_is_subset() {
        assert!(q(Flag::A).none_except(Flag::A | Flag::B));
        assert!(!q(Flag::A | Flag::B).none_except(Flag::A));
        assert!(q(Flag::A | Flag::B).none_except(Flag::A | Flag::B));
    }

    #[test]
    fn zero_mask_edge_cases() {
        let ab = q(Flag::A | Flag::B);
        assert!(ab.all_of(Z));
        assert!(q(Z).all_of(Z));
        assert!(!ab.any_of(Z));
        assert!(ab.none_of(Z));
        assert!(ab.any_except(Z));
        assert!(!ab.none_except(Z));
        assert!(q(Z).none_except(Z));
        assert!(!q(Z).any_except(Z));
    }

    #[test]
    fn unnamed_bits_count_as_set() {
        let stray = q(Flag::from_bits(0b1000_0000));
        assert!(stray.any());
        assert!(stray.any_except(Flag::all()));
        assert!(stray.none_of(Flag::all()));
    }

    #[test]
    fn converts_back_to_value() {
        let value = Flag::B | Flag::D;
        assert_eq!(q(value).get(), value);
        assert_eq!(Bitmask::from(value).get(), value);
    }

    #[test]
    fn count_and_names() {
        let value = q(Flag::A | Flag::C | Flag::from_bits(0x40));
        assert_eq!(value.count(), 3);
        assert_eq!(value.iter_names().collect::<Vec<_>>(), ["A", "C"]);
        assert_eq!(q(Z).iter_names().count(), 0);
    }
}
