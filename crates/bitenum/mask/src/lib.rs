//! Bitwise set algebra for flag types that opt in to it.
//!
//! A flag type is a `Copy` newtype over an integer. It becomes a bitmask
//! type by implementing [`BitmaskEnum`], usually through [`bitmask!`] or
//! `#[derive(BitmaskEnum)]`. Only registered types get `|`, `&`, `^`, `!`
//! and the compound assignments, and only they can be wrapped in
//! [`Bitmask`] for queries.
//!
//! ```
//! use bitenum_mask::{bitmask, Bitmask};
//!
//! bitmask! {
//!     pub struct Perms: u8 {
//!         const READ = 1 << 0;
//!         const WRITE = 1 << 1;
//!         const EXECUTE = 1 << 2;
//!     }
//! }
//!
//! let perms = Perms::READ | Perms::WRITE;
//! assert!(Bitmask::new(perms).all_of(Perms::READ));
//! assert!(Bitmask::new(perms).none_of(Perms::EXECUTE));
//! ```
//!
//! Registration alone does not provide the operators. A manual
//! implementation must also invoke [`impl_bitmask_ops!`]:
//!
//! ```compile_fail
//! use bitenum_mask::BitmaskEnum;
//!
//! #[derive(Clone, Copy, PartialEq, Eq)]
//! struct Manual(u8);
//!
//! impl BitmaskEnum for Manual {
//!     type Repr = u8;
//!     const NONE: Self = Manual(0);
//!     const ALL: Self = Manual(0b11);
//!
//!     fn from_bits(bits: u8) -> Self {
//!         Manual(bits)
//!     }
//!
//!     fn bits(self) -> u8 {
//!         self.0
//!     }
//! }
//!
//! let _ = Manual(1) | Manual(2);
//! ```
//!
//! ```
//! use bitenum_mask::{impl_bitmask_ops, BitmaskEnum};
//!
//! #[derive(Clone, Copy, PartialEq, Eq, Debug)]
//! struct Manual(u8);
//!
//! impl BitmaskEnum for Manual {
//!     type Repr = u8;
//!     const NONE: Self = Manual(0);
//!     const ALL: Self = Manual(0b11);
//!
//!     fn from_bits(bits: u8) -> Self {
//!         Manual(bits)
//!     }
//!
//!     fn bits(self) -> u8 {
//!         self.0
//!     }
//! }
//!
//! impl_bitmask_ops!(Manual);
//!
//! assert_eq!(Manual(1) | Manual(2), Manual::ALL);
//! ```
//!
//! Unregistered types cannot be queried:
//!
//! ```compile_fail
//! use bitenum_mask::Bitmask;
//!
//! #[derive(Clone, Copy, PartialEq, Eq)]
//! struct Ordinal(u8);
//!
//! let _ = Bitmask::new(Ordinal(1)).any();
//! ```
//!
//! Fieldless enums are ordinal, so the derive refuses them:
//!
//! ```compile_fail
//! #[derive(bitenum_mask::BitmaskEnum, Clone, Copy, PartialEq, Eq)]
//! enum Stage {
//!     Boot,
//!     Run,
//! }
//! ```

mod bitmask;
mod bits;
mod declare;
mod fmt;
mod ops;
mod parse;
#[cfg(feature = "serde")]
pub mod serde;

pub use bitmask::Bitmask;
pub use bits::Bits;
pub use fmt::write_flags;
pub use parse::{from_str, ParseError};

#[cfg(feature = "derive")]
pub use bitenum_derive::BitmaskEnum;

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "serde")]
    pub use ::serde;
}

/// Registration of a flag type as a bitmask type.
///
/// `from_bits` must be total: every bit pattern of `Repr`, named or not,
/// round-trips through `bits`.
pub trait BitmaskEnum: Copy + Eq + 'static {
    /// Underlying integer representation.
    type Repr: Bits;

    /// The value with no bits set.
    const NONE: Self;

    /// Union of every named flag. All ones when the type names no flags.
    const ALL: Self;

    /// Named flags in declaration order.
    const FLAGS: &'static [(&'static str, Self)] = &[];

    fn from_bits(bits: Self::Repr) -> Self;

    fn bits(self) -> Self::Repr;

    #[inline]
    fn union(self, other: Self) -> Self {
        Self::from_bits(self.bits() | other.bits())
    }

    #[inline]
    fn intersection(self, other: Self) -> Self {
        Self::from_bits(self.bits() & other.bits())
    }

    #[inline]
    fn symmetric_difference(self, other: Self) -> Self {
        Self::from_bits(self.bits() ^ other.bits())
    }

    /// Flips every bit of the representation, including bits outside `ALL`.
    #[inline]
    fn complement(self) -> Self {
        Self::from_bits(!self.bits())
    }

    /// Drops bits that belong to no named flag.
    #[inline]
    fn truncate(self) -> Self {
        self.intersection(Self::ALL)
    }

    #[inline]
    fn is_none(self) -> bool {
        self.bits() == Self::Repr::ZERO
    }

    /// Check if every bit of `other` is set in `self`.
    #[inline]
    fn contains(self, other: Self) -> bool {
        self.bits() & other.bits() == other.bits()
    }
}
