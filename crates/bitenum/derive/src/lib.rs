mod derive;

use proc_macro::TokenStream;

use crate::derive::handle_derive_bitmask;

/// Register a single-field tuple struct as a bitmask type.
///
/// Implements `bitenum_mask::BitmaskEnum` and the bitwise operators. The
/// struct itself must derive `Clone`, `Copy`, `PartialEq` and `Eq`.
///
/// The optional `#[bitmask(...)]` attribute takes:
/// - `flags(A, B, ...)`: associated constants to list as named flags. They
///   also make up `ALL` unless `all` is given.
/// - `all = EXPR`: raw bits of `ALL`. Without it and without `flags`,
///   `ALL` has every bit set.
///
/// ```
/// use bitenum_mask::{Bitmask, BitmaskEnum};
///
/// #[derive(BitmaskEnum, Debug, Clone, Copy, PartialEq, Eq)]
/// #[bitmask(flags(LEFT, RIGHT))]
/// struct Side(u8);
///
/// impl Side {
///     const LEFT: Side = Side(1);
///     const RIGHT: Side = Side(2);
/// }
///
/// let both = Side::LEFT | Side::RIGHT;
/// assert_eq!(both, Side::ALL);
/// assert!(Bitmask::new(both).all_of(Side::RIGHT));
/// ```
///
/// Ordinal enums are rejected:
///
/// ```compile_fail
/// #[derive(bitenum_mask::BitmaskEnum, Clone, Copy, PartialEq, Eq)]
/// enum Stage {
///     Boot,
///     Run,
/// }
/// ```
#[proc_macro_derive(BitmaskEnum, attributes(bitmask))]
pub fn derive_bitmask_enum(input: TokenStream) -> TokenStream {
    handle_derive_bitmask(input)
}
