use std::fmt::{self, Write};

use crate::{BitmaskEnum, Bits};

/// Write a value as `A | B | 0x80`, or `NONE` when no bits are set.
///
/// Named flags are written in declaration order; a flag is skipped once
/// every one of its bits has already been written. Leftover unnamed bits
/// are written as one hex literal.
pub fn write_flags<T: BitmaskEnum>(value: T, f: &mut impl Write) -> fmt::Result {
    if value.is_none() {
        return f.write_str("NONE");
    }
    let mut remaining = value.bits();
    let mut first = true;
    for &(name, flag) in T::FLAGS {
        let bits = flag.bits();
        let written = remaining & bits == <T::Repr as Bits>::ZERO;
        if flag.is_none() || written || !value.contains(flag) {
            continue;
        }
        if !first {
            f.write_str(" | ")?;
        }
        first = false;
        f.write_str(name)?;
        remaining = remaining & !bits;
    }
    if remaining != <T::Repr as Bits>::ZERO {
        if !first {
            f.write_str(" | ")?;
        }
        write!(f, "{remaining:#x}")?;
    }
    Ok(())
}
