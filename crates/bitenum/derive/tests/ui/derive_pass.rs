use bitenum_mask::{Bitmask, BitmaskEnum};

#[derive(BitmaskEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Raw(u32);

fn main() {
    let mut value = Raw(0b0101);
    value |= Raw(0b0010);
    value &= !Raw(0b0001);
    value ^= Raw(0b1000);
    assert_eq!(value, Raw(0b1110));

    assert_eq!(Raw::NONE, Raw(0));
    assert_eq!(Raw::ALL, Raw(u32::MAX));
    assert!(Raw::FLAGS.is_empty());

    let query = Bitmask::new(value);
    assert!(query.any());
    assert!(query.all_of(Raw(0b0110)));
    assert!(query.none_except(Raw::ALL));
}
