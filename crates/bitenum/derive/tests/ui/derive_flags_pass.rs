use bitenum_mask::{Bitmask, BitmaskEnum};

#[derive(BitmaskEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[bitmask(flags(NORTH, EAST, SOUTH, WEST))]
struct Compass(i8);

impl Compass {
    const NORTH: Compass = Compass(1 << 0);
    const EAST: Compass = Compass(1 << 1);
    const SOUTH: Compass = Compass(1 << 2);
    const WEST: Compass = Compass(1 << 3);
}

#[derive(BitmaskEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[bitmask(all = 0x0f)]
struct Nibble(u8);

fn main() {
    assert_eq!(Compass::ALL, Compass(0b1111));
    assert_eq!(Compass::FLAGS[2], ("SOUTH", Compass::SOUTH));

    let heading = Compass::NORTH | Compass::EAST;
    let names: Vec<_> = Bitmask::new(heading).iter_names().collect();
    assert_eq!(names, ["NORTH", "EAST"]);
    assert!(Bitmask::new(heading).none_of(Compass::SOUTH | Compass::WEST));

    assert_eq!(Nibble::ALL, Nibble(0x0f));
    assert_eq!((!Nibble(0x01)).truncate(), Nibble(0x0e));
}
