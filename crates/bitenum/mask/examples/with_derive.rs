use bitenum_mask::{Bitmask, BitmaskEnum};

/// Face and menu buttons of a pad, registered with the derive.
#[derive(BitmaskEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[bitmask(flags(A, B, X, Y, START, SELECT))]
struct GameButton(u16);

impl GameButton {
    const A: GameButton = GameButton(1 << 0);
    const B: GameButton = GameButton(1 << 1);
    const X: GameButton = GameButton(1 << 2);
    const Y: GameButton = GameButton(1 << 3);
    const START: GameButton = GameButton(1 << 4);
    const SELECT: GameButton = GameButton(1 << 5);
}

fn main() {
    let held = GameButton::X | GameButton::Y;
    println!("held: {held:?}");

    let query = Bitmask::new(held);
    println!("X held: {}", query.any_of(GameButton::X));
    println!("B held: {}", query.any_of(GameButton::B));

    let mut chord = held;
    chord |= GameButton::START;
    println!("chord names: {:?}", Bitmask::new(chord).iter_names().collect::<Vec<_>>());

    // ALL is the union of the listed flags.
    println!("chord uses known buttons only: {}", Bitmask::new(chord).none_except(GameButton::ALL));
    println!("SELECT in chord: {}", Bitmask::new(chord).all_of(GameButton::SELECT));

    for (name, button) in GameButton::FLAGS {
        println!("{name:>6} = {:#08b}", button.bits());
    }
}
