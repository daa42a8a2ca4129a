use bitenum_mask::{bitmask, Bitmask, ParseError};

bitmask! {
    /// Access bits granted on a shared folder.
    pub struct Permission: u8 {
        const READ = 1 << 0;
        const WRITE = 1 << 1;
        const EXECUTE = 1 << 2;
        const DELETE = 1 << 3;
    }
}

fn main() -> Result<(), ParseError> {
    // A guest account starts with the folder's default grant.
    let guest = Permission::READ | Permission::WRITE;
    println!("guest: {guest:?}");

    let query = Bitmask::new(guest);
    let checks = [
        ("read", Permission::READ),
        ("write", Permission::WRITE),
        ("execute", Permission::EXECUTE),
    ];
    for (name, flag) in checks {
        println!("guest may {name}: {}", query.all_of(flag));
    }

    // Promote to a maintainer, then revoke WRITE again.
    let mut maintainer = guest;
    maintainer |= Permission::EXECUTE;
    println!("maintainer: {maintainer:?}");
    maintainer &= !Permission::WRITE;
    println!("maintainer without write: {maintainer:?}");

    // Nothing outside the declared flags was granted.
    println!(
        "maintainer grant is known: {}",
        Bitmask::new(maintainer).none_except(Permission::all())
    );

    // Grants read from a config file use flag names.
    let from_config: Permission = "READ | DELETE".parse()?;
    println!("configured: {from_config:?}");
    println!(
        "configured beyond read-only: {}",
        Bitmask::new(from_config).any_except(Permission::READ)
    );
    Ok(())
}
