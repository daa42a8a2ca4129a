use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use ahash::RandomState;

// Fixed seeds keep hashes stable for the lifetime of the process and
// across runs of the same build.
const SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// Hasher builder for string-like map keys.
///
/// Keys that compare equal and share a `Hash` impl family (`String`,
/// `&str`, `Box<str>`) hash to the same value.
#[derive(Debug, Clone)]
pub struct KeyHasher(RandomState);

impl KeyHasher {
    pub fn new() -> Self {
        Self(RandomState::with_seeds(SEEDS[0], SEEDS[1], SEEDS[2], SEEDS[3]))
    }
}

impl Default for KeyHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildHasher for KeyHasher {
    type Hasher = ahash::AHasher;

    fn build_hasher(&self) -> Self::Hasher {
        self.0.build_hasher()
    }
}

/// A hash map keyed through [`KeyHasher`].
pub type KeyMap<K, V> = HashMap<K, V, KeyHasher>;

/// Hash a key with [`KeyHasher`].
pub fn hash_key<K: Hash + ?Sized>(key: &K) -> u64 {
    KeyHasher::new().hash_one(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_strings_hash_equal() {
        let owned = String::from("profile.yaml");
        let boxed: Box<str> = "profile.yaml".into();
        assert_eq!(hash_key("profile.yaml"), hash_key(&owned));
        assert_eq!(hash_key(&owned), hash_key(&boxed));
    }

    #[test]
    fn hash_is_stable_between_builders() {
        let a = KeyHasher::new().hash_one("key");
        let b = KeyHasher::default().hash_one("key");
        assert_eq!(a, b);
        assert_ne!(hash_key("key"), hash_key("other key"));
    }

    #[test]
    fn key_map_looks_up_by_borrowed_key() {
        let mut map: KeyMap<String, u32> = KeyMap::default();
        map.insert("left".to_owned(), 1);
        map.insert("right".to_owned(), 2);
        assert_eq!(map.get("left"), Some(&1));
        assert_eq!(map.get("right"), Some(&2));
        assert_eq!(map.get("up"), None);
    }
}
