//! Serde support for bitmask types.
//!
//! Values serialize as their integer representation. They deserialize from
//! an integer or from a flag string such as `"READ | WRITE"`, so
//! configuration files can name flags. Use with `#[serde(with = ...)]` for
//! types registered by hand:
//!
//! ```
//! use bitenum_mask::BitmaskEnum;
//! use serde::Deserialize;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! struct Caps(u8);
//!
//! impl BitmaskEnum for Caps {
//!     type Repr = u8;
//!     const NONE: Self = Caps(0);
//!     const ALL: Self = Caps(0xff);
//!
//!     fn from_bits(bits: u8) -> Self {
//!         Caps(bits)
//!     }
//!
//!     fn bits(self) -> u8 {
//!         self.0
//!     }
//! }
//!
//! #[derive(Deserialize)]
//! struct Config {
//!     #[serde(with = "bitenum_mask::serde")]
//!     caps: Caps,
//! }
//!
//! let config: Config = serde_yaml::from_str("caps: 0x3").unwrap();
//! assert_eq!(config.caps, Caps(3));
//! ```

use std::fmt;
use std::marker::PhantomData;

use ::serde::de::{self, Unexpected, Visitor};
use ::serde::{Deserializer, Serialize, Serializer};

use crate::{BitmaskEnum, Bits};

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: BitmaskEnum,
    T::Repr: Serialize,
    S: Serializer,
{
    value.bits().serialize(serializer)
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: BitmaskEnum,
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(MaskVisitor(PhantomData))
}

// `Unexpected` has no 128-bit variants.
const WIDE_OUT_OF_RANGE: &str = "128-bit integer out of range";

struct MaskVisitor<T>(PhantomData<T>);

impl<T: BitmaskEnum> Visitor<'_> for MaskVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or a flag list such as \"A | B\"")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<T, E> {
        <T::Repr as Bits>::try_from_u128(u128::from(v))
            .map(T::from_bits)
            .ok_or_else(|| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<T, E> {
        <T::Repr as Bits>::try_from_i128(i128::from(v))
            .map(T::from_bits)
            .ok_or_else(|| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<T, E> {
        <T::Repr as Bits>::try_from_u128(v)
            .map(T::from_bits)
            .ok_or_else(|| E::invalid_value(Unexpected::Other(WIDE_OUT_OF_RANGE), &self))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<T, E> {
        <T::Repr as Bits>::try_from_i128(v)
            .map(T::from_bits)
            .ok_or_else(|| E::invalid_value(Unexpected::Other(WIDE_OUT_OF_RANGE), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        crate::from_str(v).map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use ::serde::Deserialize;

    use crate::{bitmask, Bitmask};

    bitmask! {
        struct Caps: u8 {
            const CAMERA = 1 << 0;
            const MICROPHONE = 1 << 1;
            const SCREEN = 1 << 2;
        }
    }

    bitmask! {
        struct Wide: u128 {
            const NEAR = 1 << 0;
            const FAR = 1 << 100;
        }
    }

    bitmask! {
        struct Offset: i128 {
            const SIGN = i128::MIN;
        }
    }

    #[derive(Debug, Deserialize)]
    struct AppConfig {
        caps: Caps,
        #[serde(default = "default_denied")]
        denied: Bitmask<Caps>,
    }

    fn default_denied() -> Bitmask<Caps> {
        Bitmask::new(Caps::SCREEN)
    }

    #[test]
    fn deserializes_flag_names() {
        let config: AppConfig =
            serde_yaml::from_str("caps: \"CAMERA | MICROPHONE\"\ndenied: SCREEN\n").unwrap();
        assert_eq!(config.caps, Caps::CAMERA | Caps::MICROPHONE);
        assert!(config.denied.all_of(Caps::SCREEN));
    }

    #[test]
    fn deserializes_integers() {
        let config: AppConfig = serde_yaml::from_str("caps: 5\n").unwrap();
        assert_eq!(config.caps, Caps::CAMERA | Caps::SCREEN);
        assert_eq!(config.denied.get(), Caps::SCREEN);
    }

    #[test]
    fn rejects_out_of_range_and_unknown() {
        assert!(serde_yaml::from_str::<AppConfig>("caps: 256\n").is_err());
        assert!(serde_yaml::from_str::<AppConfig>("caps: -1\n").is_err());
        let err = serde_yaml::from_str::<AppConfig>("caps: CAMERA | GPS\n").unwrap_err();
        assert!(err.to_string().contains("unknown flag: GPS"));
    }

    #[test]
    fn serializes_as_integer() {
        let yaml = serde_yaml::to_string(&(Caps::MICROPHONE | Caps::SCREEN)).unwrap();
        assert_eq!(yaml.trim(), "6");
        let yaml = serde_yaml::to_string(&Bitmask::new(Caps::CAMERA)).unwrap();
        assert_eq!(yaml.trim(), "1");
    }

    #[test]
    fn wide_values_round_trip() {
        let value = Wide::NEAR | Wide::FAR;
        let yaml = serde_yaml::to_string(&value).unwrap();
        assert_eq!(serde_yaml::from_str::<Wide>(&yaml).unwrap(), value);

        let yaml = serde_yaml::to_string(&Wide::FAR).unwrap();
        assert_eq!(yaml.trim(), "1267650600228229401496703205376");
        assert_eq!(serde_yaml::from_str::<Wide>(&yaml).unwrap(), Wide::FAR);

        let yaml = serde_yaml::to_string(&Offset::SIGN).unwrap();
        assert_eq!(serde_yaml::from_str::<Offset>(&yaml).unwrap(), Offset::SIGN);
    }

    #[test]
    fn wide_integer_out_of_range_for_narrow_type() {
        let yaml = serde_yaml::to_string(&Wide::FAR).unwrap();
        assert!(serde_yaml::from_str::<Caps>(&yaml).is_err());
    }
}
