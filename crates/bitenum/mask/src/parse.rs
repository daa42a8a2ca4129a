use thiserror::Error;

use crate::{BitmaskEnum, Bits};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown flag: {0}")]
    UnknownFlag(String),
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("empty flag between separators")]
    EmptyFlag,
}

/// Parse a value written as `A | B`, as an integer literal (`5`, `0x5`,
/// `0b101`), or as a mix of both. An empty string and `NONE` parse to the
/// zero value.
pub fn from_str<T: BitmaskEnum>(input: &str) -> Result<T, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(T::NONE);
    }
    let mut value = T::NONE;
    for part in input.split('|') {
        let part = part.trim();
        if part.is_empty() {
            return Err(ParseError::EmptyFlag);
        }
        value = value.union(parse_flag(part)?);
    }
    Ok(value)
}

fn parse_flag<T: BitmaskEnum>(part: &str) -> Result<T, ParseError> {
    if part.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
        return parse_number(part).map(T::from_bits);
    }
    if let Some(&(_, flag)) = T::FLAGS.iter().find(|(name, _)| *name == part) {
        return Ok(flag);
    }
    if part == "NONE" {
        return Ok(T::NONE);
    }
    Err(ParseError::UnknownFlag(part.to_owned()))
}

fn parse_number<R: Bits>(part: &str) -> Result<R, ParseError> {
    let (digits, radix) = if let Some(hex) = part.strip_prefix("0x").or_else(|| part.strip_prefix("0X")) {
        (hex, 16)
    } else if let Some(bin) = part.strip_prefix("0b").or_else(|| part.strip_prefix("0B")) {
        (bin, 2)
    } else {
        (part, 10)
    };
    let digits = digits.replace('_', "");
    R::from_str_radix(&digits, radix).ok_or_else(|| ParseError::InvalidNumber(part.to_owned()))
}
