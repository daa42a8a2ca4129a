use crate::Result;

/// Convert UTF-16 code units to a UTF-8 string.
pub fn try_utf16_to_utf8(utf16: &[u16]) -> Result<String> {
    Ok(String::from_utf16(utf16)?)
}

/// Convert UTF-16 code units to a UTF-8 string.
///
/// Returns an empty string when the input holds an unpaired surrogate.
pub fn utf16_to_utf8(utf16: &[u16]) -> String {
    if utf16.is_empty() {
        return String::new();
    }
    try_utf16_to_utf8(utf16).unwrap_or_else(|e| {
        log::warn!("utf-16 conversion failed: {e}");
        String::new()
    })
}

/// Convert UTF-8 bytes to UTF-16 code units.
pub fn try_utf8_to_utf16(utf8: &[u8]) -> Result<Vec<u16>> {
    let text = std::str::from_utf8(utf8)?;
    Ok(str_to_utf16(text))
}

/// Convert UTF-8 bytes to UTF-16 code units.
///
/// Returns an empty buffer when the input is not valid UTF-8.
pub fn utf8_to_utf16(utf8: &[u8]) -> Vec<u16> {
    if utf8.is_empty() {
        return Vec::new();
    }
    try_utf8_to_utf16(utf8).unwrap_or_else(|e| {
        log::warn!("utf-8 conversion failed: {e}");
        Vec::new()
    })
}

pub fn str_to_utf16(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}
