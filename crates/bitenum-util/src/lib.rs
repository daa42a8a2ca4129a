mod encoding;
mod file;
mod hash;

use thiserror::Error;

pub use encoding::{str_to_utf16, try_utf16_to_utf8, try_utf8_to_utf16, utf16_to_utf8, utf8_to_utf16};
pub use file::{load_file_content, read_file_content};
pub use hash::{hash_key, KeyHasher, KeyMap};

/// Error type for the fallible helpers.
#[derive(Debug, Error)]
pub enum Error {
    /// Input contained an unpaired surrogate.
    #[error("invalid utf-16: {0}")]
    InvalidUtf16(#[from] std::string::FromUtf16Error),
    /// Input was not valid UTF-8.
    #[error("invalid utf-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    /// Reading a file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient result alias for the fallible helpers.
pub type Result<T> = std::result::Result<T, Error>;
