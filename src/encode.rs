use core::fmt;
use core::ops::Deref;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::{ErrorCode, Utf8Error, MAX_CODEPOINT};

/// The UTF-8 encoding of a single codepoint, stored inline.
///
/// Produced by [`encode`]. Dereferences to the 1 to 4 encoded bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedChar {
    buf: [u8; 4],
    len: u8,
}

impl EncodedChar {
    /// The encoded bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..usize::from(self.len)]
    }

    /// Number of encoded bytes (1 to 4).
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always `false`; every codepoint encodes to at least one byte.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Deref for EncodedChar {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for EncodedChar {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for EncodedChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedChar({})", crate::HexDump(self.as_bytes()))
    }
}

/// Encode `codepoint` as UTF-8.
///
/// Surrogate codepoints (`0xD800..=0xDFFF`) are encoded like any other three-byte value; they are
/// only rejected on decode.
///
/// ```
/// assert_eq!(utf8_sanitize::encode(0x10FFFF).unwrap().as_bytes(), [0xF4, 0x8F, 0xBF, 0xBF]);
/// ```
///
/// # Errors
///
/// Returns `InvalidCodepoint` if `codepoint > 0x10FFFF`.
#[allow(clippy::cast_possible_truncation)]
pub const fn encode(codepoint: u32) -> Result<EncodedChar, Utf8Error> {
    let cp = codepoint;
    let (buf, len) = if cp <= 0x7F {
        ([cp as u8, 0, 0, 0], 1)
    } else if cp <= 0x7FF {
        ([0xC0 | (cp >> 6) as u8, 0x80 | (cp & 0x3F) as u8, 0, 0], 2)
    } else if cp <= 0xFFFF {
        (
            [
                0xE0 | (cp >> 12) as u8,
                0x80 | ((cp >> 6) & 0x3F) as u8,
                0x80 | (cp & 0x3F) as u8,
                0,
            ],
            3,
        )
    } else if cp <= MAX_CODEPOINT {
        (
            [
                0xF0 | (cp >> 18) as u8,
                0x80 | ((cp >> 12) & 0x3F) as u8,
                0x80 | ((cp >> 6) & 0x3F) as u8,
                0x80 | (cp & 0x3F) as u8,
            ],
            4,
        )
    } else {
        return Err(Utf8Error::encode(ErrorCode::InvalidCodepoint));
    };
    Ok(EncodedChar { buf, len })
}

/// Append the UTF-8 encoding of `codepoint` to `out`.
///
/// # Errors
///
/// Returns `InvalidCodepoint` if `codepoint > 0x10FFFF`; `out` is left untouched.
#[cfg(feature = "alloc")]
pub fn encode_into(codepoint: u32, out: &mut Vec<u8>) -> Result<(), Utf8Error> {
    let enc = encode(codepoint)?;
    out.extend_from_slice(enc.as_bytes());
    Ok(())
}
