//! Well-formed UTF-8, as accepted by this crate.
//!
//! A byte sequence is well-formed iff it is a concatenation of:
//!
//! | codepoints          | byte 1      | byte 2      | byte 3      | byte 4      |
//! |---------------------|-------------|-------------|-------------|-------------|
//! | `U+0000..U+007F`    | `00..7F`    |             |             |             |
//! | `U+0080..U+07FF`    | `C2..DF`    | `80..BF`    |             |             |
//! | `U+0800..U+0FFF`    | `E0`        | **`A0..BF`**| `80..BF`    |             |
//! | `U+1000..U+CFFF`    | `E1..EC`    | `80..BF`    | `80..BF`    |             |
//! | `U+D000..U+D7FF`    | `ED`        | **`80..9F`**| `80..BF`    |             |
//! | `U+E000..U+FFFF`    | `EE..EF`    | `80..BF`    | `80..BF`    |             |
//! | `U+10000..U+3FFFF`  | `F0`        | **`90..BF`**| `80..BF`    | `80..BF`    |
//! | `U+40000..U+FFFFF`  | `F1..F3`    | `80..BF`    | `80..BF`    | `80..BF`    |
//! | `U+100000..U+10FFFF`| `F4`        | **`80..8F`**| `80..BF`    | `80..BF`    |
//!
//! The narrowed second-byte ranges exclude overlong forms, UTF-16 surrogates, and values above
//! `U+10FFFF`.
//!
//! Anything else is replaced, one **maximal subpart** at a time: the longest prefix of a sequence
//! that could still have been completed becomes one U+FFFD, and the byte that broke it is decoded
//! afresh.

/// The Unicode replacement codepoint.
pub const REPLACEMENT_CODEPOINT: u32 = 0xFFFD;

/// The Unicode replacement character.
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// UTF-8 encoding of U+FFFD.
pub const REPLACEMENT_BYTES: [u8; 3] = [0xEF, 0xBF, 0xBD];

/// Largest Unicode codepoint.
pub const MAX_CODEPOINT: u32 = 0x10_FFFF;
