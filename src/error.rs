use core::fmt;

/// The high-level class of an error.
///
/// The crate distinguishes:
/// - **Decode** errors: malformed UTF-8 reported by the strict entry points
///   ([`validate`](crate::validate), [`decode`](crate::decode), [`decode_char`](crate::decode_char)).
/// - **Encode** errors: codepoints that have no UTF-8 encoding.
/// - **Argument** errors: caller-supplied parameters outside their domain.
///
/// Lossy entry points (sanitize, codepoint extraction, chunking) never surface decode errors; they
/// substitute U+FFFD instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// Malformed UTF-8 input.
    Decode,
    /// Codepoint cannot be encoded.
    Encode,
    /// Invalid caller argument.
    Argument,
}

/// A structured error code identifying the reason an operation was rejected.
///
/// This enum is intentionally stable and string-free to support `no_std`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum ErrorCode {
    /// A byte that cannot start a sequence (`0x80..=0xC1`, `0xF5..=0xFF`).
    InvalidLeadByte,
    /// A sequence was interrupted by a byte outside the legal continuation range.
    InvalidContinuation,
    /// Input ended in the middle of a multi-byte sequence.
    TruncatedSequence,
    /// Input was empty where a character was required.
    UnexpectedEof,
    /// Input contains bytes after the single expected character.
    TrailingBytes,

    /// Codepoint outside `[0, 0x10FFFF]`.
    InvalidCodepoint,

    /// Chunk size must be at least one decoded unit.
    InvalidChunkSize,
}

impl ErrorCode {
    /// The class this code belongs to.
    #[inline]
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::InvalidLeadByte
            | Self::InvalidContinuation
            | Self::TruncatedSequence
            | Self::UnexpectedEof
            | Self::TrailingBytes => ErrorKind::Decode,
            Self::InvalidCodepoint => ErrorKind::Encode,
            Self::InvalidChunkSize => ErrorKind::Argument,
        }
    }

    const fn message(self) -> &'static str {
        match self {
            Self::InvalidLeadByte => "invalid lead byte",
            Self::InvalidContinuation => "sequence interrupted by out-of-range byte",
            Self::TruncatedSequence => "truncated sequence at end of input",
            Self::UnexpectedEof => "unexpected end of input",
            Self::TrailingBytes => "trailing bytes after single character",

            Self::InvalidCodepoint => "codepoint outside [0, 0x10FFFF]",

            Self::InvalidChunkSize => "chunk size must be at least 1",
        }
    }
}

/// An error with a stable code and a byte offset.
///
/// For decode errors, `offset` is the byte index where the error was detected. For encode errors
/// it is `0`; for [`ErrorCode::InvalidChunkSize`] it is `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Utf8Error {
    /// The error code.
    pub code: ErrorCode,
    /// Byte offset into the input where the error was detected.
    pub offset: usize,
}

impl Utf8Error {
    /// Construct an error with `code` at `offset`.
    #[inline]
    #[must_use]
    pub const fn new(code: ErrorCode, offset: usize) -> Self {
        Self { code, offset }
    }

    /// Construct an encoding error.
    #[inline]
    #[must_use]
    pub const fn encode(code: ErrorCode) -> Self {
        Self { code, offset: 0 }
    }

    /// The class of this error.
    #[inline]
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        self.code.kind()
    }

    /// Returns true iff this error describes malformed input.
    #[inline]
    #[must_use]
    pub const fn is_decode(self) -> bool {
        matches!(self.code.kind(), ErrorKind::Decode)
    }
}

impl fmt::Display for Utf8Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = self.code.message();
        match self.kind() {
            ErrorKind::Decode => write!(f, "utf-8 decode failed at {}: {msg}", self.offset),
            ErrorKind::Encode => write!(f, "utf-8 encode failed: {msg}"),
            ErrorKind::Argument => write!(f, "invalid argument: {msg}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Utf8Error {}
