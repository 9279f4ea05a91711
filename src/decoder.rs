use core::iter::FusedIterator;

use log::trace;

use crate::state::{DecodeState, Step};
use crate::{ErrorCode, Utf8Error, REPLACEMENT_CHARACTER};

/// A single unit produced by the [`Decoder`].
///
/// Every input byte belongs to exactly one event's `bytes`, and events are yielded in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeEvent<'a> {
    /// A well-formed character.
    Valid {
        /// Byte offset of the first byte of the character.
        offset: usize,
        /// The encoded character, borrowed from the input.
        bytes: &'a [u8],
        /// The decoded character. Never a surrogate.
        ch: char,
    },
    /// A maximal subpart of an ill-formed sequence, replaced by U+FFFD.
    Invalid {
        /// Byte offset of the first byte of the subpart.
        offset: usize,
        /// The consumed bytes. Never includes the byte that interrupted the sequence.
        bytes: &'a [u8],
        /// Byte index at which the error was detected.
        ///
        /// For an invalid lead byte this is its own index; for an interrupted sequence, the index
        /// of the interrupting byte; for a truncated sequence, the input length.
        position: usize,
        /// Why the subpart is ill-formed.
        reason: ErrorCode,
    },
}

impl<'a> DecodeEvent<'a> {
    /// Byte offset of the first consumed byte.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        match *self {
            Self::Valid { offset, .. } | Self::Invalid { offset, .. } => offset,
        }
    }

    /// The input bytes this event consumed.
    #[inline]
    #[must_use]
    pub const fn bytes(&self) -> &'a [u8] {
        match *self {
            Self::Valid { bytes, .. } | Self::Invalid { bytes, .. } => bytes,
        }
    }

    /// The decoded character, or U+FFFD for an invalid subpart.
    #[inline]
    #[must_use]
    pub const fn as_char(&self) -> char {
        match *self {
            Self::Valid { ch, .. } => ch,
            Self::Invalid { .. } => REPLACEMENT_CHARACTER,
        }
    }

    /// The decoded codepoint, or `0xFFFD` for an invalid subpart.
    #[inline]
    #[must_use]
    pub const fn codepoint(&self) -> u32 {
        self.as_char() as u32
    }

    /// Returns true iff this event is a replacement.
    #[inline]
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }

    /// The error this event represents, if any, with its detection position as offset.
    #[inline]
    #[must_use]
    pub const fn error(&self) -> Option<Utf8Error> {
        match *self {
            Self::Valid { .. } => None,
            Self::Invalid {
                position, reason, ..
            } => Some(Utf8Error::new(reason, position)),
        }
    }
}

/// A lazy, non-owning cursor that turns bytes into [`DecodeEvent`]s.
///
/// The decoder implements the WHATWG UTF-8 decode algorithm with maximal-subpart replacement. It
/// never fails: malformed input becomes [`DecodeEvent::Invalid`] and decoding resumes at the
/// next byte that was not part of the malformed subpart.
///
/// ```
/// use utf8_sanitize::{DecodeEvent, Decoder};
///
/// let mut it = Decoder::new(b"a\xC3");
/// assert!(matches!(it.next(), Some(DecodeEvent::Valid { ch: 'a', .. })));
/// assert!(matches!(it.next(), Some(DecodeEvent::Invalid { position: 2, .. })));
/// assert_eq!(it.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    /// Start decoding at the beginning of `data`.
    #[inline]
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// The input being decoded.
    #[inline]
    #[must_use]
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Byte offset of the next event.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// The not yet decoded tail of the input.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    fn invalid(&self, start: usize, position: usize, reason: ErrorCode) -> DecodeEvent<'a> {
        trace!("utf-8 replacement at {start}..{} ({reason:?}, detected at {position})", self.pos);
        DecodeEvent::Invalid {
            offset: start,
            bytes: &self.data[start..self.pos],
            position,
            reason,
        }
    }
}

impl<'a> Iterator for Decoder<'a> {
    type Item = DecodeEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos;
        let mut state = DecodeState::new();

        while let Some(&byte) = self.data.get(self.pos) {
            match state.step(byte) {
                Step::Pending => self.pos += 1,
                Step::Complete(ch) => {
                    self.pos += 1;
                    return Some(DecodeEvent::Valid {
                        offset: start,
                        bytes: &self.data[start..self.pos],
                        ch,
                    });
                }
                Step::InvalidLead => {
                    self.pos += 1;
                    return Some(self.invalid(start, start, ErrorCode::InvalidLeadByte));
                }
                // The interrupting byte stays unconsumed; the next call reprocesses it as a lead.
                Step::Interrupted => {
                    return Some(self.invalid(start, self.pos, ErrorCode::InvalidContinuation));
                }
            }
        }

        if state.in_sequence() {
            return Some(self.invalid(start, self.data.len(), ErrorCode::TruncatedSequence));
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.data.len() - self.pos;
        (rest.div_ceil(4), Some(rest))
    }
}

impl FusedIterator for Decoder<'_> {}

/// Decode events for `bytes`. Shorthand for [`Decoder::new`].
#[inline]
#[must_use]
pub const fn decode_events(bytes: &[u8]) -> Decoder<'_> {
    Decoder::new(bytes)
}

/// Decode the first character of `bytes`.
///
/// Returns the codepoint and the number of bytes it occupies.
///
/// # Errors
///
/// Returns `UnexpectedEof` for empty input, or the decode error of a malformed first sequence.
pub fn decode(bytes: &[u8]) -> Result<(u32, usize), Utf8Error> {
    match Decoder::new(bytes).next() {
        None => Err(Utf8Error::new(ErrorCode::UnexpectedEof, 0)),
        Some(DecodeEvent::Valid { bytes, ch, .. }) => Ok((u32::from(ch), bytes.len())),
        Some(DecodeEvent::Invalid {
            position, reason, ..
        }) => Err(Utf8Error::new(reason, position)),
    }
}

/// Decode `bytes` as exactly one encoded character.
///
/// ```
/// assert_eq!(utf8_sanitize::decode_char("é".as_bytes()), Ok(0xE9));
/// ```
///
/// # Errors
///
/// Returns the errors of [`decode`], or `TrailingBytes` if anything follows the character.
pub fn decode_char(bytes: &[u8]) -> Result<u32, Utf8Error> {
    let (cp, len) = decode(bytes)?;
    if len != bytes.len() {
        return Err(Utf8Error::new(ErrorCode::TrailingBytes, len));
    }
    Ok(cp)
}
