use alloc::string::String;
use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::num::NonZeroUsize;

use crate::{Decoder, ErrorCode, Utf8Error};

/// Iterator over sanitized chunks of a fixed number of decoded units.
///
/// A unit is one decode event: a valid character or a single U+FFFD. Every chunk holds exactly
/// `chunk_size` units except the last, which may be shorter. Empty input yields nothing.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    inner: Decoder<'a>,
    chunk_size: NonZeroUsize,
}

impl Chunks<'_> {
    /// Units per chunk.
    #[inline]
    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size.get()
    }
}

impl Iterator for Chunks<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut chunk = String::new();
        for ev in self.inner.by_ref().take(self.chunk_size.get()) {
            chunk.push(ev.as_char());
        }
        if chunk.is_empty() {
            return None;
        }
        Some(chunk)
    }
}

impl FusedIterator for Chunks<'_> {}

/// Split `bytes` lazily into chunks of `chunk_size` decoded units.
///
/// # Errors
///
/// Returns `InvalidChunkSize` if `chunk_size` is zero.
pub fn chunks(bytes: &[u8], chunk_size: usize) -> Result<Chunks<'_>, Utf8Error> {
    let chunk_size =
        NonZeroUsize::new(chunk_size).ok_or(Utf8Error::new(ErrorCode::InvalidChunkSize, 0))?;
    Ok(Chunks {
        inner: Decoder::new(bytes),
        chunk_size,
    })
}

/// Split `bytes` into sanitized chunks of `chunk_size` decoded units.
///
/// Concatenating the chunks gives [`sanitize`](crate::sanitize)`(bytes)`.
///
/// ```
/// let parts = utf8_sanitize::split_into_chunks(b"ABC", 2).unwrap();
/// assert_eq!(parts, ["AB", "C"]);
/// ```
///
/// # Errors
///
/// Returns `InvalidChunkSize` if `chunk_size` is zero.
pub fn split_into_chunks(bytes: &[u8], chunk_size: usize) -> Result<Vec<String>, Utf8Error> {
    Ok(chunks(bytes, chunk_size)?.collect())
}
