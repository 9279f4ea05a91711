use core::iter::FusedIterator;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::Decoder;

/// Iterator over the codepoints of possibly malformed UTF-8.
///
/// Yields one value per decode event; replaced subparts yield `0xFFFD`.
#[derive(Debug, Clone)]
pub struct Codepoints<'a> {
    inner: Decoder<'a>,
}

impl Iterator for Codepoints<'_> {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        self.inner.next().map(|ev| ev.codepoint())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FusedIterator for Codepoints<'_> {}

/// Iterate the codepoints of `bytes`.
#[inline]
#[must_use]
pub const fn codepoints(bytes: &[u8]) -> Codepoints<'_> {
    Codepoints {
        inner: Decoder::new(bytes),
    }
}

/// Collect the codepoints of `bytes` (UTF-32), with `0xFFFD` for each replaced subpart.
///
/// ```
/// assert_eq!(utf8_sanitize::to_codepoints(b"A\xC3\xA9"), [0x41, 0xE9]);
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[must_use]
pub fn to_codepoints(bytes: &[u8]) -> Vec<u32> {
    codepoints(bytes).collect()
}
