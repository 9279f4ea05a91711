use core::fmt;

#[cfg(feature = "alloc")]
use alloc::borrow::Cow;
#[cfg(feature = "alloc")]
use alloc::string::String;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "alloc")]
use crate::utf8::fast_validate;
#[cfg(feature = "alloc")]
use crate::SanitizeOptions;
use crate::{DecodeEvent, Decoder};

/// Drive the decoder over `bytes`, writing every character (or U+FFFD) to `out`.
///
/// `on_error` receives the detection position of each replaced subpart.
fn drive<W, F>(bytes: &[u8], out: &mut W, mut on_error: F) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    F: FnMut(usize),
{
    for ev in Decoder::new(bytes) {
        if let DecodeEvent::Invalid { position, .. } = ev {
            on_error(position);
        }
        out.write_char(ev.as_char())?;
    }
    Ok(())
}

/// Write the sanitized form of `bytes` into `out` without allocating.
///
/// # Errors
///
/// Only propagates errors reported by `out`.
pub fn sanitize_to<W: fmt::Write + ?Sized>(bytes: &[u8], out: &mut W) -> fmt::Result {
    drive(bytes, out, |_| {})
}

/// A [`Display`](fmt::Display) adapter that renders bytes as sanitized UTF-8.
///
/// ```
/// let shown = format!("{}", utf8_sanitize::display_sanitized(b"caf\xC3"));
/// assert_eq!(shown, "caf\u{FFFD}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lossy<'a>(pub &'a [u8]);

impl fmt::Display for Lossy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        sanitize_to(self.0, f)
    }
}

/// Wrap `bytes` in a [`Lossy`] display adapter.
#[inline]
#[must_use]
pub const fn display_sanitized(bytes: &[u8]) -> Lossy<'_> {
    Lossy(bytes)
}

/// Result of [`sanitize_with`].
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sanitized<'a> {
    /// The sanitized text. Borrows the input when it was already valid.
    pub text: Cow<'a, str>,
    /// Detection positions of replaced subparts, in input order.
    ///
    /// Empty unless [`SanitizeOptions::report_errors`] was set.
    pub errors: Vec<usize>,
}

#[cfg(feature = "alloc")]
impl Sanitized<'_> {
    /// Returns true iff the input was already valid UTF-8.
    #[inline]
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        matches!(self.text, Cow::Borrowed(_))
    }

    /// The sanitized text as bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }
}

/// Convert `bytes` into valid UTF-8, replacing every maximal ill-formed subpart with U+FFFD.
///
/// Valid input is returned borrowed and unchanged.
///
/// ```
/// use utf8_sanitize::sanitize;
///
/// assert_eq!(sanitize(b"plain"), "plain");
/// assert_eq!(sanitize(b"\xED\xA0\x80"), "\u{FFFD}\u{FFFD}\u{FFFD}");
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[must_use]
pub fn sanitize(bytes: &[u8]) -> Cow<'_, str> {
    sanitize_with(bytes, SanitizeOptions::new()).text
}

/// Sanitize `bytes` according to `options`.
///
/// ```
/// use utf8_sanitize::{sanitize_with, SanitizeOptions};
///
/// let out = sanitize_with(b"a\xFFb\xE2\x82", SanitizeOptions::new().with_error_report(true));
/// assert_eq!(out.text, "a\u{FFFD}b\u{FFFD}");
/// assert_eq!(out.errors, [1, 5]);
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[must_use]
pub fn sanitize_with(bytes: &[u8], options: SanitizeOptions) -> Sanitized<'_> {
    if let Some(s) = fast_validate(bytes) {
        return Sanitized {
            text: Cow::Borrowed(s),
            errors: Vec::new(),
        };
    }

    let mut text = String::with_capacity(bytes.len());
    let mut errors = Vec::new();
    let res = drive(bytes, &mut text, |pos| {
        if options.report_errors {
            errors.push(pos);
        }
    });
    // Writing into a String cannot fail.
    debug_assert!(res.is_ok());

    Sanitized {
        text: Cow::Owned(text),
        errors,
    }
}
