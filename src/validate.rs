use crate::utf8::fast_validate;
use crate::{Decoder, ErrorCode, Utf8Error};

/// Returns true iff `bytes` is well-formed UTF-8.
///
/// Agrees with the [`Decoder`] on every input: the result is `true` exactly when decoding yields
/// no replacement.
#[inline]
#[must_use]
pub fn is_valid_utf8(bytes: &[u8]) -> bool {
    fast_validate(bytes).is_some()
}

/// Validate `bytes` as UTF-8 and borrow them as `&str`.
///
/// ```
/// use utf8_sanitize::{validate, ErrorCode};
///
/// assert_eq!(validate(b"ok"), Ok("ok"));
/// let err = validate(b"a\xF4\x90").unwrap_err();
/// assert_eq!((err.code, err.offset), (ErrorCode::InvalidContinuation, 2));
/// ```
///
/// # Errors
///
/// Returns the first decode error, with the byte position where it was detected as `offset`.
pub fn validate(bytes: &[u8]) -> Result<&str, Utf8Error> {
    if let Some(s) = fast_validate(bytes) {
        return Ok(s);
    }
    let first = Decoder::new(bytes).find_map(|ev| ev.error());
    debug_assert!(first.is_some(), "fast path and decoder disagree");
    Err(first.unwrap_or(Utf8Error::new(ErrorCode::InvalidLeadByte, 0)))
}
