#[cfg(feature = "simdutf8")]
use simdutf8::basic as simd_utf8;

/// Fast whole-buffer check; returns a borrowed `&str` on success.
///
/// Carries no error detail. Callers that need the position re-run the [`Decoder`](crate::Decoder)
/// on the failing input.
#[inline]
pub fn fast_validate(bytes: &[u8]) -> Option<&str> {
    #[cfg(feature = "simdutf8")]
    {
        simd_utf8::from_utf8(bytes).ok()
    }

    #[cfg(not(feature = "simdutf8"))]
    {
        core::str::from_utf8(bytes).ok()
    }
}
