//! Formatting helpers for diagnostics.

use core::fmt;

/// Renders a codepoint in `U+XXXX` notation (at least four upper-case hex digits).
///
/// ```
/// use utf8_sanitize::label;
///
/// assert_eq!(label(0x41).to_string(), "U+0041");
/// assert_eq!(label(0x10FFFF).to_string(), "U+10FFFF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodepointLabel(pub u32);

impl fmt::Display for CodepointLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

/// Shorthand for [`CodepointLabel`].
#[inline]
#[must_use]
pub const fn label(codepoint: u32) -> CodepointLabel {
    CodepointLabel(codepoint)
}

/// Renders bytes as space-separated upper-case hex pairs, e.g. `EF BF BD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for b in self.0 {
            write!(f, "{sep}{b:02X}")?;
            sep = " ";
        }
        Ok(())
    }
}
