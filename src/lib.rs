//! # utf8-sanitize
//!
//! WHATWG UTF-8 decoding with maximal-subpart replacement.
//!
//! ## Design principles
//!
//! - **One decoder, many projections.**
//!   Every lossy operation drives the same [`Decoder`], a lazy cursor yielding [`DecodeEvent`]s.
//!   [`sanitize`] keeps the text, [`to_codepoints`] keeps the codepoints, [`split_into_chunks`]
//!   groups the characters.
//! - **Sanitizing never fails.**
//!   Ill-formed input is replaced with U+FFFD, one maximal subpart at a time, exactly as browsers
//!   do. The result is always valid UTF-8, and valid input comes back borrowed and unchanged.
//! - **Strict entry points return `Result`.**
//!   [`validate`], [`decode`], [`decode_char`], [`encode`] and [`chunks`] report a [`Utf8Error`]
//!   with a stable [`ErrorCode`] and byte offset.
//!
//! See [`profile`] for the accepted byte ranges and the replacement rule.
//!
//! ```
//! use utf8_sanitize::{sanitize, to_codepoints};
//!
//! // `E0` requires A0..BF next, so `80` interrupts it and is then itself a stray byte.
//! assert_eq!(sanitize(b"\xE0\x80\x80"), "\u{FFFD}\u{FFFD}\u{FFFD}");
//! assert_eq!(to_codepoints(b"A\xC3\xA9"), [0x41, 0xE9]);
//! ```
//!
//! ## Feature flags
//!
//! - `std` *(default)*: implements `std::error::Error` for [`Utf8Error`].
//! - `alloc` *(default)*: enables owned outputs ([`sanitize`], [`to_codepoints`], chunking).
//! - `simdutf8`: enables SIMD-accelerated UTF-8 validation where supported.
//! - `serde`: derives `Serialize`/`Deserialize` for errors, options and sanitize reports.
//!
//! ## Logging
//!
//! Each replacement is reported through the [`log`] facade at `trace` level. Nothing is logged
//! unless the application installs a logger.
//!
//! ## `no_std`
//!
//! The crate is `no_std` compatible.
//! - Decoding, validation, encoding, [`sanitize_to`] and [`display_sanitized`] work without `alloc`.
//! - Owned APIs require `alloc` and therefore an allocator provided by your environment.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
mod chunk;
mod codepoints;
mod decoder;
mod display;
mod encode;
mod error;
mod options;
pub mod profile;
mod sanitize;
mod state;
pub(crate) mod utf8;
mod validate;

pub use crate::codepoints::{codepoints, Codepoints};
pub use crate::decoder::{decode, decode_char, decode_events, DecodeEvent, Decoder};
pub use crate::display::{label, CodepointLabel, HexDump};
pub use crate::encode::{encode, EncodedChar};
pub use crate::error::{ErrorCode, ErrorKind, Utf8Error};
pub use crate::options::SanitizeOptions;
pub use crate::profile::{
    MAX_CODEPOINT, REPLACEMENT_BYTES, REPLACEMENT_CHARACTER, REPLACEMENT_CODEPOINT,
};
pub use crate::sanitize::{display_sanitized, sanitize_to, Lossy};
pub use crate::validate::{is_valid_utf8, validate};

#[cfg(feature = "alloc")]
pub use crate::chunk::{chunks, split_into_chunks, Chunks};
#[cfg(feature = "alloc")]
pub use crate::codepoints::to_codepoints;
#[cfg(feature = "alloc")]
pub use crate::encode::encode_into;
#[cfg(feature = "alloc")]
pub use crate::sanitize::{sanitize, sanitize_with, Sanitized};
