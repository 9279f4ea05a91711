//! The WHATWG UTF-8 decoder state machine.
//!
//! See <https://encoding.spec.whatwg.org/#utf-8-decoder>. The machine is fed one byte at a time
//! and reports, per byte, whether a character completed, is still pending, or the input is
//! malformed. It never looks ahead and holds no reference to the input, so a single instance can
//! be driven by any cursor.

/// Default lower bound for a continuation byte.
const CONT_LOWER: u8 = 0x80;
/// Default upper bound for a continuation byte.
const CONT_UPPER: u8 = 0xBF;

/// Outcome of feeding a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The byte was accepted; more continuation bytes are needed.
    Pending,
    /// The byte completed a character.
    Complete(char),
    /// The byte cannot start a sequence. It is consumed.
    InvalidLead,
    /// The byte cannot continue the sequence in progress. It is **not** consumed and must be fed
    /// again once the machine has been reset.
    Interrupted,
}

/// Multi-byte sequence state carried across bytes.
///
/// Invariant: `bytes_seen <= bytes_needed`. Every terminal [`Step`] leaves the state reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeState {
    codepoint: u32,
    bytes_needed: u8,
    bytes_seen: u8,
    lower_boundary: u8,
    upper_boundary: u8,
}

impl Default for DecodeState {
    fn default() -> Self {
        Self::new()
    }
}

impl DecodeState {
    pub const fn new() -> Self {
        Self {
            codepoint: 0,
            bytes_needed: 0,
            bytes_seen: 0,
            lower_boundary: CONT_LOWER,
            upper_boundary: CONT_UPPER,
        }
    }

    /// Returns true while a multi-byte sequence is in progress.
    #[inline]
    pub const fn in_sequence(&self) -> bool {
        self.bytes_needed != 0
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Feed one byte.
    #[inline]
    pub fn step(&mut self, byte: u8) -> Step {
        if self.bytes_needed == 0 {
            return self.start(byte);
        }

        if byte < self.lower_boundary || byte > self.upper_boundary {
            self.reset();
            return Step::Interrupted;
        }

        self.lower_boundary = CONT_LOWER;
        self.upper_boundary = CONT_UPPER;
        self.codepoint = (self.codepoint << 6) | u32::from(byte & 0x3F);
        self.bytes_seen += 1;
        debug_assert!(self.bytes_seen <= self.bytes_needed);

        if self.bytes_seen < self.bytes_needed {
            return Step::Pending;
        }

        let cp = self.codepoint;
        self.reset();
        // The narrowed bounds exclude surrogates and values above 0x10FFFF.
        char::from_u32(cp).map_or(Step::InvalidLead, Step::Complete)
    }

    fn start(&mut self, byte: u8) -> Step {
        let needed = match byte {
            0x00..=0x7F => return Step::Complete(char::from(byte)),
            0xC2..=0xDF => 1,
            0xE0..=0xEF => {
                if byte == 0xE0 {
                    self.lower_boundary = 0xA0;
                }
                if byte == 0xED {
                    self.upper_boundary = 0x9F;
                }
                2
            }
            0xF0..=0xF4 => {
                if byte == 0xF0 {
                    self.lower_boundary = 0x90;
                }
                if byte == 0xF4 {
                    self.upper_boundary = 0x8F;
                }
                3
            }
            _ => return Step::InvalidLead,
        };
        self.bytes_needed = needed;
        self.codepoint = u32::from(byte & (0x7F >> (needed + 1)));
        Step::Pending
    }
}
