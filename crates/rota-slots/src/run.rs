//! The one-byte run record.
//!
//! Each byte of a [`Slots`](crate::Slots) buffer is a self-contained run:
//!
//! ```text
//!  bit 7      bits 6..0
//! +---------+-----------------+
//! | avail   | run length - 1  |
//! +---------+-----------------+
//! ```
//!
//! so a record covers between 1 and [`MAX_RUN_LENGTH`] atoms. Every byte
//! value decodes to a valid run. This layout is the interchange format and
//! must not change.

use serde::{Deserialize, Serialize};

/// Longest run a single record can describe.
pub const MAX_RUN_LENGTH: usize = 1 << 7;

const AVAILABLE_BIT: u8 = 0b1000_0000;
const LENGTH_MASK: u8 = 0b0111_1111;

/// A decoded run record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Run {
    pub available: bool,
    /// Atoms covered, in `1..=MAX_RUN_LENGTH`.
    pub length: usize,
}

impl Run {
    pub fn decode(byte: u8) -> Self {
        Self {
            available: byte & AVAILABLE_BIT != 0,
            length: (byte & LENGTH_MASK) as usize + 1,
        }
    }

    /// Pack into a record byte. Lengths outside `1..=MAX_RUN_LENGTH` are
    /// clamped into that range.
    pub fn encode(self) -> u8 {
        let length = (self.length.clamp(1, MAX_RUN_LENGTH) - 1) as u8;
        if self.available {
            length | AVAILABLE_BIT
        } else {
            length
        }
    }
}

impl From<u8> for Run {
    fn from(byte: u8) -> Self {
        Run::decode(byte)
    }
}

/// Number of records needed to describe `length` atoms.
pub(crate) fn records_for(length: usize) -> usize {
    length.div_ceil(MAX_RUN_LENGTH)
}

/// Append `length` atoms of one flag to `out`, split into records of at most
/// [`MAX_RUN_LENGTH`] atoms. A zero length appends nothing.
pub(crate) fn push_run(out: &mut Vec<u8>, available: bool, mut length: usize) {
    while length > 0 {
        let chunk = length.min(MAX_RUN_LENGTH);
        out.push(
            Run {
                available,
                length: chunk,
            }
            .encode(),
        );
        length -= chunk;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_layout_is_stable() {
        assert_eq!(Run::decode(0x00), Run { available: false, length: 1 });
        assert_eq!(Run::decode(0x7f), Run { available: false, length: 128 });
        assert_eq!(Run::decode(0x80), Run { available: true, length: 1 });
        assert_eq!(Run::decode(0xff), Run { available: true, length: 128 });
        assert_eq!(Run { available: true, length: 4 }.encode(), 0b1000_0011);
    }

    #[test]
    fn out_of_range_lengths_clamp() {
        assert_eq!(Run { available: true, length: 0 }.encode(), 0x80);
        assert_eq!(Run { available: false, length: 0 }.encode(), 0x00);
        assert_eq!(Run { available: false, length: 200 }.encode(), 0x7f);
    }

    #[test]
    fn every_byte_decodes_and_reencodes() {
        for byte in 0..=u8::MAX {
            assert_eq!(Run::decode(byte).encode(), byte);
        }
    }

    #[test]
    fn long_runs_are_split() {
        let mut out = Vec::new();
        push_run(&mut out, true, 300);
        assert_eq!(out, vec![0xff, 0xff, 0x80 | 43]);
        assert_eq!(records_for(300), 3);

        push_run(&mut out, false, 0);
        assert_eq!(out.len(), 3);
    }
}
