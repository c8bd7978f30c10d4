//! Base-1000 decomposition of integers
//!
//! A number's decimal digits are grouped in threes from the right. The leftmost
//! group may hold one to three digits. Groups are yielded most significant first,
//! each tagged with its magnitude index: 0 for ones, 1 for thousands, and so on.
//!
//!     1234567  ->  [1 (2), 234 (1), 567 (0)]

use crate::spell::tables::{magnitude_label, SUPPORTED_LIMIT};
use crate::spell::words::SpellError;
use num_bigint::BigInt;

/// One three-digit group of a larger number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// Group value, 0 through 999
    pub value: u16,
    /// Power of one thousand this group stands for
    pub magnitude: usize,
}

impl Chunk {
    /// Decimal text of the group with leading zeros removed ("0" for zero).
    pub fn digits(&self) -> String {
        self.value.to_string()
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Label for this chunk's magnitude ("" for the ones group).
    pub fn label(&self) -> &'static str {
        magnitude_label(self.magnitude).unwrap_or_default()
    }
}

/// Iterator over the chunks of one number, most significant first
#[derive(Debug, Clone)]
pub struct Chunks {
    digits: String,
    /// Byte offset of the next group in `digits`
    cursor: usize,
    /// Groups not yet yielded
    remaining: usize,
}

impl Chunks {
    /// Decompose the absolute value of `value`.
    ///
    /// Fails with [SpellError::MagnitudeOverflow] when the number has more groups
    /// than there are magnitude labels (values of 10^54 and above).
    pub fn new(value: &BigInt) -> Result<Self, SpellError> {
        let magnitude = value.magnitude();
        let digits = magnitude.to_string();

        if *magnitude >= *SUPPORTED_LIMIT {
            return Err(SpellError::MagnitudeOverflow {
                digits: digits.len(),
            });
        }

        let remaining = digits.len().div_ceil(3);
        tracing::trace!(digits = %digits, chunks = remaining, "decomposing number");

        Ok(Chunks {
            digits,
            cursor: 0,
            remaining,
        })
    }
}

impl Iterator for Chunks {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        if self.remaining == 0 {
            return None;
        }

        // The leftmost group takes whatever does not divide evenly into threes
        let width = match self.cursor {
            0 => match self.digits.len() % 3 {
                0 => 3,
                short => short,
            },
            _ => 3,
        };

        let group = &self.digits.as_bytes()[self.cursor..self.cursor + width];
        let value = group
            .iter()
            .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'));

        self.cursor += width;
        self.remaining -= 1;

        Some(Chunk {
            value,
            magnitude: self.remaining,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Chunks {}

/// Collect the chunks of `value` into a vector.
pub fn chunks(value: &BigInt) -> Result<Vec<Chunk>, SpellError> {
    Ok(Chunks::new(value)?.collect())
}
