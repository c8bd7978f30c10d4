//! English spelling of numbers
//!
//! Spelling happens per chunk. Each non-zero chunk is spelled on its own and paired
//! with its magnitude label; the pairs are then joined most significant first:
//!
//!     1234     ->  "one thousand, two hundred thirty four"
//!     1000001  ->  "one million, one"
//!     0        ->  "zero"
//!
//! Chunk spelling follows the usual idioms: 0-20 are looked up directly, larger
//! two-digit values compound a tens word with a ones word, and three-digit values
//! prefix "<ones> hundred" to the spelling of their last two digits.

use crate::spell::chunk::Chunks;
use crate::spell::tables::{HUNDRED, MAGNITUDES, ONES, TENS};
use num_bigint::BigInt;
use std::fmt;

/// Errors that can occur while spelling a number
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpellError {
    /// The number needs a magnitude beyond the label table (10^54 and above)
    MagnitudeOverflow { digits: usize },
    /// Chunk text that is not one to three significant decimal digits
    InvalidChunk(String),
}

impl fmt::Display for SpellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpellError::MagnitudeOverflow { digits } => write!(
                f,
                "magnitude overflow: {} digits exceeds the largest supported scale ({})",
                digits,
                MAGNITUDES[MAGNITUDES.len() - 1]
            ),
            SpellError::InvalidChunk(text) => write!(f, "invalid chunk '{}'", text),
        }
    }
}

impl std::error::Error for SpellError {}

/// One non-zero chunk paired with its label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpelledChunk {
    pub value: u16,
    pub magnitude: usize,
    pub words: String,
    pub label: &'static str,
}

impl fmt::Display for SpelledChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.label.is_empty() {
            write!(f, "{}", self.words)
        } else {
            write!(f, "{} {}", self.words, self.label)
        }
    }
}

/// The spelled form of a whole number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spelling {
    pub value: BigInt,
    /// Surviving chunks in descending magnitude. Never empty.
    pub parts: Vec<SpelledChunk>,
}

impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

/// Spell a number (its absolute value).
pub fn spell(value: &BigInt) -> Result<Spelling, SpellError> {
    let mut parts = Vec::new();

    for chunk in Chunks::new(value)? {
        if chunk.is_zero() {
            continue;
        }
        parts.push(SpelledChunk {
            value: chunk.value,
            magnitude: chunk.magnitude,
            words: spell_chunk(&chunk.digits())?,
            label: chunk.label(),
        });
    }

    // Only an all-zero number leaves nothing behind
    if parts.is_empty() {
        parts.push(SpelledChunk {
            value: 0,
            magnitude: 0,
            words: ONES[0].to_string(),
            label: MAGNITUDES[0],
        });
    }

    Ok(Spelling {
        value: value.clone(),
        parts,
    })
}

/// Spell a number straight to its display text.
pub fn to_words(value: &BigInt) -> Result<String, SpellError> {
    Ok(spell(value)?.to_string())
}

/// Spell the decimal text of one chunk.
///
/// Leading zeros are insignificant, so "" and "000" both spell as "zero" and
/// "007" spells as "seven".
pub fn spell_chunk(digits: &str) -> Result<String, SpellError> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SpellError::InvalidChunk(digits.to_string()));
    }

    let significant: Vec<usize> = digits
        .trim_start_matches('0')
        .bytes()
        .map(|b| usize::from(b - b'0'))
        .collect();

    match significant.as_slice() {
        [] => Ok(ONES[0].to_string()),
        [ones] => Ok(ONES[*ones].to_string()),
        [tens, ones] => Ok(spell_tens(*tens, *ones)),
        [hundreds, tens, ones] => {
            let mut words = format!("{} {}", ONES[*hundreds], HUNDRED);
            match (*tens, *ones) {
                (0, 0) => {}
                (0, ones) => {
                    words.push(' ');
                    words.push_str(ONES[ones]);
                }
                (tens, ones) => {
                    words.push(' ');
                    words.push_str(&spell_tens(tens, ones));
                }
            }
            Ok(words)
        }
        _ => Err(SpellError::InvalidChunk(digits.to_string())),
    }
}

/// Spell a two-digit value given as its digits.
fn spell_tens(tens: usize, ones: usize) -> String {
    let value = tens * 10 + ones;
    if value <= 20 {
        return ONES[value].to_string();
    }

    match ones {
        0 => TENS[tens].to_string(),
        _ => format!("{} {}", TENS[tens], ONES[ones]),
    }
}
