//! Fixed English lookup tables
//!
//! All tables are plain constant arrays. They are indexed by digit value (or by
//! magnitude index for [MAGNITUDES]) and never mutated.

use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// Words for 0 through 20, covering the irregular teens.
pub const ONES: [&str; 21] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
    "twenty",
];

/// Tens words indexed by the tens digit. Slots 0 and 1 are never reached
/// through the tens path (values up to 20 go through [ONES]).
pub const TENS: [&str; 10] = [
    "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

pub const HUNDRED: &str = "hundred";

/// Short-scale magnitude labels, indexed by power of one thousand.
pub const MAGNITUDES: [&str; 18] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
    "undecillion",
    "duodecillion",
    "tredecillion",
    "quattuordecillion",
    "quindecillion",
    "sexdecillion",
];

/// Largest number of base-1000 chunks a spelled number may have.
pub const MAX_CHUNKS: usize = MAGNITUDES.len();

/// Exclusive upper bound of the supported range: 1000^18 = 10^54.
pub static SUPPORTED_LIMIT: Lazy<BigUint> =
    Lazy::new(|| BigUint::from(1000u32).pow(MAX_CHUNKS as u32));

/// Magnitude label for a chunk index, if the table covers it.
pub fn magnitude_label(index: usize) -> Option<&'static str> {
    MAGNITUDES.get(index).copied()
}
