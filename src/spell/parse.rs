//! Integer parsing for input tokens
//!
//! Parsing never fails loudly. A token either becomes an arbitrary-precision
//! integer or is skipped with a [SkipReason] the caller may log and discard.

use crate::spell::token::{classify, Literal};
use num_bigint::{BigInt, Sign};
use std::fmt;
use std::str::FromStr;

/// Result of parsing one token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Parsed(BigInt),
    Skipped(SkipReason),
}

/// Why a token was not turned into an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Nothing left after trimming
    Empty,
    /// A decimal literal such as "12.5"
    Fractional,
    /// Anything that is not a plain optionally signed digit run
    Malformed,
    /// A well-formed integer below zero
    Negative,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Empty => write!(f, "empty token"),
            SkipReason::Fractional => write!(f, "fractional numbers are not supported"),
            SkipReason::Malformed => write!(f, "not an integer literal"),
            SkipReason::Negative => write!(f, "negative numbers are not supported"),
        }
    }
}

impl ParseOutcome {
    pub fn is_parsed(&self) -> bool {
        matches!(self, ParseOutcome::Parsed(_))
    }

    /// The parsed value, if any
    pub fn value(self) -> Option<BigInt> {
        match self {
            ParseOutcome::Parsed(value) => Some(value),
            ParseOutcome::Skipped(_) => None,
        }
    }
}

/// Parse a token as an exact base-10 integer.
///
/// Surrounding whitespace is ignored. An optional leading `+` or `-` is accepted,
/// followed by ASCII digits only: no separators, decimals or exponents.
pub fn parse_integer(token: &str) -> ParseOutcome {
    let token = token.trim();
    if token.is_empty() {
        return ParseOutcome::Skipped(SkipReason::Empty);
    }

    match classify(token) {
        Literal::Integer => {}
        Literal::Decimal => return ParseOutcome::Skipped(SkipReason::Fractional),
        Literal::Other => return ParseOutcome::Skipped(SkipReason::Malformed),
    }

    let value = match BigInt::from_str(token) {
        Ok(value) => value,
        Err(_) => return ParseOutcome::Skipped(SkipReason::Malformed),
    };

    if value.sign() == Sign::Minus {
        return ParseOutcome::Skipped(SkipReason::Negative);
    }

    ParseOutcome::Parsed(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(n: u64) -> ParseOutcome {
        ParseOutcome::Parsed(BigInt::from(n))
    }

    #[test]
    fn test_plain_integers() {
        assert_eq!(parse_integer("0"), parsed(0));
        assert_eq!(parse_integer("1234"), parsed(1234));
        assert_eq!(parse_integer("+15"), parsed(15));
        assert_eq!(parse_integer("007"), parsed(7));
    }

    #[test]
    fn test_whitespace_is_ignored() {
        assert_eq!(parse_integer("  42\t"), parsed(42));
    }

    #[test]
    fn test_arbitrary_precision() {
        let digits = "123456789012345678901234567890123456789";
        let outcome = parse_integer(digits);
        assert_eq!(outcome.value().map(|v| v.to_string()), Some(digits.to_string()));
    }

    #[test]
    fn test_skips() {
        assert_eq!(parse_integer(""), ParseOutcome::Skipped(SkipReason::Empty));
        assert_eq!(parse_integer("   "), ParseOutcome::Skipped(SkipReason::Empty));
        assert_eq!(
            parse_integer("12.5"),
            ParseOutcome::Skipped(SkipReason::Fractional)
        );
        assert_eq!(
            parse_integer("abc"),
            ParseOutcome::Skipped(SkipReason::Malformed)
        );
        assert_eq!(
            parse_integer("1_000"),
            ParseOutcome::Skipped(SkipReason::Malformed)
        );
        assert_eq!(
            parse_integer("1,000"),
            ParseOutcome::Skipped(SkipReason::Malformed)
        );
        assert_eq!(
            parse_integer("-5"),
            ParseOutcome::Skipped(SkipReason::Negative)
        );
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!(parse_integer("-0"), parsed(0));
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(SkipReason::Malformed.to_string(), "not an integer literal");
        assert_eq!(
            SkipReason::Negative.to_string(),
            "negative numbers are not supported"
        );
    }
}
