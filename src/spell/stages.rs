//! Pipeline stages as iterator adaptors
//!
//! Each stage pulls from the one before it, one item at a time:
//!
//! ```rust,ignore
//! let spellings = TokenSource::from_args(["3", "abc", "5"])
//!     .integers()     // Result<Integer, SourceError>, "abc" skipped
//!     .spellings();   // Result<Spelling, PipelineError>
//! ```
//!
//! Nothing is read ahead. Dropping the last adaptor drops the source with it.

use crate::spell::parse::{parse_integer, ParseOutcome};
use crate::spell::source::SourceError;
use crate::spell::words::{spell, SpellError, Spelling};
use num_bigint::BigInt;
use std::fmt;

/// A token that parsed as an integer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Integer {
    /// The trimmed input text
    pub token: String,
    pub value: BigInt,
}

/// Errors surfaced by the pipeline
#[derive(Debug)]
pub enum PipelineError {
    /// The token origin failed; nothing more can be read
    Source(SourceError),
    /// One number could not be spelled; later numbers are unaffected
    Spell { token: String, error: SpellError },
}

impl PipelineError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, PipelineError::Source(_))
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Source(err) => write!(f, "{}", err),
            PipelineError::Spell { token, error } => write!(f, "{}: {}", token, error),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<SourceError> for PipelineError {
    fn from(err: SourceError) -> Self {
        PipelineError::Source(err)
    }
}

/// Turns tokens into integers, dropping tokens that do not parse
pub struct Integers<I> {
    tokens: I,
}

impl<I> Iterator for Integers<I>
where
    I: Iterator<Item = Result<String, SourceError>>,
{
    type Item = Result<Integer, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let token = match self.tokens.next()? {
                Ok(token) => token,
                Err(err) => return Some(Err(err)),
            };

            match parse_integer(&token) {
                ParseOutcome::Parsed(value) => return Some(Ok(Integer { token, value })),
                ParseOutcome::Skipped(reason) => {
                    tracing::debug!(token = %token, %reason, "skipping token");
                }
            }
        }
    }
}

/// Spells each integer
pub struct Spellings<I> {
    integers: I,
}

impl<I> Iterator for Spellings<I>
where
    I: Iterator<Item = Result<Integer, SourceError>>,
{
    type Item = Result<Spelling, PipelineError>;

    fn next(&mut self) -> Option<Self::Item> {
        let integer = match self.integers.next()? {
            Ok(integer) => integer,
            Err(err) => return Some(Err(PipelineError::Source(err))),
        };

        Some(
            spell(&integer.value).map_err(|error| PipelineError::Spell {
                token: integer.token,
                error,
            }),
        )
    }
}

/// Stage constructors for token and integer iterators
pub trait SpellStages: Iterator + Sized {
    fn integers(self) -> Integers<Self>
    where
        Self: Iterator<Item = Result<String, SourceError>>,
    {
        Integers { tokens: self }
    }

    fn spellings(self) -> Spellings<Self>
    where
        Self: Iterator<Item = Result<Integer, SourceError>>,
    {
        Spellings { integers: self }
    }
}

impl<I: Iterator> SpellStages for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spell::source::TokenSource;
    use std::io::{self, Cursor};

    fn lines(spellings: Spellings<Integers<TokenSource<Cursor<&str>>>>) -> Vec<String> {
        spellings.map(|s| s.unwrap().to_string()).collect()
    }

    #[test]
    fn test_invalid_tokens_are_dropped() {
        let input = Cursor::new("3\nabc\n5\n");
        let output = lines(TokenSource::from_reader(input).integers().spellings());
        assert_eq!(output, vec!["three", "five"]);
    }

    #[test]
    fn test_integers_keep_token_text() {
        let integers: Vec<_> = TokenSource::from_args(["  +12 ", "x"])
            .integers()
            .map(|i| i.unwrap())
            .collect();
        assert_eq!(
            integers,
            vec![Integer {
                token: "+12".to_string(),
                value: BigInt::from(12),
            }]
        );
    }

    #[test]
    fn test_overflow_is_per_item() {
        let huge = format!("1{}", "0".repeat(60));
        let mut spellings = TokenSource::from_args(["1", huge.as_str(), "2"])
            .integers()
            .spellings();

        assert_eq!(spellings.next().unwrap().unwrap().to_string(), "one");
        let err = spellings.next().unwrap().unwrap_err();
        assert!(!err.is_fatal());
        assert!(matches!(
            err,
            PipelineError::Spell {
                error: SpellError::MagnitudeOverflow { digits: 61 },
                ..
            }
        ));
        assert_eq!(spellings.next().unwrap().unwrap().to_string(), "two");
        assert!(spellings.next().is_none());
    }

    #[test]
    fn test_source_errors_pass_through() {
        let tokens = vec![
            Ok("4".to_string()),
            Err(SourceError::Read(io::Error::new(io::ErrorKind::Other, "gone"))),
        ];
        let results: Vec<_> = tokens.into_iter().integers().spellings().collect();
        assert_eq!(results.len(), 2);
        assert!(results[1].as_ref().unwrap_err().is_fatal());
    }

    #[test]
    fn test_pulls_lazily() {
        let mut pulled = 0;
        let tokens = std::iter::repeat_with(|| {
            pulled += 1;
            Ok::<_, SourceError>("7".to_string())
        });
        let first: Vec<_> = tokens.integers().spellings().take(2).collect();
        assert_eq!(first.len(), 2);
        assert_eq!(pulled, 2);
    }
}
