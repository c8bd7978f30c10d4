//! Token sources
//!
//! Tokens come either from a piped stream (one token per non-blank line) or from
//! the process arguments (one token per non-blank argument). In both cases tokens
//! are trimmed and blanks are skipped, in arrival order.
//!
//! Lines are read through `BufRead::lines`, so a line that arrives split across
//! several reads is reassembled before it is yielded.

use std::fmt;
use std::io::{self, BufRead};
use std::vec;

/// How the caller asked for the origin to be chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Stdin when it is not an interactive terminal, arguments otherwise
    #[default]
    Auto,
    Stdin,
    Args,
}

/// Where tokens are actually read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Stdin,
    Args,
}

impl InputMode {
    pub const NAMES: [&'static str; 3] = ["auto", "stdin", "args"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "auto" => Some(InputMode::Auto),
            "stdin" => Some(InputMode::Stdin),
            "args" => Some(InputMode::Args),
            _ => None,
        }
    }

    /// Pick the origin, given whether stdin is an interactive terminal.
    pub fn resolve(self, stdin_is_tty: bool) -> Origin {
        match self {
            InputMode::Stdin => Origin::Stdin,
            InputMode::Args => Origin::Args,
            InputMode::Auto if stdin_is_tty => Origin::Args,
            InputMode::Auto => Origin::Stdin,
        }
    }
}

/// Error reading from the token origin. Always fatal for the run.
#[derive(Debug)]
pub enum SourceError {
    Read(io::Error),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Read(err) => write!(f, "Failed to read input: {}", err),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Read(err) => Some(err),
        }
    }
}

impl From<io::Error> for SourceError {
    fn from(err: io::Error) -> Self {
        SourceError::Read(err)
    }
}

enum Feed<R> {
    Lines(io::Lines<R>),
    Args(vec::IntoIter<String>),
    Done,
}

/// Lazy sequence of trimmed, non-empty tokens
pub struct TokenSource<R> {
    feed: Feed<R>,
}

impl<R: BufRead> TokenSource<R> {
    /// Tokens from the lines of a reader
    pub fn from_reader(reader: R) -> Self {
        TokenSource {
            feed: Feed::Lines(reader.lines()),
        }
    }
}

impl TokenSource<io::Empty> {
    /// Tokens from an argument list
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        TokenSource {
            feed: Feed::Args(args.into_iter()),
        }
    }
}

impl<R: BufRead> Iterator for TokenSource<R> {
    type Item = Result<String, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = match &mut self.feed {
                Feed::Lines(lines) => match lines.next() {
                    Some(Ok(line)) => line,
                    Some(Err(err)) => {
                        // A broken stream yields nothing further
                        self.feed = Feed::Done;
                        return Some(Err(SourceError::Read(err)));
                    }
                    None => {
                        self.feed = Feed::Done;
                        return None;
                    }
                },
                Feed::Args(args) => args.next()?,
                Feed::Done => return None,
            };

            let token = raw.trim();
            if !token.is_empty() {
                return Some(Ok(token.to_string()));
            }
        }
    }
}
