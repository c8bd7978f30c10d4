//! Token definitions for integer literals
//!
//! A trimmed input token is run through this logos lexer to decide whether it is
//! an integer literal. Only a token that lexes to exactly one [Token::Integer]
//! spanning the whole text is handed to the big-integer parser; everything else
//! is classified so the caller can say why it was skipped.

use logos::Logos;

/// Literal shapes recognised in an input token
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    // Optionally signed run of ASCII digits
    #[regex(r"[+-]?[0-9]+")]
    Integer,

    // Fractional numbers such as "12.5", ".5" or "-0.25"
    #[regex(r"[+-]?[0-9]*\.[0-9]+")]
    Decimal,

    // Bare words
    #[regex(r"[A-Za-z_]+")]
    Word,
}

/// What a whole input token turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    /// Exactly one integer literal covering the whole text
    Integer,
    /// Exactly one decimal literal covering the whole text
    Decimal,
    /// Anything else (words, separators, mixed content, empty text)
    Other,
}

/// Classify a whole input token.
pub fn classify(source: &str) -> Literal {
    let mut lexer = Token::lexer(source);

    let literal = match lexer.next() {
        Some(Ok(Token::Integer)) => Literal::Integer,
        Some(Ok(Token::Decimal)) => Literal::Decimal,
        _ => return Literal::Other,
    };

    // Any leftover (e.g. "12.", "1_000", "12abc") disqualifies the token
    if lexer.span().end != source.len() || lexer.next().is_some() {
        return Literal::Other;
    }

    literal
}
