//! Output formats
//!
//! A spelling can be printed as plain words (`text`, the default) or as one JSON
//! object per line (`json`) that also carries the chunk breakdown.

use crate::spell::words::Spelling;
use serde::Serialize;
use std::fmt;

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Errors that can occur while formatting output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    UnknownFormat(String),
    Serialization(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownFormat(name) => write!(
                f,
                "Unknown format '{}' (available: {})",
                name,
                OutputFormat::NAMES.join(", ")
            ),
            FormatError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}

/// JSON shape of one spelled number
#[derive(Debug, Serialize)]
struct SpellingRecord<'a> {
    input: String,
    words: String,
    chunks: Vec<ChunkRecord<'a>>,
}

#[derive(Debug, Serialize)]
struct ChunkRecord<'a> {
    value: u16,
    magnitude: usize,
    words: &'a str,
    label: &'a str,
}

impl<'a> From<&'a Spelling> for SpellingRecord<'a> {
    fn from(spelling: &'a Spelling) -> Self {
        SpellingRecord {
            input: spelling.value.to_string(),
            words: spelling.to_string(),
            chunks: spelling
                .parts
                .iter()
                .map(|part| ChunkRecord {
                    value: part.value,
                    magnitude: part.magnitude,
                    words: &part.words,
                    label: part.label,
                })
                .collect(),
        }
    }
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];

    /// Parse a format name like "text" or "json"
    pub fn from_name(name: &str) -> Result<Self, FormatError> {
        match name {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(FormatError::UnknownFormat(other.to_string())),
        }
    }

    /// Render one spelling as a single line (without the trailing newline)
    pub fn render(&self, spelling: &Spelling) -> Result<String, FormatError> {
        match self {
            OutputFormat::Text => Ok(spelling.to_string()),
            OutputFormat::Json => serde_json::to_string(&SpellingRecord::from(spelling))
                .map_err(|e| FormatError::Serialization(e.to_string())),
        }
    }
}
