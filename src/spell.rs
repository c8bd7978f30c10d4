//! Main module for spellnum library functionality

pub mod chunk;
pub mod cli;
pub mod config;
pub mod format;
pub mod logging;
pub mod parse;
pub mod runner;
pub mod source;
pub mod stages;
pub mod tables;
pub mod token;
pub mod words;

pub use chunk::{Chunk, Chunks};
pub use config::RunConfig;
pub use format::{FormatError, OutputFormat};
pub use parse::{parse_integer, ParseOutcome, SkipReason};
pub use runner::{run, RunError, RunSummary};
pub use source::{InputMode, Origin, SourceError, TokenSource};
pub use stages::{Integer, Integers, PipelineError, SpellStages, Spellings};
pub use words::{spell, spell_chunk, to_words, SpellError, SpelledChunk, Spelling};
