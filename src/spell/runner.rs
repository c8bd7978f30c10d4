//! Pipeline runner
//!
//! Drives tokens through the stages and writes one line per spelled number.
//! Numbers that cannot be spelled are reported on the error writer and the run
//! goes on; a failing token origin or output stream ends the run.

use crate::spell::config::RunConfig;
use crate::spell::format::FormatError;
use crate::spell::source::SourceError;
use crate::spell::stages::{PipelineError, SpellStages};
use std::fmt;
use std::io::{self, Write};

/// Counts from a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Numbers written to the output
    pub printed: usize,
    /// Numbers reported as failed
    pub failed: usize,
}

/// Errors that end a run
#[derive(Debug)]
pub enum RunError {
    Source(SourceError),
    Output(io::Error),
    Format(FormatError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Source(err) => write!(f, "{}", err),
            RunError::Output(err) => write!(f, "Failed to write output: {}", err),
            RunError::Format(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RunError {}

impl From<SourceError> for RunError {
    fn from(err: SourceError) -> Self {
        RunError::Source(err)
    }
}

impl From<io::Error> for RunError {
    fn from(err: io::Error) -> Self {
        RunError::Output(err)
    }
}

impl From<FormatError> for RunError {
    fn from(err: FormatError) -> Self {
        RunError::Format(err)
    }
}

/// Spell every integer in `tokens`.
///
/// Skipped tokens produce no output at all. Spelling failures go to `err` as
/// `error: <token>: <reason>` lines.
pub fn run<I, W, E>(
    config: &RunConfig,
    tokens: I,
    out: &mut W,
    err: &mut E,
) -> Result<RunSummary, RunError>
where
    I: IntoIterator<Item = Result<String, SourceError>>,
    W: Write,
    E: Write,
{
    let mut summary = RunSummary::default();

    for result in tokens.into_iter().integers().spellings() {
        match result {
            Ok(spelling) => {
                writeln!(out, "{}", config.format.render(&spelling)?)?;
                summary.printed += 1;
            }
            Err(PipelineError::Source(source)) => {
                out.flush()?;
                return Err(RunError::Source(source));
            }
            Err(failure) => {
                tracing::warn!(%failure, "could not spell number");
                writeln!(err, "error: {}", failure)?;
                summary.failed += 1;
            }
        }
    }

    out.flush()?;
    tracing::info!(
        printed = summary.printed,
        failed = summary.failed,
        "run finished"
    );
    Ok(summary)
}
