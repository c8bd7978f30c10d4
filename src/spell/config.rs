//! Run configuration
//!
//! Everything a run needs, resolved from the parsed command line.

use crate::spell::format::{FormatError, OutputFormat};
use crate::spell::source::InputMode;
use clap::ArgMatches;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunConfig {
    pub input: InputMode,
    pub format: OutputFormat,
    /// Number of `-v` flags given
    pub verbosity: u8,
    /// Positional arguments, used as tokens in argument mode
    pub numbers: Vec<String>,
}

impl RunConfig {
    /// Build a configuration from matches produced by [crate::spell::cli::command]
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, FormatError> {
        let input = matches
            .get_one::<String>("input")
            .and_then(|name| InputMode::from_name(name))
            .unwrap_or_default();

        let format = match matches.get_one::<String>("format") {
            Some(name) => OutputFormat::from_name(name)?,
            None => OutputFormat::default(),
        };

        let numbers = matches
            .get_many::<String>("numbers")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        Ok(RunConfig {
            input,
            format,
            verbosity: matches.get_count("verbose"),
            numbers,
        })
    }
}
