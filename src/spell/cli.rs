//! Command-line definition for spellnum
//!
//! Usage:
//!   spellnum 1234 1000001               - Spell the arguments (interactive terminal)
//!   printf '3\nabc\n5\n' | spellnum     - Spell each line of piped input
//!   spellnum --format json 1234         - One JSON object per number

use crate::spell::format::OutputFormat;
use crate::spell::source::InputMode;
use clap::{Arg, ArgAction, Command};

/// Build the `spellnum` command
pub fn command() -> Command {
    Command::new("spellnum")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Spell integers as English words")
        .trailing_var_arg(true)
        .arg(
            Arg::new("numbers")
                .help("Numbers to spell when not reading from piped input")
                .num_args(0..)
                .allow_hyphen_values(true)
                .index(1),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .help("Where to read numbers from")
                .value_parser(InputMode::NAMES)
                .default_value("auto"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(OutputFormat::NAMES)
                .default_value("text"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more detail to stderr (repeat for more)")
                .action(ArgAction::Count),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let matches = command().try_get_matches_from(["spellnum"]).unwrap();
        assert_eq!(matches.get_one::<String>("input").unwrap(), "auto");
        assert_eq!(matches.get_one::<String>("format").unwrap(), "text");
        assert_eq!(matches.get_count("verbose"), 0);
    }

    #[test]
    fn test_hyphen_tokens_are_numbers_not_flags() {
        let matches = command()
            .try_get_matches_from(["spellnum", "-i", "args", "3", "-abc", "-x1", "--nope", "5"])
            .unwrap();
        let numbers: Vec<_> = matches.get_many::<String>("numbers").unwrap().collect();
        assert_eq!(numbers, vec!["3", "-abc", "-x1", "--nope", "5"]);
    }

    #[test]
    fn test_leading_unknown_hyphen_token() {
        let matches = command()
            .try_get_matches_from(["spellnum", "-i", "args", "-abc", "7"])
            .unwrap();
        let numbers: Vec<_> = matches.get_many::<String>("numbers").unwrap().collect();
        assert_eq!(numbers, vec!["-abc", "7"]);
    }

    #[test]
    fn test_rejects_unknown_format() {
        let result = command().try_get_matches_from(["spellnum", "--format", "xml"]);
        assert!(result.is_err());
    }
}
