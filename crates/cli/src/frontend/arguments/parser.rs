use std::ffi::OsString;

use super::ParsedArgs;
use crate::frontend::command_builder::clap_command;
use crate::frontend::PROGRAM_NAME;

/// Parses `arguments` (including the program name) into [`ParsedArgs`].
pub fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut matches = clap_command(PROGRAM_NAME)
        .try_get_matches_from(arguments.into_iter().map(Into::into))?;

    let strings = |matches: &mut clap::ArgMatches, id: &str| -> Vec<String> {
        matches
            .remove_many::<String>(id)
            .map(Iterator::collect)
            .unwrap_or_default()
    };

    let excludes = strings(&mut matches, "exclude");
    let info = strings(&mut matches, "info");
    let operands = matches
        .remove_many::<OsString>("operands")
        .map(Iterator::collect)
        .unwrap_or_default();

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        operations: matches.remove_one::<String>("operations"),
        excludes,
        recursive: !matches.get_flag("no-recursive"),
        verbosity: matches.get_count("verbose"),
        quiet: matches.get_flag("quiet"),
        info,
        operands,
    })
}
