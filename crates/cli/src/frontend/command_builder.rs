use clap::{Arg, ArgAction, Command, builder::OsStringValueParser};

/// Builds the `clap` command used for parsing.
///
/// Help and version flags are declared by hand so their output stays under
/// the front-end's control instead of clap's renderer.
pub(crate) fn clap_command(program_name: &'static str) -> Command {
    Command::new(program_name)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg_required_else_help(false)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("operations")
                .long("operations")
                .short('o')
                .value_name("NAMES")
                .help("Comma-delimited operations to perform.")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("exclude")
                .long("exclude")
                .short('e')
                .value_name("NAMES")
                .help("Comma-delimited directory names to skip, each as name[:level].")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("recursive")
                .long("recursive")
                .short('r')
                .help("Descend into subdirectories (default).")
                .action(ArgAction::SetTrue)
                .overrides_with("no-recursive"),
        )
        .arg(
            Arg::new("no-recursive")
                .long("no-recursive")
                .help("Process only the top-level directory pair.")
                .action(ArgAction::SetTrue)
                .overrides_with("recursive"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Report more detail; repeat for traversal and checks.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Report only failures and the final status.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("info")
                .long("info")
                .value_name("FLAGS")
                .help("Fine-grained console output levels, e.g. walk2,copy0.")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("operands")
                .value_name("PATH")
                .num_args(0..)
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Append),
        )
}
