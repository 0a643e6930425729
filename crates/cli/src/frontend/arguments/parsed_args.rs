use std::ffi::OsString;

/// Parsed command-line arguments for the dirsync front-end.
///
/// Values are kept as typed by the user. They become engine options only
/// after parsing succeeds, so usage errors can name the offending option.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedArgs {
    /// `--help`/`-h` was given.
    pub show_help: bool,
    /// `--version`/`-V` was given.
    pub show_version: bool,
    /// Raw `--operations` value; `None` selects every pass.
    pub operations: Option<String>,
    /// Every `--exclude` value, in command-line order.
    pub excludes: Vec<String>,
    /// Whether subdirectories are processed. The last of `-r` and
    /// `--no-recursive` wins.
    pub recursive: bool,
    /// Number of `-v` switches.
    pub verbosity: u8,
    /// `--quiet`/`-q` was given.
    pub quiet: bool,
    /// Every `--info` value, in command-line order.
    pub info: Vec<String>,
    /// Positional operands: source then target.
    pub operands: Vec<OsString>,
}
