//! Conversion of parsed arguments into engine options and console verbosity.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use engine::sync::{OperationParseError, OperationSet, SyncOptions};
use filters::{ExclusionParseError, ExclusionSet, parse_exclusions};
use logging::VerbosityConfig;

use super::arguments::ParsedArgs;

/// Reasons a command line is rejected before any work starts.
#[derive(Debug)]
pub enum UsageError {
    /// clap rejected the arguments.
    Arguments(clap::Error),
    /// The `--operations` value was invalid.
    Operations(OperationParseError),
    /// An `--exclude` value was invalid.
    Exclusions(ExclusionParseError),
    /// An `--info` token was invalid.
    Info(String),
    /// Source and target were not both given, or extra operands followed.
    Operands(usize),
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arguments(error) => {
                let rendered = error.to_string();
                let first = rendered.lines().next().unwrap_or_default();
                f.write_str(first.strip_prefix("error: ").unwrap_or(first))
            }
            Self::Operations(error) => write!(f, "--operations: {error}"),
            Self::Exclusions(error) => write!(f, "--exclude: {error}"),
            Self::Info(message) => write!(f, "--info: {message}"),
            Self::Operands(0) => f.write_str("source and target directories are required"),
            Self::Operands(1) => f.write_str("target directory is required"),
            Self::Operands(count) => {
                write!(f, "expected a source and a target directory, got {count} paths")
            }
        }
    }
}

impl std::error::Error for UsageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Arguments(error) => Some(error),
            Self::Operations(error) => Some(error),
            Self::Exclusions(error) => Some(error),
            Self::Info(_) | Self::Operands(_) => None,
        }
    }
}

impl From<clap::Error> for UsageError {
    fn from(error: clap::Error) -> Self {
        Self::Arguments(error)
    }
}

/// Builds the run options from `parsed`.
pub(crate) fn sync_options(parsed: &ParsedArgs) -> Result<SyncOptions, UsageError> {
    let operands: &[OsString; 2] = parsed
        .operands
        .as_slice()
        .try_into()
        .map_err(|_| UsageError::Operands(parsed.operands.len()))?;
    let [source, target] = operands;

    let operations = match parsed.operations.as_deref() {
        Some(list) => list.parse().map_err(UsageError::Operations)?,
        None => OperationSet::all(),
    };

    let mut exclusions = Vec::new();
    for list in &parsed.excludes {
        exclusions.extend(parse_exclusions(list).map_err(UsageError::Exclusions)?);
    }

    Ok(SyncOptions::new(PathBuf::from(source), PathBuf::from(target))
        .operations(operations)
        .exclusions(ExclusionSet::new(exclusions))
        .recursive(parsed.recursive))
}

/// Derives console verbosity from `-v`, `-q` and `--info`.
///
/// `--quiet` wins over `-v`; `--info` tokens apply on top of either.
pub(crate) fn verbosity(parsed: &ParsedArgs) -> Result<VerbosityConfig, UsageError> {
    let mut config = if parsed.quiet {
        VerbosityConfig::quiet()
    } else {
        VerbosityConfig::from_verbose_level(parsed.verbosity)
    };
    for list in &parsed.info {
        for token in list.split(',').map(str::trim).filter(|token| !token.is_empty()) {
            config.apply_info_flag(token).map_err(UsageError::Info)?;
        }
    }
    Ok(config)
}
