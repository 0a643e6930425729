#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` is the command-line front-end of dirsync. It parses the argument
//! vector, turns it into [`engine::SyncOptions`], runs the selected passes
//! and renders their events on the console.
//!
//! # Design
//!
//! The crate exposes [`run`] as the entry point. The function accepts an
//! iterator of arguments together with handles for standard output and error,
//! so tests drive it with in-memory buffers and the binary hands it the locked
//! process streams. A [`clap`](https://docs.rs/clap/) builder recognises
//! `--operations`, `--exclude`, `--recursive`/`--no-recursive`, `--verbose`,
//! `--quiet`, `--info`, `--help` and `--version`; everything after the options
//! is taken as the source and target operands.
//!
//! - [`reporter::ConsoleReporter`] observes the run and prints banners, item
//!   lines, failures and per-pass statistics, gated by the verbosity installed
//!   through [`logging::init`].
//! - [`format`] renders durations, byte volumes and rates.
//! - [`exit_code::ExitCode`] names the statuses returned to the shell.
//!
//! # Invariants
//!
//! - `run` never panics; failures surface as non-zero exit codes.
//! - Usage errors are written to the error stream together with a hint to run
//!   `dirsync -h`; the output stream stays empty.
//! - Failed items are always reported, regardless of `--quiet`.
//!
//! # Errors
//!
//! Argument problems yield exit code `1`. A run that cannot start (missing
//! source, empty selection) yields `3`. A run in which any operation failed
//! yields `4`.
//!
//! # Examples
//!
//! ```
//! use cli::run;
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = run(["dirsync", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert!(!stdout.is_empty());
//! assert!(stderr.is_empty());
//! ```

use std::ffi::OsString;
use std::io::Write;

pub mod exit_code;
pub mod format;
mod frontend;
pub mod reporter;

pub use exit_code::{ExitCode, exit_code_from};
pub use frontend::UsageError;
pub use frontend::arguments::{ParsedArgs, parse_args};

/// Runs the command line in `arguments` and returns the process exit status.
///
/// The first argument is the program name, as in `std::env::args_os`.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    frontend::run(arguments, stdout, stderr).as_i32()
}
