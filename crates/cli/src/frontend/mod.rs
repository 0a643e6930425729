//! Argument handling and run orchestration behind [`crate::run`].

use std::ffi::OsString;
use std::io::Write;

use engine::sync::SyncOptions;
use tracing::{error, info, warn};

use crate::exit_code::ExitCode;
use crate::reporter::ConsoleReporter;

pub mod arguments;
mod command_builder;
mod help;
mod options;

pub use options::UsageError;

/// Program name used in diagnostics, help and version output.
pub(crate) const PROGRAM_NAME: &str = "dirsync";

pub(crate) fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let parsed = match arguments::parse_args(arguments) {
        Ok(parsed) => parsed,
        Err(error) => return usage_failure(&UsageError::from(error), stderr),
    };

    if parsed.show_help {
        return write_or_fail(help::write_help(stdout), stderr);
    }
    if parsed.show_version {
        return write_or_fail(help::write_version(stdout), stderr);
    }

    let prepared = options::sync_options(&parsed)
        .and_then(|sync| options::verbosity(&parsed).map(|verbosity| (sync, verbosity)));
    let (sync, verbosity) = match prepared {
        Ok(prepared) => prepared,
        Err(error) => return usage_failure(&error, stderr),
    };

    logging::init(verbosity);
    // A subscriber left over from an earlier invocation in the same process stays in place.
    let _ = logging::init_tracing();

    execute(&sync, stdout, stderr)
}

fn execute<Out: Write, Err: Write>(
    options: &SyncOptions,
    stdout: &mut Out,
    stderr: &mut Err,
) -> ExitCode {
    info!(
        target: "dirsync::run",
        source_dir = %options.source().display(),
        target_dir = %options.target().display(),
        operations = %options.selected_operations(),
        "synchronization started"
    );

    let mut reporter = ConsoleReporter::new(&mut *stdout);
    let report = match engine::run_local(options, &mut reporter) {
        Ok(report) => report,
        Err(failure) => {
            error!(target: "dirsync::run", error = %failure, "synchronization aborted");
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {failure}");
            return ExitCode::Aborted;
        }
    };

    if let Err(failure) = reporter.finish(&report) {
        let _ = writeln!(stderr, "{PROGRAM_NAME}: failed to write output: {failure}");
    }

    if report.succeeded() {
        info!(
            target: "dirsync::run",
            actions = report.actions(),
            elapsed = ?report.elapsed(),
            "synchronization succeeded"
        );
        ExitCode::Ok
    } else {
        warn!(
            target: "dirsync::run",
            actions = report.actions(),
            failures = report.failures(),
            "synchronization failed"
        );
        ExitCode::Failed
    }
}

fn usage_failure<Err: Write>(error: &UsageError, stderr: &mut Err) -> ExitCode {
    let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
    let _ = help::write_usage_hint(stderr);
    ExitCode::Usage
}

fn write_or_fail<Err: Write>(result: std::io::Result<()>, stderr: &mut Err) -> ExitCode {
    match result {
        Ok(()) => ExitCode::Ok,
        Err(failure) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: failed to write output: {failure}");
            ExitCode::Failed
        }
    }
}
