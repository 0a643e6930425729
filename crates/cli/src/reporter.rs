//! Console rendering of synchronization events.
//!
//! [`ConsoleReporter`] is a [`SyncObserver`] that turns engine events into the
//! lines printed on standard output. Informational lines are gated by the
//! thread-local verbosity installed with [`logging::init`]; failures are
//! printed at every verbosity so `--quiet` never hides what went wrong.

use std::fmt;
use std::io::{self, Write};

use engine::SyncReport;
use engine::sync::{Item, ItemKind, PassKind, PassStatistics, SyncEvent, SyncObserver};
use logging::{InfoFlag, info_gte};

use crate::format::{format_duration, format_number, format_volume, rate};

/// Observer printing progress, failures and per-pass statistics.
pub struct ConsoleReporter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleReporter<W> {
    /// Creates a reporter writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Prints the overall status line and returns the writer.
    ///
    /// The first write error encountered while reporting, if any, is returned
    /// instead; reporting stops at that point but the run itself is unaffected.
    pub fn finish(mut self, report: &SyncReport) -> io::Result<W> {
        self.line(format_args!(
            "Directory content synchronization {} in {}.",
            status_word(report.succeeded()),
            format_duration(report.elapsed())
        ));
        if let Some(error) = self.error {
            return Err(error);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = self.out.write_fmt(args).and_then(|()| self.out.write_all(b"\n")) {
            self.error = Some(error);
        }
    }

    fn item_started(&mut self, item: Item<'_>) {
        match item.kind {
            ItemKind::DeleteFile | ItemKind::DeleteDirectory if info_gte(InfoFlag::Del, 1) => {
                self.line(format_args!("Deleting \"{}\"...", item.target.display()));
            }
            ItemKind::CopyFile if info_gte(InfoFlag::Copy, 1) => {
                self.line(format_args!("Copying \"{}\"...", item.source.display()));
            }
            ItemKind::CreateDirectory if info_gte(InfoFlag::Create, 1) => {
                self.line(format_args!("Creating \"{}\"...", item.target.display()));
            }
            ItemKind::ClearReadOnly if info_gte(InfoFlag::Check, 1) => {
                self.line(format_args!("Making \"{}\" writable...", item.target.display()));
            }
            ItemKind::CheckFile if info_gte(InfoFlag::Check, 2) => {
                self.line(format_args!("Checking \"{}\"...", item.source.display()));
            }
            _ => {}
        }
    }

    fn item_failed(&mut self, item: Item<'_>, error: &dyn fmt::Display) {
        let verb = match item.kind {
            ItemKind::DeleteFile | ItemKind::DeleteDirectory => "Deleting",
            ItemKind::CopyFile => "Copying",
            ItemKind::CreateDirectory => "Creating",
            ItemKind::CheckFile => "Checking",
            ItemKind::ClearReadOnly => {
                self.line(format_args!(
                    "Making \"{}\" writable failed: {error}",
                    item.target.display()
                ));
                return;
            }
        };
        self.line(format_args!(
            "{verb} \"{}\" failed: {error}",
            item.target.display()
        ));
    }

    fn pass_finished(&mut self, pass: PassKind, succeeded: bool, statistics: &PassStatistics) {
        if !info_gte(InfoFlag::Misc, 1) {
            return;
        }
        self.line(format_args!(
            "{} {} in {}.",
            banner(pass),
            status_word(succeeded),
            format_duration(statistics.total_elapsed())
        ));
        if info_gte(InfoFlag::Stats, 1) {
            self.statistics(pass, statistics);
        }
        self.line(format_args!(""));
    }

    fn statistics(&mut self, pass: PassKind, statistics: &PassStatistics) {
        if statistics.folders_succeeded() > 0 || statistics.folders_failed() > 0 {
            self.line(format_args!(
                "Succeeded folder count:  {}.",
                statistics.folders_succeeded()
            ));
            self.line(format_args!(
                "Failed folder count:     {}.",
                statistics.folders_failed()
            ));
            self.line(format_args!(
                "Time spent on folders:   {}.",
                format_duration(statistics.folder_time())
            ));
            if let Some(speed) = rate(
                statistics.folders_succeeded() as f64,
                statistics.folder_time(),
            ) {
                self.line(format_args!(
                    "Operation speed:         {} folders/s.",
                    format_number(speed)
                ));
            }
        }

        if statistics.files_succeeded() > 0 || statistics.files_failed() > 0 {
            self.line(format_args!(
                "Succeeded file count:    {}.",
                statistics.files_succeeded()
            ));
            self.line(format_args!(
                "Failed file count:       {}.",
                statistics.files_failed()
            ));
            self.line(format_args!(
                "Time spent on files:     {}.",
                format_duration(statistics.file_time())
            ));
            if let Some(speed) = rate(statistics.files_succeeded() as f64, statistics.file_time()) {
                self.line(format_args!(
                    "Operation speed:         {} files/s.",
                    format_number(speed)
                ));
            }
        }

        if pass != PassKind::Delete && statistics.files_succeeded() > 0 {
            let volume = statistics.bytes_copied() as f64;
            self.line(format_args!("Copied volume:           {}.", format_volume(volume)));
            if let Some(speed) = rate(volume, statistics.file_time()) {
                self.line(format_args!(
                    "Transfer speed:          {}/s.",
                    format_volume(speed)
                ));
            }
        }
    }
}

impl<W: Write> SyncObserver for ConsoleReporter<W> {
    fn on_event(&mut self, event: &SyncEvent<'_>) {
        match *event {
            SyncEvent::PassStarted { pass, .. } => {
                if info_gte(InfoFlag::Misc, 1) {
                    self.line(format_args!("{}...", banner(pass)));
                }
            }
            SyncEvent::PassFinished {
                pass,
                succeeded,
                statistics,
            } => self.pass_finished(pass, succeeded, statistics),
            SyncEvent::DirectoryEntered { source, depth, .. } => {
                if info_gte(InfoFlag::Walk, 1) {
                    self.line(format_args!(
                        "Entering \"{}\" (level {depth})...",
                        source.display()
                    ));
                }
            }
            SyncEvent::DirectoryLeft {
                target,
                depth,
                succeeded,
                ..
            } => {
                if info_gte(InfoFlag::Walk, 2) {
                    self.line(format_args!(
                        "Leaving \"{}\" (level {depth}), {}.",
                        target.display(),
                        status_word(succeeded)
                    ));
                }
            }
            SyncEvent::DirectorySkipped { source, .. } => {
                if info_gte(InfoFlag::Walk, 1) {
                    self.line(format_args!("Skipping directory \"{}\".", source.display()));
                }
            }
            SyncEvent::SourceMissing { source, .. } => {
                self.line(format_args!(
                    "Source directory \"{}\" does not exist.",
                    source.display()
                ));
            }
            SyncEvent::ListingFailed { directory, error } => {
                self.line(format_args!(
                    "Getting children of \"{}\" failed: {error}",
                    directory.display()
                ));
            }
            SyncEvent::ItemStarted { item } => self.item_started(item),
            SyncEvent::ItemSucceeded { .. } => {}
            SyncEvent::ItemFailed { item, error } => self.item_failed(item, error),
            SyncEvent::ItemSkipped { item, reason } => {
                if info_gte(InfoFlag::Skip, 2) {
                    self.line(format_args!(
                        "Skipping \"{}\": {}.",
                        item.affected_path().display(),
                        reason.describe()
                    ));
                }
            }
            SyncEvent::CheckCompleted { item, needs_update } => {
                if info_gte(InfoFlag::Check, 2) {
                    let verdict = if needs_update { "differs" } else { "is up to date" };
                    self.line(format_args!("\"{}\" {verdict}.", item.target.display()));
                }
            }
            SyncEvent::AttributesNotApplied { item, error } => {
                self.line(format_args!(
                    "Updating \"{}\" failed: {error}",
                    item.target.display()
                ));
            }
        }
    }
}

/// Heading printed when a pass starts and finishes.
#[must_use]
pub const fn banner(pass: PassKind) -> &'static str {
    match pass {
        PassKind::Delete => "Deleting extraneous content",
        PassKind::Update => "Updating modified content",
        PassKind::Create => "Creating new content",
    }
}

const fn status_word(succeeded: bool) -> &'static str {
    if succeeded { "succeeded" } else { "failed" }
}
