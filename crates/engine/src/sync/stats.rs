//! Per-pass counters collected from the event stream.

use std::time::{Duration, Instant};

use super::events::{ItemKind, SyncEvent, SyncObserver};
use super::outcome::SkipReason;

/// Counters describing one pass.
///
/// A fresh instance observes each pass; the driver attaches it next to the
/// caller's observer and stores it in the pass report once the walk is over.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PassStatistics {
    directories_entered: u64,
    directories_excluded: u64,
    sources_missing: u64,
    listings_failed: u64,
    files_succeeded: u64,
    files_failed: u64,
    folders_succeeded: u64,
    folders_failed: u64,
    files_kept: u64,
    files_up_to_date: u64,
    files_existing: u64,
    files_untracked: u64,
    checks_failed: u64,
    preparations_failed: u64,
    attributes_failed: u64,
    bytes_copied: u64,
    file_time: Duration,
    folder_time: Duration,
    total_elapsed: Duration,
    pending: Option<(ItemKind, Instant)>,
}

impl PassStatistics {
    /// Creates zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of directory pairs the walk entered.
    #[must_use]
    pub const fn directories_entered(&self) -> u64 {
        self.directories_entered
    }

    /// Returns the number of subdirectories skipped by an exclusion.
    #[must_use]
    pub const fn directories_excluded(&self) -> u64 {
        self.directories_excluded
    }

    /// Returns the number of pairs whose source directory was missing.
    #[must_use]
    pub const fn sources_missing(&self) -> u64 {
        self.sources_missing
    }

    /// Returns the number of directories that could not be listed.
    #[must_use]
    pub const fn listings_failed(&self) -> u64 {
        self.listings_failed
    }

    /// Returns the number of file copies and deletions that completed.
    #[must_use]
    pub const fn files_succeeded(&self) -> u64 {
        self.files_succeeded
    }

    /// Returns the number of file copies and deletions that failed.
    #[must_use]
    pub const fn files_failed(&self) -> u64 {
        self.files_failed
    }

    /// Returns the number of directory creations and deletions that completed.
    #[must_use]
    pub const fn folders_succeeded(&self) -> u64 {
        self.folders_succeeded
    }

    /// Returns the number of directory creations and deletions that failed.
    #[must_use]
    pub const fn folders_failed(&self) -> u64 {
        self.folders_failed
    }

    /// Returns the number of target files kept because the source has them.
    #[must_use]
    pub const fn files_kept(&self) -> u64 {
        self.files_kept
    }

    /// Returns the number of files whose target was already current.
    #[must_use]
    pub const fn files_up_to_date(&self) -> u64 {
        self.files_up_to_date
    }

    /// Returns the number of source files the create pass found already present.
    #[must_use]
    pub const fn files_existing(&self) -> u64 {
        self.files_existing
    }

    /// Returns the number of source files the update pass left to the create pass.
    #[must_use]
    pub const fn files_untracked(&self) -> u64 {
        self.files_untracked
    }

    /// Returns the number of comparisons that could not read a file.
    #[must_use]
    pub const fn checks_failed(&self) -> u64 {
        self.checks_failed
    }

    /// Returns the number of read-only targets that could not be made writable.
    #[must_use]
    pub const fn preparations_failed(&self) -> u64 {
        self.preparations_failed
    }

    /// Returns the number of copies whose attributes were not fully applied.
    #[must_use]
    pub const fn attributes_failed(&self) -> u64 {
        self.attributes_failed
    }

    /// Returns the number of content bytes written.
    #[must_use]
    pub const fn bytes_copied(&self) -> u64 {
        self.bytes_copied
    }

    /// Returns the time spent inside file operations.
    #[must_use]
    pub const fn file_time(&self) -> Duration {
        self.file_time
    }

    /// Returns the time spent inside directory operations.
    #[must_use]
    pub const fn folder_time(&self) -> Duration {
        self.folder_time
    }

    /// Returns the wall-clock duration of the whole pass.
    #[must_use]
    pub const fn total_elapsed(&self) -> Duration {
        self.total_elapsed
    }

    /// Returns the number of operations attempted on files and directories.
    #[must_use]
    pub const fn actions(&self) -> u64 {
        self.files_succeeded + self.files_failed + self.folders_succeeded + self.folders_failed
    }

    /// Returns every failure recorded during the pass.
    ///
    /// Copies whose attributes were not applied are counted separately by
    /// [`attributes_failed`](Self::attributes_failed).
    #[must_use]
    pub const fn failures(&self) -> u64 {
        self.files_failed
            + self.folders_failed
            + self.sources_missing
            + self.listings_failed
            + self.checks_failed
            + self.preparations_failed
    }

    pub(crate) fn finish(&mut self, elapsed: Duration) {
        self.total_elapsed = elapsed;
        self.pending = None;
    }

    fn record_started(&mut self, kind: ItemKind) {
        self.pending = Some((kind, Instant::now()));
    }

    fn record_time(&mut self, kind: ItemKind) {
        let Some((pending_kind, started)) = self.pending.take() else {
            return;
        };
        if pending_kind != kind {
            return;
        }
        let elapsed = started.elapsed();
        match kind {
            ItemKind::CopyFile | ItemKind::DeleteFile => self.file_time += elapsed,
            ItemKind::CreateDirectory | ItemKind::DeleteDirectory => self.folder_time += elapsed,
            ItemKind::CheckFile | ItemKind::ClearReadOnly => {}
        }
    }

    fn record_success(&mut self, kind: ItemKind, bytes: u64) {
        self.record_time(kind);
        match kind {
            ItemKind::CopyFile => {
                self.files_succeeded += 1;
                self.bytes_copied += bytes;
            }
            ItemKind::DeleteFile => self.files_succeeded += 1,
            ItemKind::CreateDirectory | ItemKind::DeleteDirectory => self.folders_succeeded += 1,
            ItemKind::CheckFile | ItemKind::ClearReadOnly => {}
        }
    }

    fn record_failure(&mut self, kind: ItemKind) {
        self.record_time(kind);
        match kind {
            ItemKind::CopyFile | ItemKind::DeleteFile => self.files_failed += 1,
            ItemKind::CreateDirectory | ItemKind::DeleteDirectory => self.folders_failed += 1,
            ItemKind::CheckFile => self.checks_failed += 1,
            ItemKind::ClearReadOnly => self.preparations_failed += 1,
        }
    }

    fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::PresentInSource => self.files_kept += 1,
            SkipReason::UpToDate => self.files_up_to_date += 1,
            SkipReason::AlreadyExists => self.files_existing += 1,
            SkipReason::MissingFromTarget => self.files_untracked += 1,
            SkipReason::Excluded => self.directories_excluded += 1,
        }
    }
}

impl SyncObserver for PassStatistics {
    fn on_event(&mut self, event: &SyncEvent<'_>) {
        match *event {
            SyncEvent::DirectoryEntered { .. } => self.directories_entered += 1,
            SyncEvent::DirectorySkipped { .. } => self.record_skip(SkipReason::Excluded),
            SyncEvent::SourceMissing { .. } => self.sources_missing += 1,
            SyncEvent::ListingFailed { .. } => self.listings_failed += 1,
            SyncEvent::ItemStarted { item } => self.record_started(item.kind),
            SyncEvent::ItemSucceeded { item, bytes } => self.record_success(item.kind, bytes),
            SyncEvent::ItemFailed { item, .. } => self.record_failure(item.kind),
            SyncEvent::ItemSkipped { reason, .. } => self.record_skip(reason),
            SyncEvent::AttributesNotApplied { .. } => self.attributes_failed += 1,
            SyncEvent::PassStarted { .. }
            | SyncEvent::PassFinished { .. }
            | SyncEvent::DirectoryLeft { .. }
            | SyncEvent::CheckCompleted { .. } => {}
        }
    }
}
