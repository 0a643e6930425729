//! Run driver: validates the roots and executes the selected passes in order.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use filters::ExclusionSet;
use logging::trace_stats;

use super::create::CreatePass;
use super::delete::DeletePass;
use super::events::{ObserverChain, SyncEvent, SyncObserver};
use super::fs::{FileSystem, LocalFileSystem};
use super::operation::{OperationSet, PassKind};
use super::stats::PassStatistics;
use super::update::UpdatePass;
use super::walker::Walker;
use crate::error::{SyncError, SyncResult};

/// Parameters of one synchronization run.
#[derive(Clone, Debug)]
pub struct SyncOptions {
    source: PathBuf,
    target: PathBuf,
    operations: OperationSet,
    exclusions: ExclusionSet,
    recursive: bool,
}

impl SyncOptions {
    /// Creates options running every pass recursively without exclusions.
    pub fn new(source: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            operations: OperationSet::all(),
            exclusions: ExclusionSet::default(),
            recursive: true,
        }
    }

    /// Selects the passes to run.
    #[must_use]
    pub fn operations(mut self, operations: OperationSet) -> Self {
        self.operations = operations;
        self
    }

    /// Sets the exclusions applied to subdirectories.
    #[must_use]
    pub fn exclusions(mut self, exclusions: ExclusionSet) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// Enables or disables descent into subdirectories.
    #[must_use]
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Returns the source root.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Returns the target root.
    #[must_use]
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Returns the selected passes.
    #[must_use]
    pub const fn selected_operations(&self) -> OperationSet {
        self.operations
    }

    /// Returns the exclusion set.
    #[must_use]
    pub const fn exclusion_set(&self) -> &ExclusionSet {
        &self.exclusions
    }

    /// Reports whether subdirectories are visited.
    #[must_use]
    pub const fn is_recursive(&self) -> bool {
        self.recursive
    }
}

/// Outcome of one executed pass.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PassReport {
    kind: PassKind,
    succeeded: bool,
    statistics: PassStatistics,
}

impl PassReport {
    /// Returns which pass ran.
    #[must_use]
    pub const fn kind(&self) -> PassKind {
        self.kind
    }

    /// Reports whether every operation of the pass succeeded.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.succeeded
    }

    /// Returns the counters collected during the pass.
    #[must_use]
    pub const fn statistics(&self) -> &PassStatistics {
        &self.statistics
    }
}

/// Outcome of a whole run.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SyncReport {
    passes: Vec<PassReport>,
    elapsed: Duration,
}

impl SyncReport {
    /// Returns one report per executed pass, in execution order.
    #[must_use]
    pub fn passes(&self) -> &[PassReport] {
        &self.passes
    }

    /// Returns the report of `kind`, if that pass ran.
    #[must_use]
    pub fn pass(&self, kind: PassKind) -> Option<&PassReport> {
        self.passes.iter().find(|report| report.kind == kind)
    }

    /// Reports whether every executed pass succeeded.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.passes.iter().all(PassReport::succeeded)
    }

    /// Returns the wall-clock duration of the run.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns the number of file and directory operations attempted.
    #[must_use]
    pub fn actions(&self) -> u64 {
        self.passes
            .iter()
            .map(|report| report.statistics.actions())
            .sum()
    }

    /// Returns the number of failures recorded across all passes.
    #[must_use]
    pub fn failures(&self) -> u64 {
        self.passes
            .iter()
            .map(|report| report.statistics.failures())
            .sum()
    }
}

/// Runs the selected passes against `fs`, reporting every event to `observer`.
///
/// Passes run in the order delete, update, create. A failing pass does not
/// prevent the following ones.
///
/// # Errors
///
/// Returns [`SyncError`] without running any pass when the selection is empty
/// or the source root is missing or not a directory.
pub fn run(
    options: &SyncOptions,
    fs: &dyn FileSystem,
    observer: &mut dyn SyncObserver,
) -> SyncResult<SyncReport> {
    validate(options)?;

    let started = Instant::now();
    let mut passes = Vec::new();
    for kind in options.operations.iter() {
        passes.push(run_pass(kind, options, fs, observer));
    }

    Ok(SyncReport {
        passes,
        elapsed: started.elapsed(),
    })
}

/// Runs the selected passes against the local filesystem.
///
/// # Errors
///
/// See [`run`].
pub fn run_local(options: &SyncOptions, observer: &mut dyn SyncObserver) -> SyncResult<SyncReport> {
    run(options, &LocalFileSystem::new(), observer)
}

fn validate(options: &SyncOptions) -> SyncResult<()> {
    if options.operations.is_empty() {
        return Err(SyncError::no_operations());
    }

    match fs::metadata(&options.source) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(SyncError::source_not_directory(&options.source)),
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            Err(SyncError::source_missing(&options.source))
        }
        Err(error) => Err(SyncError::inspect_source(&options.source, error)),
    }
}

fn run_pass(
    kind: PassKind,
    options: &SyncOptions,
    fs: &dyn FileSystem,
    observer: &mut dyn SyncObserver,
) -> PassReport {
    let (source, target) = (options.source(), options.target());
    observer.on_event(&SyncEvent::PassStarted {
        pass: kind,
        source,
        target,
    });

    let started = Instant::now();
    let mut statistics = PassStatistics::new();
    let succeeded = {
        let mut chain = ObserverChain::new().with(&mut statistics).with(observer);
        let walker = Walker::new(fs, &options.exclusions, &mut chain).recursive(options.recursive);
        match kind {
            PassKind::Delete => DeletePass::new(walker).synchronize(source, target),
            PassKind::Update => UpdatePass::new(walker).synchronize(source, target),
            PassKind::Create => CreatePass::new(walker).synchronize(source, target),
        }
    };
    statistics.finish(started.elapsed());

    trace_stats!(
        pass = kind.name(),
        succeeded,
        actions = statistics.actions(),
        failures = statistics.failures(),
        bytes = statistics.bytes_copied(),
        "pass finished"
    );
    observer.on_event(&SyncEvent::PassFinished {
        pass: kind,
        succeeded,
        statistics: &statistics,
    });

    PassReport {
        kind,
        succeeded,
        statistics,
    }
}
