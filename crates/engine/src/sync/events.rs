//! Events emitted while a pass runs and the observers that consume them.

use std::io;
use std::path::Path;

use metadata::MetadataError;

use super::operation::PassKind;
use super::outcome::SkipReason;
use super::stats::PassStatistics;

/// Operation an item event refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ItemKind {
    /// Copying a file from source to target.
    CopyFile,
    /// Deleting a target file.
    DeleteFile,
    /// Deleting a target directory with all of its content.
    DeleteDirectory,
    /// Creating a target directory.
    CreateDirectory,
    /// Comparing a source file with its target counterpart.
    CheckFile,
    /// Clearing the read-only flag of a target file before overwriting it.
    ClearReadOnly,
}

/// Source and target path of the item an event refers to.
#[derive(Clone, Copy, Debug)]
pub struct Item<'a> {
    /// Operation being performed.
    pub kind: ItemKind,
    /// Path on the source side.
    pub source: &'a Path,
    /// Path on the target side.
    pub target: &'a Path,
}

impl<'a> Item<'a> {
    pub(crate) const fn new(kind: ItemKind, source: &'a Path, target: &'a Path) -> Self {
        Self {
            kind,
            source,
            target,
        }
    }

    /// Returns the path the operation changes.
    #[must_use]
    pub const fn affected_path(&self) -> &'a Path {
        match self.kind {
            ItemKind::CopyFile
            | ItemKind::DeleteFile
            | ItemKind::DeleteDirectory
            | ItemKind::CreateDirectory
            | ItemKind::ClearReadOnly => self.target,
            ItemKind::CheckFile => self.source,
        }
    }
}

/// Discrete event in the life of a pass.
#[derive(Clone, Copy, Debug)]
pub enum SyncEvent<'a> {
    /// A pass is about to walk the roots.
    PassStarted {
        /// Pass being run.
        pass: PassKind,
        /// Source root.
        source: &'a Path,
        /// Target root.
        target: &'a Path,
    },
    /// A pass has finished walking.
    PassFinished {
        /// Pass that ran.
        pass: PassKind,
        /// Aggregate status of the pass.
        succeeded: bool,
        /// Counters collected during the pass.
        statistics: &'a PassStatistics,
    },
    /// The walk entered a directory pair.
    DirectoryEntered {
        /// Source directory.
        source: &'a Path,
        /// Target directory.
        target: &'a Path,
        /// Depth of the pair, `0` for the roots.
        depth: usize,
    },
    /// The walk finished a directory pair.
    DirectoryLeft {
        /// Source directory.
        source: &'a Path,
        /// Target directory.
        target: &'a Path,
        /// Depth of the pair.
        depth: usize,
        /// Aggregate status of everything below the pair.
        succeeded: bool,
    },
    /// The source side of a pair vanished.
    SourceMissing {
        /// Missing source directory.
        source: &'a Path,
        /// Depth of the pair.
        depth: usize,
    },
    /// A subdirectory matched an exclusion and was not processed.
    DirectorySkipped {
        /// Source path of the excluded directory.
        source: &'a Path,
        /// Target path of the excluded directory.
        target: &'a Path,
        /// Depth the exclusion was evaluated at.
        depth: usize,
    },
    /// The children of a directory could not be enumerated.
    ListingFailed {
        /// Directory whose listing failed.
        directory: &'a Path,
        /// Underlying error.
        error: &'a io::Error,
    },
    /// An operation is about to run.
    ItemStarted {
        /// Item being processed.
        item: Item<'a>,
    },
    /// An operation completed.
    ItemSucceeded {
        /// Item processed.
        item: Item<'a>,
        /// Bytes written, `0` for operations that write no content.
        bytes: u64,
    },
    /// An operation failed.
    ItemFailed {
        /// Item processed.
        item: Item<'a>,
        /// Underlying error.
        error: &'a io::Error,
    },
    /// An item needed no operation.
    ItemSkipped {
        /// Item considered.
        item: Item<'a>,
        /// Why nothing was done.
        reason: SkipReason,
    },
    /// A source file was compared with its target counterpart.
    CheckCompleted {
        /// Item compared.
        item: Item<'a>,
        /// Whether the target will be overwritten.
        needs_update: bool,
    },
    /// File content was copied but its attributes could not all be applied.
    AttributesNotApplied {
        /// Copied item.
        item: Item<'a>,
        /// Underlying error.
        error: &'a MetadataError,
    },
}

/// Receiver of [`SyncEvent`]s.
///
/// Closures taking `&SyncEvent<'_>` implement this trait, so ad-hoc observers
/// need no named type.
pub trait SyncObserver {
    /// Handles one event.
    fn on_event(&mut self, event: &SyncEvent<'_>);
}

impl<F> SyncObserver for F
where
    F: FnMut(&SyncEvent<'_>),
{
    fn on_event(&mut self, event: &SyncEvent<'_>) {
        self(event);
    }
}

/// Observer that forwards every event to each registered observer in turn.
#[derive(Default)]
pub struct ObserverChain<'a> {
    observers: Vec<&'a mut dyn SyncObserver>,
}

impl<'a> ObserverChain<'a> {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an observer. Events reach observers in registration order.
    pub fn push(&mut self, observer: &'a mut dyn SyncObserver) {
        self.observers.push(observer);
    }

    /// Returns a chain extended with `observer`.
    #[must_use]
    pub fn with(mut self, observer: &'a mut dyn SyncObserver) -> Self {
        self.push(observer);
        self
    }

    /// Returns the number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Reports whether the chain has no observers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl SyncObserver for ObserverChain<'_> {
    fn on_event(&mut self, event: &SyncEvent<'_>) {
        for observer in &mut self.observers {
            observer.on_event(event);
        }
    }
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl SyncObserver for NullObserver {
    fn on_event(&mut self, _event: &SyncEvent<'_>) {}
}
