//! Shared recursive descent over a source/target directory pair.

use std::ffi::{OsStr, OsString};
use std::ops::{Deref, DerefMut};
use std::path::Path;

use filters::ExclusionSet;
use logging::{trace_failure, trace_walk};

use super::events::{SyncEvent, SyncObserver};
use super::fs::{EntryKind, FileSystem};

/// State shared by every directory visited during one pass.
///
/// The walker owns the depth counter and borrows the filesystem, the
/// exclusion set and the observer for the duration of the pass.
pub struct Walker<'a> {
    fs: &'a dyn FileSystem,
    exclusions: &'a ExclusionSet,
    recursive: bool,
    observer: &'a mut dyn SyncObserver,
    depth: usize,
}

/// Children of a listed directory, split by kind and sorted by name.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Listing {
    pub(crate) files: Vec<OsString>,
    pub(crate) directories: Vec<OsString>,
}

impl<'a> Walker<'a> {
    /// Creates a recursive walker positioned at depth `0`.
    pub fn new(
        fs: &'a dyn FileSystem,
        exclusions: &'a ExclusionSet,
        observer: &'a mut dyn SyncObserver,
    ) -> Self {
        Self {
            fs,
            exclusions,
            recursive: true,
            observer,
            depth: 0,
        }
    }

    /// Enables or disables descent into subdirectories.
    ///
    /// A non-recursive walk handles the files of the root pair only.
    #[must_use]
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Returns the depth of the directory pair currently being processed.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Reports whether subdirectories are visited.
    #[must_use]
    pub const fn is_recursive(&self) -> bool {
        self.recursive
    }

    pub(crate) const fn fs(&self) -> &'a dyn FileSystem {
        self.fs
    }

    pub(crate) fn depth_mut(&mut self) -> &mut usize {
        &mut self.depth
    }

    pub(crate) fn reset(&mut self) {
        self.depth = 0;
    }

    pub(crate) fn emit(&mut self, event: &SyncEvent<'_>) {
        self.observer.on_event(event);
    }

    pub(crate) fn enter(&mut self, source: &Path, target: &Path) {
        trace_walk!("entering {} (depth {})", source.display(), self.depth);
        let depth = self.depth;
        self.emit(&SyncEvent::DirectoryEntered {
            source,
            target,
            depth,
        });
    }

    pub(crate) fn leave(&mut self, source: &Path, target: &Path, succeeded: bool) -> bool {
        let depth = self.depth;
        self.emit(&SyncEvent::DirectoryLeft {
            source,
            target,
            depth,
            succeeded,
        });
        succeeded
    }

    /// Reports a vanished source directory and returns the failed status.
    pub(crate) fn source_missing(&mut self, source: &Path) -> bool {
        trace_failure!("dirsync::walk", "source directory {} is missing", source.display());
        let depth = self.depth;
        self.emit(&SyncEvent::SourceMissing { source, depth });
        false
    }

    /// Lists `dir`, reporting a failure event when it cannot be enumerated.
    ///
    /// Entries that are neither files nor directories are dropped.
    pub(crate) fn list(&mut self, dir: &Path) -> Option<Listing> {
        let entries = match self.fs.read_dir(dir) {
            Ok(entries) => entries,
            Err(error) => {
                trace_failure!("dirsync::walk", "cannot list {}: {error}", dir.display());
                self.emit(&SyncEvent::ListingFailed {
                    directory: dir,
                    error: &error,
                });
                return None;
            }
        };

        let mut listing = Listing::default();
        for entry in entries {
            match entry.kind() {
                EntryKind::File => listing.files.push(entry.into_name()),
                EntryKind::Directory if is_dot_entry(entry.name()) => {}
                EntryKind::Directory => listing.directories.push(entry.into_name()),
                EntryKind::Other => {}
            }
        }
        Some(listing)
    }

    /// Tests `name` against the exclusions at the current depth.
    ///
    /// Emits [`SyncEvent::DirectorySkipped`] and returns `true` when the
    /// subdirectory must be left alone.
    pub(crate) fn skip_excluded(&mut self, source: &Path, target: &Path, name: &OsStr) -> bool {
        let depth = self.depth;
        if !self.exclusions.should_skip(name, depth) {
            return false;
        }
        trace_walk!("excluding {} at depth {depth}", source.display());
        self.emit(&SyncEvent::DirectorySkipped {
            source,
            target,
            depth,
        });
        true
    }
}

fn is_dot_entry(name: &OsStr) -> bool {
    name == "." || name == ".."
}

/// Pass-specific handling of one directory pair.
///
/// Implementors provide [`synchronize_pair`](Self::synchronize_pair); the
/// provided [`descend`](Self::descend) runs it one level deeper and restores
/// the depth afterwards, whatever the outcome.
pub(crate) trait DirectoryPass {
    fn depth_mut(&mut self) -> &mut usize;

    fn synchronize_pair(&mut self, source: &Path, target: &Path) -> bool;

    fn descend(&mut self, source: &Path, target: &Path) -> bool {
        let mut guard = DepthGuard::new(self);
        guard.synchronize_pair(source, target)
    }
}

/// Increments the depth on creation and decrements it when dropped,
/// including during unwinding.
pub(crate) struct DepthGuard<'g, P: DirectoryPass + ?Sized> {
    pass: &'g mut P,
}

impl<'g, P: DirectoryPass + ?Sized> DepthGuard<'g, P> {
    pub(crate) fn new(pass: &'g mut P) -> Self {
        *pass.depth_mut() += 1;
        Self { pass }
    }
}

impl<P: DirectoryPass + ?Sized> Deref for DepthGuard<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.pass
    }
}

impl<P: DirectoryPass + ?Sized> DerefMut for DepthGuard<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.pass
    }
}

impl<P: DirectoryPass + ?Sized> Drop for DepthGuard<'_, P> {
    fn drop(&mut self) {
        let depth = self.pass.depth_mut();
        *depth = depth.saturating_sub(1);
    }
}
