//! Copying of source content the target does not have yet.

use std::path::Path;

use super::copy::{CopyPass, copy_file, synchronize_tree};
use super::events::{Item, ItemKind, SyncEvent};
use super::outcome::SkipReason;
use super::walker::{DirectoryPass, Walker};

/// Create pass: walks the source tree, creates missing target directories
/// and copies every file the target lacks.
///
/// When a target directory cannot be created, nothing below it is attempted.
pub struct CreatePass<'a> {
    walker: Walker<'a>,
}

impl<'a> CreatePass<'a> {
    /// Creates the pass on top of `walker`.
    #[must_use]
    pub const fn new(walker: Walker<'a>) -> Self {
        Self { walker }
    }

    /// Synchronizes the root pair and returns the aggregate status.
    ///
    /// A missing target root is created like any other directory.
    pub fn synchronize(&mut self, source: &Path, target: &Path) -> bool {
        self.walker.reset();
        self.synchronize_pair(source, target)
    }

    /// Returns the current walk depth; `0` outside of a walk.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.walker.depth()
    }
}

impl DirectoryPass for CreatePass<'_> {
    fn depth_mut(&mut self) -> &mut usize {
        self.walker.depth_mut()
    }

    fn synchronize_pair(&mut self, source: &Path, target: &Path) -> bool {
        synchronize_tree(self, source, target)
    }
}

impl<'a> CopyPass<'a> for CreatePass<'a> {
    const CREATES_TARGET: bool = true;

    fn walker(&mut self) -> &mut Walker<'a> {
        &mut self.walker
    }

    fn synchronize_file(&mut self, source: &Path, target: &Path) -> bool {
        if self.walker.fs().is_file(target) {
            self.walker.emit(&SyncEvent::ItemSkipped {
                item: Item::new(ItemKind::CopyFile, source, target),
                reason: SkipReason::AlreadyExists,
            });
            return true;
        }
        copy_file(&mut self.walker, source, target).is_success()
    }
}
