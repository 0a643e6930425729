//! Removal of target content that no longer exists in the source.

use std::path::Path;

use logging::{trace_del, trace_failure};

use super::events::{Item, ItemKind, SyncEvent};
use super::outcome::{ItemOutcome, SkipReason};
use super::walker::{DirectoryPass, Walker};

/// Delete pass: walks the target tree and removes every file and directory
/// without a source counterpart.
///
/// Extraneous directories are removed as a whole; only directories present on
/// both sides are descended into.
pub struct DeletePass<'a> {
    walker: Walker<'a>,
}

impl<'a> DeletePass<'a> {
    /// Creates the pass on top of `walker`.
    #[must_use]
    pub const fn new(walker: Walker<'a>) -> Self {
        Self { walker }
    }

    /// Synchronizes the root pair and returns the aggregate status.
    pub fn synchronize(&mut self, source: &Path, target: &Path) -> bool {
        self.walker.reset();
        self.synchronize_pair(source, target)
    }

    /// Returns the current walk depth; `0` outside of a walk.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.walker.depth()
    }

    fn delete_file(&mut self, source: &Path, target: &Path) -> ItemOutcome {
        let fs = self.walker.fs();
        if fs.is_file(source) {
            let item = Item::new(ItemKind::DeleteFile, source, target);
            self.walker.emit(&SyncEvent::ItemSkipped {
                item,
                reason: SkipReason::PresentInSource,
            });
            return ItemOutcome::Skipped(SkipReason::PresentInSource);
        }
        self.remove(ItemKind::DeleteFile, source, target)
    }

    fn remove(&mut self, kind: ItemKind, source: &Path, target: &Path) -> ItemOutcome {
        let fs = self.walker.fs();
        let item = Item::new(kind, source, target);
        self.walker.emit(&SyncEvent::ItemStarted { item });

        let result = if kind == ItemKind::DeleteDirectory {
            fs.remove_dir_all(target)
        } else {
            fs.remove_file(target)
        };

        match result {
            Ok(()) => {
                trace_del!("deleted {}", target.display());
                self.walker.emit(&SyncEvent::ItemSucceeded { item, bytes: 0 });
                ItemOutcome::Succeeded
            }
            Err(error) => {
                trace_failure!(
                    "dirsync::delete",
                    "failed to delete {}: {error}",
                    target.display()
                );
                self.walker.emit(&SyncEvent::ItemFailed {
                    item,
                    error: &error,
                });
                ItemOutcome::Failed
            }
        }
    }
}

impl DirectoryPass for DeletePass<'_> {
    fn depth_mut(&mut self) -> &mut usize {
        self.walker.depth_mut()
    }

    fn synchronize_pair(&mut self, source: &Path, target: &Path) -> bool {
        let fs = self.walker.fs();
        if !fs.is_dir(source) {
            return self.walker.source_missing(source);
        }
        if !fs.is_dir(target) {
            return true;
        }

        self.walker.enter(source, target);
        let Some(listing) = self.walker.list(target) else {
            return self.walker.leave(source, target, false);
        };

        let mut status = true;
        for name in &listing.files {
            self.delete_file(&source.join(name), &target.join(name))
                .fold_into(&mut status);
        }

        if self.walker.is_recursive() {
            for name in &listing.directories {
                let (child_source, child_target) = (source.join(name), target.join(name));
                if self
                    .walker
                    .skip_excluded(&child_source, &child_target, name)
                {
                    continue;
                }
                if fs.is_dir(&child_source) {
                    status &= self.descend(&child_source, &child_target);
                } else {
                    self.remove(ItemKind::DeleteDirectory, &child_source, &child_target)
                        .fold_into(&mut status);
                }
            }
        }

        self.walker.leave(source, target, status)
    }
}
