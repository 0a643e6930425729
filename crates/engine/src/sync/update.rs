//! Overwriting of target files that differ from their source.

use std::path::Path;

use logging::{trace_check, trace_failure};

use super::comparison::needs_update;
use super::copy::{CopyPass, copy_file, synchronize_tree};
use super::events::{Item, ItemKind, SyncEvent};
use super::outcome::SkipReason;
use super::walker::{DirectoryPass, Walker};

/// Update pass: walks the source tree and rewrites every target file whose
/// size or modification time differs.
///
/// Files missing from the target are left to the create pass, and target
/// directories are never created.
pub struct UpdatePass<'a> {
    walker: Walker<'a>,
}

impl<'a> UpdatePass<'a> {
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

    fn update_file(&mut self, source: &Path, target: &Path) -> bool {
        let fs = self.walker.fs();
        if !fs.is_file(target) {
            self.walker.emit(&SyncEvent::ItemSkipped {
                item: Item::new(ItemKind::CopyFile, source, target),
                reason: SkipReason::MissingFromTarget,
            });
            return true;
        }

        let check = Item::new(ItemKind::CheckFile, source, target);
        self.walker.emit(&SyncEvent::ItemStarted { item: check });

        let mut status = true;
        let update = match (fs.snapshot(source), fs.snapshot(target)) {
            (Ok(source_info), Ok(target_info)) => {
                let update = needs_update(&source_info, &target_info);
                trace_check!(
                    "{}: {} bytes vs {} bytes, update: {update}",
                    source.display(),
                    source_info.len(),
                    target_info.len()
                );
                self.walker.emit(&SyncEvent::CheckCompleted {
                    item: check,
                    needs_update: update,
                });
                if update && target_info.read_only() {
                    self.make_writable(source, target);
                }
                update
            }
            (Err(error), _) | (_, Err(error)) => {
                trace_failure!(
                    "dirsync::check",
                    "failed to compare {}: {error}",
                    source.display()
                );
                self.walker.emit(&SyncEvent::ItemFailed {
                    item: check,
                    error: &error,
                });
                status = false;
                true
            }
        };

        if !update {
            self.walker.emit(&SyncEvent::ItemSkipped {
                item: Item::new(ItemKind::CopyFile, source, target),
                reason: SkipReason::UpToDate,
            });
            return true;
        }

        status &= copy_file(&mut self.walker, source, target).is_success();
        status
    }

    /// Clears the read-only flag of `target`. A failure is reported but the
    /// copy is attempted regardless.
    fn make_writable(&mut self, source: &Path, target: &Path) {
        let fs = self.walker.fs();
        let item = Item::new(ItemKind::ClearReadOnly, source, target);
        self.walker.emit(&SyncEvent::ItemStarted { item });
        match fs.clear_read_only(target) {
            Ok(_) => self.walker.emit(&SyncEvent::ItemSucceeded { item, bytes: 0 }),
            Err(error) => {
                trace_failure!(
                    "dirsync::copy",
                    "failed to make {} writable: {error}",
                    target.display()
                );
                self.walker.emit(&SyncEvent::ItemFailed {
                    item,
                    error: &error,
                });
            }
        }
    }
}

impl DirectoryPass for UpdatePass<'_> {
    fn depth_mut(&mut self) -> &mut usize {
        self.walker.depth_mut()
    }

    fn synchronize_pair(&mut self, source: &Path, target: &Path) -> bool {
        synchronize_tree(self, source, target)
    }
}

impl<'a> CopyPass<'a> for UpdatePass<'a> {
    const CREATES_TARGET: bool = false;

    fn walker(&mut self) -> &mut Walker<'a> {
        &mut self.walker
    }

    fn synchronize_file(&mut self, source: &Path, target: &Path) -> bool {
        self.update_file(source, target)
    }
}
