//! Source-driven walk shared by the update and create passes.

use std::path::Path;

use logging::{trace_copy, trace_create, trace_failure};

use super::events::{Item, ItemKind, SyncEvent};
use super::outcome::ItemOutcome;
use super::walker::{DirectoryPass, Walker};

/// Pass that lists the source side of each pair and handles its files.
pub(crate) trait CopyPass<'a>: DirectoryPass {
    /// Whether a missing target directory is created instead of skipped.
    const CREATES_TARGET: bool;

    fn walker(&mut self) -> &mut Walker<'a>;

    /// Handles one source file and returns whether it kept the pair successful.
    fn synchronize_file(&mut self, source: &Path, target: &Path) -> bool;
}

/// Processes one directory pair for a [`CopyPass`]: files first, then
/// every non-excluded subdirectory.
pub(crate) fn synchronize_tree<'a, P>(pass: &mut P, source: &Path, target: &Path) -> bool
where
    P: CopyPass<'a> + ?Sized,
{
    let fs = pass.walker().fs();
    if !fs.is_dir(source) {
        return pass.walker().source_missing(source);
    }
    let target_exists = fs.is_dir(target);
    if !target_exists && !P::CREATES_TARGET {
        return true;
    }

    pass.walker().enter(source, target);
    if !target_exists && !create_directory(pass.walker(), source, target).is_success() {
        return pass.walker().leave(source, target, false);
    }

    let Some(listing) = pass.walker().list(source) else {
        return pass.walker().leave(source, target, false);
    };

    let mut status = true;
    for name in &listing.files {
        status &= pass.synchronize_file(&source.join(name), &target.join(name));
    }

    if pass.walker().is_recursive() {
        for name in &listing.directories {
            let (child_source, child_target) = (source.join(name), target.join(name));
            if pass
                .walker()
                .skip_excluded(&child_source, &child_target, name)
            {
                continue;
            }
            status &= pass.descend(&child_source, &child_target);
        }
    }

    pass.walker().leave(source, target, status)
}

/// Copies content and attributes of `source` over `target`.
///
/// A failed attribute transfer is reported but does not undo the copy's
/// success; it yields [`ItemOutcome::Partial`].
pub(crate) fn copy_file(walker: &mut Walker<'_>, source: &Path, target: &Path) -> ItemOutcome {
    let fs = walker.fs();
    let item = Item::new(ItemKind::CopyFile, source, target);
    walker.emit(&SyncEvent::ItemStarted { item });

    let bytes = match fs.copy_file(source, target) {
        Ok(bytes) => bytes,
        Err(error) => {
            trace_failure!(
                "dirsync::copy",
                "failed to copy {} to {}: {error}",
                source.display(),
                target.display()
            );
            walker.emit(&SyncEvent::ItemFailed {
                item,
                error: &error,
            });
            return ItemOutcome::Failed;
        }
    };

    let outcome = match fs.copy_attributes(source, target) {
        Ok(()) => ItemOutcome::Succeeded,
        Err(error) => {
            trace_failure!("dirsync::copy", "{error}");
            walker.emit(&SyncEvent::AttributesNotApplied {
                item,
                error: &error,
            });
            ItemOutcome::Partial
        }
    };

    trace_copy!("copied {bytes} bytes to {}", target.display());
    walker.emit(&SyncEvent::ItemSucceeded { item, bytes });
    outcome
}

fn create_directory(walker: &mut Walker<'_>, source: &Path, target: &Path) -> ItemOutcome {
    let fs = walker.fs();
    let item = Item::new(ItemKind::CreateDirectory, source, target);
    walker.emit(&SyncEvent::ItemStarted { item });

    match fs.create_dir(target) {
        Ok(()) => {
            trace_create!("created {}", target.display());
            walker.emit(&SyncEvent::ItemSucceeded { item, bytes: 0 });
            ItemOutcome::Succeeded
        }
        Err(error) => {
            trace_failure!(
                "dirsync::create",
                "failed to create {}: {error}",
                target.display()
            );
            walker.emit(&SyncEvent::ItemFailed {
                item,
                error: &error,
            });
            ItemOutcome::Failed
        }
    }
}
