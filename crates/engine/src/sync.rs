//! # Overview
//!
//! One-way synchronization of a target directory tree with a source tree.
//! A run consists of up to three passes executed in a fixed order:
//!
//! 1. [`DeletePass`] removes target files and directories absent from the
//!    source.
//! 2. [`UpdatePass`] rewrites target files whose size or modification time
//!    differs from the source (see [`needs_update`]).
//! 3. [`CreatePass`] creates missing target directories and copies files the
//!    target lacks.
//!
//! [`run`] validates the roots, runs the passes selected by an
//! [`OperationSet`] and returns a [`SyncReport`].
//!
//! # Design
//!
//! - Every pass drives a [`Walker`], which owns the depth counter, lists
//!   directories through the [`FileSystem`] trait and consults the
//!   [`ExclusionSet`](filters::ExclusionSet) before descending. The delete
//!   pass lists the target side of each pair; update and create list the
//!   source side.
//! - Passes never print. Every decision is reported as a [`SyncEvent`] to a
//!   [`SyncObserver`]; [`PassStatistics`] is one such observer and
//!   [`ObserverChain`] fans events out to several.
//! - Recursion increments the depth through a scope guard, so the counter is
//!   restored on every return path.
//!
//! # Invariants
//!
//! - The status of a directory pair is the logical AND of every item and
//!   subdirectory processed below it. A failure never stops the siblings that
//!   follow it.
//! - Exclusions are evaluated at the depth of the parent pair, before the
//!   walk descends. An excluded directory is neither traversed nor deleted.
//! - Depth is `0` at the root pair and `0` again once a pass returns.
//!
//! # Errors
//!
//! Only the preconditions checked by [`run`] are fatal and surface as
//! [`SyncError`](crate::error::SyncError). Item failures are reported through
//! [`SyncEvent::ItemFailed`] and folded into the pass status.
//!
//! # Examples
//!
//! ```
//! use engine::sync::{NullObserver, OperationSet, SyncOptions, run_local};
//! use std::fs;
//!
//! # let temp = tempfile::tempdir().unwrap();
//! # let source = temp.path().join("source");
//! # let target = temp.path().join("target");
//! # fs::create_dir(&source).unwrap();
//! fs::write(source.join("notes.txt"), b"hello").expect("write source file");
//!
//! let options = SyncOptions::new(&source, &target).operations(OperationSet::all());
//! let report = run_local(&options, &mut NullObserver).expect("run starts");
//!
//! assert!(report.succeeded());
//! assert_eq!(fs::read(target.join("notes.txt")).expect("copied"), b"hello");
//! ```

mod comparison;
mod copy;
mod create;
mod delete;
mod driver;
mod events;
mod fs;
mod operation;
mod outcome;
mod stats;
mod update;
mod walker;

pub use comparison::{FileSnapshot, MODIFY_WINDOW, needs_update};
pub use create::CreatePass;
pub use delete::DeletePass;
pub use driver::{PassReport, SyncOptions, SyncReport, run, run_local};
pub use events::{Item, ItemKind, NullObserver, ObserverChain, SyncEvent, SyncObserver};
pub use fs::{DirEntryInfo, EntryKind, FileSystem, LocalFileSystem};
pub use operation::{OperationParseError, OperationSet, PassKind};
pub use outcome::{ItemOutcome, SkipReason};
pub use stats::PassStatistics;
pub use update::UpdatePass;
pub use walker::Walker;
