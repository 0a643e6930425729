#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `engine` implements dirsync's delete, update and create passes on top of
//! the `filters`, `metadata` and `logging` crates. The [`sync`] module holds
//! the walker, the passes, the observer contract and the run driver;
//! [`error`] describes the few conditions that stop a run before it starts.
//!
//! # See also
//!
//! - `cli` parses the command line, renders [`sync::SyncEvent`]s to the
//!   console and maps a [`sync::SyncReport`] to an exit code.

pub mod error;
pub mod sync;

pub use error::{SyncError, SyncErrorKind, SyncResult};
pub use sync::{SyncOptions, SyncReport, run, run_local};
