#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filters` decides which subdirectories a synchronization pass prunes. An
//! [`Exclusion`] names a directory and optionally pins it to one nesting depth;
//! an [`ExclusionSet`] answers whether any of its exclusions applies to a given
//! directory name at the walker's current depth.
//!
//! # Design
//!
//! - [`Exclusion`] pairs a directory name with an [`ExclusionLevel`]. The level
//!   is either [`ExclusionLevel::AnyDepth`] or [`ExclusionLevel::Depth`] holding
//!   the exact depth it is restricted to. Depth `0` addresses the direct
//!   children of the root directory pair.
//! - [`ExclusionSet`] stores its exclusions behind an [`Arc`](std::sync::Arc) so
//!   every pass of a run can hold the same read-only set without copying it.
//! - [`parse_exclusions`] turns the comma-delimited `name[:level]` syntax
//!   accepted on the command line into exclusions.
//!
//! # Invariants
//!
//! - Names are compared exactly, byte for byte. No glob or case folding.
//! - Matching is an existential test: evaluation order never changes the
//!   answer of [`ExclusionSet::should_skip`].
//! - Exclusions are immutable once constructed.
//!
//! # Errors
//!
//! [`parse_exclusions`] and [`Exclusion::from_str`](std::str::FromStr) report
//! [`ExclusionParseError`] for empty names and non-integer levels.
//!
//! # Examples
//!
//! ```
//! use filters::{ExclusionSet, parse_exclusions};
//! use std::ffi::OsStr;
//!
//! let set: ExclusionSet = parse_exclusions("target,.git:0")
//!     .expect("valid exclusions")
//!     .into_iter()
//!     .collect();
//!
//! assert!(set.should_skip(OsStr::new("target"), 3));
//! assert!(set.should_skip(OsStr::new(".git"), 0));
//! assert!(!set.should_skip(OsStr::new(".git"), 1));
//! assert!(!set.should_skip(OsStr::new("src"), 0));
//! ```
//!
//! # See also
//!
//! - `engine::sync` consults [`ExclusionSet`] before recursing into each
//!   subdirectory pair.

mod error;
mod exclusion;
mod parse;
mod set;

pub use error::{ExclusionParseError, ExclusionParseErrorKind};
pub use exclusion::{Exclusion, ExclusionLevel};
pub use parse::parse_exclusions;
pub use set::ExclusionSet;
