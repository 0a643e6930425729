#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! File attribute helpers used after dirsync copies a file.
//!
//! [`copy_file_metadata`] carries the creation time (Windows), the access and
//! modification times and the permission bits (the read-only attribute on
//! non-Unix targets) from a source file to its freshly written copy.
//! [`clear_read_only`] prepares an existing target for overwriting.
//!
//! Failures are reported as [`MetadataError`], which records the attempted
//! action and the affected path alongside the underlying I/O error.

mod apply;
mod error;
mod read_only;

pub use apply::copy_file_metadata;
pub use error::MetadataError;
pub use read_only::{clear_read_only, is_read_only};
