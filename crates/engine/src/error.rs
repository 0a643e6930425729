//! Fatal errors that stop a synchronization run before any pass executes.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Result type for synchronization runs.
pub type SyncResult<T> = Result<T, SyncError>;

/// Error produced when a run cannot start.
///
/// Per-item failures never surface here; they are reported as events and
/// folded into the pass status instead.
#[derive(Debug)]
pub struct SyncError {
    kind: SyncErrorKind,
}

impl SyncError {
    const fn new(kind: SyncErrorKind) -> Self {
        Self { kind }
    }

    /// Constructs the error for an empty operation selection.
    #[must_use]
    pub const fn no_operations() -> Self {
        Self::new(SyncErrorKind::NoOperations)
    }

    /// Constructs the error for a source root that does not exist.
    #[must_use]
    pub fn source_missing(path: impl Into<PathBuf>) -> Self {
        Self::new(SyncErrorKind::SourceMissing { path: path.into() })
    }

    /// Constructs the error for a source root that is not a directory.
    #[must_use]
    pub fn source_not_directory(path: impl Into<PathBuf>) -> Self {
        Self::new(SyncErrorKind::SourceNotDirectory { path: path.into() })
    }

    /// Constructs the error for a source root that could not be inspected.
    #[must_use]
    pub fn inspect_source(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::new(SyncErrorKind::InspectSource {
            path: path.into(),
            source,
        })
    }

    /// Provides access to the underlying error kind.
    #[must_use]
    pub const fn kind(&self) -> &SyncErrorKind {
        &self.kind
    }

    /// Returns the path involved in the failure, when there is one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match &self.kind {
            SyncErrorKind::NoOperations => None,
            SyncErrorKind::SourceMissing { path }
            | SyncErrorKind::SourceNotDirectory { path }
            | SyncErrorKind::InspectSource { path, .. } => Some(path),
        }
    }
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SyncErrorKind::NoOperations => f.write_str("no operation has been specified"),
            SyncErrorKind::SourceMissing { path } => {
                write!(f, "source directory '{}' does not exist", path.display())
            }
            SyncErrorKind::SourceNotDirectory { path } => {
                write!(f, "source '{}' is not a directory", path.display())
            }
            SyncErrorKind::InspectSource { path, source } => {
                write!(
                    f,
                    "failed to inspect source directory '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl Error for SyncError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            SyncErrorKind::InspectSource { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Classification of fatal run errors.
#[derive(Debug)]
pub enum SyncErrorKind {
    /// The operation selection was empty.
    NoOperations,
    /// The source root does not exist.
    SourceMissing {
        /// Source root as supplied.
        path: PathBuf,
    },
    /// The source root exists but is not a directory.
    SourceNotDirectory {
        /// Source root as supplied.
        path: PathBuf,
    },
    /// Reading the source root's metadata failed for another reason.
    InspectSource {
        /// Source root as supplied.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
}
