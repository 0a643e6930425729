use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error produced when an attribute cannot be read from or applied to a path.
#[derive(Debug, Error)]
#[error("failed to {context} for '{}': {source}", .path.display())]
pub struct MetadataError {
    context: &'static str,
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl MetadataError {
    /// Creates a new error describing the failed `context` on `path`.
    pub fn new(context: &'static str, path: &Path, source: io::Error) -> Self {
        Self {
            context,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns the action that failed, e.g. `"preserve timestamps"`.
    #[must_use]
    pub const fn context(&self) -> &'static str {
        self.context
    }

    /// Returns the path the action was applied to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the underlying I/O error kind.
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }

    /// Splits the error into its context, path and I/O error.
    #[must_use]
    pub fn into_parts(self) -> (&'static str, PathBuf, io::Error) {
        (self.context, self.path, self.source)
    }
}

impl From<MetadataError> for io::Error {
    fn from(error: MetadataError) -> Self {
        let kind = error.kind();
        Self::new(kind, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn display_includes_context_and_path() {
        let error = MetadataError::new(
            "preserve timestamps",
            Path::new("/tmp/x"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );

        let rendered = error.to_string();
        assert!(rendered.starts_with("failed to preserve timestamps for '/tmp/x': "));
        assert!(error.source().is_some());
        assert_eq!(error.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn converts_into_io_error_keeping_kind() {
        let error = MetadataError::new(
            "clear read-only flag",
            Path::new("f"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        let (context, path, _) = MetadataError::new(
            "clear read-only flag",
            Path::new("f"),
            io::Error::from(io::ErrorKind::NotFound),
        )
        .into_parts();
        assert_eq!(context, "clear read-only flag");
        assert_eq!(path, PathBuf::from("f"));

        let io_error: io::Error = error.into();
        assert_eq!(io_error.kind(), io::ErrorKind::NotFound);
    }
}
