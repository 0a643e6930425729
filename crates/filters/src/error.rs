use thiserror::Error;

/// Reason an exclusion entry was rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExclusionParseErrorKind {
    /// The entry had no directory name before the optional `:level` suffix.
    EmptyName,
    /// The text after `:` was not an integer.
    InvalidLevel,
}

impl ExclusionParseErrorKind {
    const fn describe(self) -> &'static str {
        match self {
            Self::EmptyName => "missing directory name",
            Self::InvalidLevel => "level must be an integer",
        }
    }
}

/// Error produced when an exclusion entry cannot be parsed.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid exclusion '{entry}': {}", .kind.describe())]
pub struct ExclusionParseError {
    entry: String,
    kind: ExclusionParseErrorKind,
}

impl ExclusionParseError {
    pub(crate) fn new(entry: impl Into<String>, kind: ExclusionParseErrorKind) -> Self {
        Self {
            entry: entry.into(),
            kind,
        }
    }

    /// Returns the offending entry as it appeared in the input.
    #[must_use]
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Returns why the entry was rejected.
    #[must_use]
    pub const fn kind(&self) -> ExclusionParseErrorKind {
        self.kind
    }
}
