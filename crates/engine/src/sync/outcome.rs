//! Per-item results folded into directory and pass status.

use std::fmt;

/// Why an item was left alone.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SkipReason {
    /// The target file also exists in the source and is kept by the delete pass.
    PresentInSource,
    /// The file has no counterpart in the target; the create pass owns it.
    MissingFromTarget,
    /// Size and modification time already match.
    UpToDate,
    /// The target already has a file of that name.
    AlreadyExists,
    /// The directory matched an exclusion.
    Excluded,
}

impl SkipReason {
    /// Short human-readable description.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::PresentInSource => "present in source",
            Self::MissingFromTarget => "missing from target",
            Self::UpToDate => "up to date",
            Self::AlreadyExists => "already exists",
            Self::Excluded => "excluded",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Result of one copy, delete or create-directory operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ItemOutcome {
    /// The operation completed.
    Succeeded,
    /// Content was copied but its attributes were not fully applied.
    ///
    /// Still a success; the shortfall is reported as its own event.
    Partial,
    /// The operation failed; the error was reported as an event.
    Failed,
    /// Nothing needed doing.
    Skipped(SkipReason),
}

impl ItemOutcome {
    /// Reports whether the outcome keeps the enclosing aggregate successful.
    #[must_use]
    pub const fn is_success(self) -> bool {
        !matches!(self, Self::Failed)
    }

    /// Folds this outcome into a running aggregate.
    ///
    /// Never short-circuits: callers evaluate every item before folding.
    pub fn fold_into(self, status: &mut bool) {
        *status &= self.is_success();
    }
}
