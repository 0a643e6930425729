//! Change detection for files present on both sides.

use std::time::{Duration, SystemTime};

/// Largest modification-time difference still treated as "same time".
///
/// Two seconds absorbs the timestamp granularity of FAT and similar
/// filesystems. The value is fixed.
pub const MODIFY_WINDOW: Duration = Duration::from_secs(2);

/// Attributes of a file that drive the update decision.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FileSnapshot {
    len: u64,
    modified: SystemTime,
    read_only: bool,
}

impl FileSnapshot {
    /// Creates a snapshot from its parts.
    #[must_use]
    pub const fn new(len: u64, modified: SystemTime, read_only: bool) -> Self {
        Self {
            len,
            modified,
            read_only,
        }
    }

    /// Returns the file size in bytes.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.len
    }

    /// Reports whether the file is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the last modification time.
    #[must_use]
    pub const fn modified(&self) -> SystemTime {
        self.modified
    }

    /// Reports whether the file cannot be written.
    #[must_use]
    pub const fn read_only(&self) -> bool {
        self.read_only
    }
}

/// Decides whether `target` must be overwritten with `source`.
///
/// The target is current when both sizes match and the modification times
/// are at most [`MODIFY_WINDOW`] apart, in either direction.
#[must_use]
pub fn needs_update(source: &FileSnapshot, target: &FileSnapshot) -> bool {
    let drift = source
        .modified
        .duration_since(target.modified)
        .or_else(|_| target.modified.duration_since(source.modified));
    source.len != target.len || !matches!(drift, Ok(drift) if drift <= MODIFY_WINDOW)
}
