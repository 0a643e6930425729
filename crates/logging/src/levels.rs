//! crates/logging/src/levels.rs
//! Flag enums and level structures for console verbosity.

use std::fmt;
use std::str::FromStr;

/// Info flags for console output categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InfoFlag {
    /// Directory traversal: entering, leaving and skipping directories.
    Walk,
    /// File copies performed by the update and create passes.
    Copy,
    /// File and directory deletions.
    Del,
    /// Directory creation.
    Create,
    /// Change detection and read-only preparation before an update.
    Check,
    /// Items left alone because nothing needed doing.
    Skip,
    /// Per-pass statistics.
    Stats,
    /// Pass banners and the final run status.
    Misc,
}

impl InfoFlag {
    /// Every flag, in display order.
    pub const ALL: [Self; 8] = [
        Self::Walk,
        Self::Copy,
        Self::Del,
        Self::Create,
        Self::Check,
        Self::Skip,
        Self::Stats,
        Self::Misc,
    ];

    /// Returns the lowercase name used by `FLAG[N]` tokens.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Copy => "copy",
            Self::Del => "del",
            Self::Create => "create",
            Self::Check => "check",
            Self::Skip => "skip",
            Self::Stats => "stats",
            Self::Misc => "misc",
        }
    }
}

impl fmt::Display for InfoFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InfoFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|flag| flag.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown info flag: {s}"))
    }
}

/// Info verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct InfoLevels {
    /// Directory traversal level.
    pub walk: u8,
    /// File copy level.
    pub copy: u8,
    /// Deletion level.
    pub del: u8,
    /// Directory creation level.
    pub create: u8,
    /// Change detection level.
    pub check: u8,
    /// Skipped items level.
    pub skip: u8,
    /// Statistics level.
    pub stats: u8,
    /// Banner and status level.
    pub misc: u8,
}

impl InfoLevels {
    /// Get the level for a specific flag.
    pub const fn get(&self, flag: InfoFlag) -> u8 {
        match flag {
            InfoFlag::Walk => self.walk,
            InfoFlag::Copy => self.copy,
            InfoFlag::Del => self.del,
            InfoFlag::Create => self.create,
            InfoFlag::Check => self.check,
            InfoFlag::Skip => self.skip,
            InfoFlag::Stats => self.stats,
            InfoFlag::Misc => self.misc,
        }
    }

    /// Set the level for a specific flag.
    pub const fn set(&mut self, flag: InfoFlag, level: u8) {
        match flag {
            InfoFlag::Walk => self.walk = level,
            InfoFlag::Copy => self.copy = level,
            InfoFlag::Del => self.del = level,
            InfoFlag::Create => self.create = level,
            InfoFlag::Check => self.check = level,
            InfoFlag::Skip => self.skip = level,
            InfoFlag::Stats => self.stats = level,
            InfoFlag::Misc => self.misc = level,
        }
    }

    /// Set all flags to the same level.
    pub fn set_all(&mut self, level: u8) {
        for flag in InfoFlag::ALL {
            self.set(flag, level);
        }
    }
}
