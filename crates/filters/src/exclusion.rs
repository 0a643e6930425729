use std::ffi::OsStr;
use std::fmt;

/// Depth restriction carried by an [`Exclusion`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ExclusionLevel {
    /// Applies wherever the directory name occurs.
    #[default]
    AnyDepth,
    /// Applies only to directories found at exactly this depth.
    Depth(usize),
}

impl ExclusionLevel {
    /// Returns `true` when the level admits `depth`.
    #[must_use]
    pub const fn admits(self, depth: usize) -> bool {
        match self {
            Self::AnyDepth => true,
            Self::Depth(level) => level == depth,
        }
    }

    /// Maps the signed command-line encoding onto a level.
    ///
    /// Negative values mean "every depth".
    #[must_use]
    pub fn from_signed(level: i64) -> Self {
        usize::try_from(level).map_or(Self::AnyDepth, Self::Depth)
    }
}

/// Directory name pruned from synchronization, optionally at one depth only.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Exclusion {
    name: String,
    level: ExclusionLevel,
}

impl Exclusion {
    /// Creates an exclusion that applies at every depth.
    #[must_use]
    pub fn any_depth(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: ExclusionLevel::AnyDepth,
        }
    }

    /// Creates an exclusion restricted to `depth`.
    #[must_use]
    pub fn at_depth(name: impl Into<String>, depth: usize) -> Self {
        Self {
            name: name.into(),
            level: ExclusionLevel::Depth(depth),
        }
    }

    /// Returns the excluded directory name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the depth restriction.
    #[must_use]
    pub const fn level(&self) -> ExclusionLevel {
        self.level
    }

    /// Reports whether this exclusion prunes the directory `name` seen at `depth`.
    #[must_use]
    pub fn applies(&self, name: &OsStr, depth: usize) -> bool {
        name == self.name.as_str() && self.level.admits(depth)
    }
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            ExclusionLevel::AnyDepth => f.write_str(&self.name),
            ExclusionLevel::Depth(depth) => write!(f, "{}:{depth}", self.name),
        }
    }
}
