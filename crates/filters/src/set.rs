use std::ffi::OsStr;
use std::sync::Arc;

use crate::Exclusion;

/// Immutable collection of exclusions shared by every pass of a run.
///
/// `ExclusionSet` is cheaply cloneable (the exclusions live behind an [`Arc`]).
/// An empty set never skips anything.
///
/// # Examples
///
/// ```
/// use filters::{Exclusion, ExclusionSet};
/// use std::ffi::OsStr;
///
/// let set = ExclusionSet::new([Exclusion::at_depth("cache", 1)]);
/// assert!(set.should_skip(OsStr::new("cache"), 1));
/// assert!(!set.should_skip(OsStr::new("cache"), 0));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExclusionSet {
    inner: Arc<[Exclusion]>,
}

impl ExclusionSet {
    /// Builds a set from the supplied exclusions.
    pub fn new<I>(exclusions: I) -> Self
    where
        I: IntoIterator<Item = Exclusion>,
    {
        Self {
            inner: exclusions.into_iter().collect(),
        }
    }

    /// Returns `true` if any exclusion applies to directory `name` at `depth`.
    #[must_use]
    pub fn should_skip(&self, name: &OsStr, depth: usize) -> bool {
        self.inner
            .iter()
            .any(|exclusion| exclusion.applies(name, depth))
    }

    /// Returns the number of exclusions in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` when the set holds no exclusions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over the exclusions in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Exclusion> {
        self.inner.iter()
    }
}

impl FromIterator<Exclusion> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = Exclusion>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a ExclusionSet {
    type Item = &'a Exclusion;
    type IntoIter = std::slice::Iter<'a, Exclusion>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
