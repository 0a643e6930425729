//! Pass kinds and the operation selector.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the three synchronization passes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PassKind {
    /// Removes target content absent from the source.
    Delete,
    /// Overwrites target files that differ from the source.
    Update,
    /// Copies source content absent from the target.
    Create,
}

impl PassKind {
    /// Every pass, in execution order.
    pub const ALL: [Self; 3] = [Self::Delete, Self::Update, Self::Create];

    /// Returns the lowercase name accepted by `--operations`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Update => "update",
            Self::Create => "create",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::Delete => 0b001,
            Self::Update => 0b010,
            Self::Create => 0b100,
        }
    }
}

impl fmt::Display for PassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Subset of passes selected for a run.
///
/// Iteration always yields the selected passes in the fixed order
/// delete, update, create regardless of how the set was built.
///
/// # Examples
///
/// ```
/// use engine::sync::{OperationSet, PassKind};
///
/// let set: OperationSet = "create,DELETE".parse().expect("valid selection");
/// let order: Vec<_> = set.iter().collect();
/// assert_eq!(order, [PassKind::Delete, PassKind::Create]);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct OperationSet {
    bits: u8,
}

impl OperationSet {
    /// Selects every pass.
    #[must_use]
    pub const fn all() -> Self {
        Self { bits: 0b111 }
    }

    /// Selects nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Returns a copy with `kind` added.
    #[must_use]
    pub const fn with(self, kind: PassKind) -> Self {
        Self {
            bits: self.bits | kind.bit(),
        }
    }

    /// Returns a copy with `kind` removed.
    #[must_use]
    pub const fn without(self, kind: PassKind) -> Self {
        Self {
            bits: self.bits & !kind.bit(),
        }
    }

    /// Reports whether `kind` is selected.
    #[must_use]
    pub const fn contains(self, kind: PassKind) -> bool {
        self.bits & kind.bit() != 0
    }

    /// Reports whether no pass is selected.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Iterates over the selected passes in execution order.
    pub fn iter(self) -> impl Iterator<Item = PassKind> {
        PassKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }
}

impl Default for OperationSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<PassKind> for OperationSet {
    fn from_iter<I: IntoIterator<Item = PassKind>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl fmt::Display for OperationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for kind in self.iter() {
            if !first {
                f.write_str(",")?;
            }
            f.write_str(kind.name())?;
            first = false;
        }
        Ok(())
    }
}

/// Error produced when an operation selection cannot be parsed.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum OperationParseError {
    /// The selection named no operation at all.
    #[error("no operation has been specified")]
    Empty,
    /// A name was not one of `all`, `delete`, `update` or `create`.
    #[error("invalid operation: {0}")]
    Invalid(String),
}

impl FromStr for OperationSet {
    type Err = OperationParseError;

    /// Parses a comma-delimited list of `all`, `delete`, `update` and `create`.
    ///
    /// Names are matched case-insensitively; surrounding whitespace and empty
    /// items are ignored.
    fn from_str(list: &str) -> Result<Self, Self::Err> {
        let mut set = Self::empty();
        for name in list.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            set = if name.eq_ignore_ascii_case("all") {
                Self::all()
            } else {
                let kind = PassKind::ALL
                    .into_iter()
                    .find(|kind| kind.name().eq_ignore_ascii_case(name))
                    .ok_or_else(|| OperationParseError::Invalid(name.to_owned()))?;
                set.with(kind)
            };
        }

        if set.is_empty() {
            return Err(OperationParseError::Empty);
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selects_everything_in_order() {
        let order: Vec<_> = OperationSet::default().iter().collect();
        assert_eq!(order, PassKind::ALL);
    }

    #[test]
    fn iteration_order_ignores_insertion_order() {
        let set: OperationSet = [PassKind::Create, PassKind::Delete].into_iter().collect();
        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, [PassKind::Delete, PassKind::Create]);
    }

    #[test]
    fn all_keyword_selects_everything() {
        assert_eq!("All".parse::<OperationSet>(), Ok(OperationSet::all()));
        assert_eq!("update,all".parse::<OperationSet>(), Ok(OperationSet::all()));
    }

    #[test]
    fn empty_selection_is_rejected() {
        assert_eq!("".parse::<OperationSet>(), Err(OperationParseError::Empty));
        assert_eq!(" , ".parse::<OperationSet>(), Err(OperationParseError::Empty));
    }

    #[test]
    fn unknown_name_is_reported() {
        let error = "delete,copy".parse::<OperationSet>().expect_err("copy is unknown");
        assert_eq!(error, OperationParseError::Invalid("copy".to_owned()));
        assert_eq!(error.to_string(), "invalid operation: copy");
    }

    #[test]
    fn without_removes_a_pass() {
        let set = OperationSet::all().without(PassKind::Update);
        assert!(set.contains(PassKind::Delete));
        assert!(!set.contains(PassKind::Update));
        assert_eq!(set.to_string(), "delete,create");
    }
}
