use std::str::FromStr;

use crate::{Exclusion, ExclusionLevel, ExclusionParseError, ExclusionParseErrorKind};

impl FromStr for Exclusion {
    type Err = ExclusionParseError;

    /// Parses a single `name[:level]` entry.
    fn from_str(entry: &str) -> Result<Self, Self::Err> {
        let (name, level) = match entry.split_once(':') {
            Some((name, level)) => {
                let level = level.trim().parse::<i64>().map_err(|_| {
                    ExclusionParseError::new(entry, ExclusionParseErrorKind::InvalidLevel)
                })?;
                (name, ExclusionLevel::from_signed(level))
            }
            None => (entry, ExclusionLevel::AnyDepth),
        };

        if name.is_empty() {
            return Err(ExclusionParseError::new(
                entry,
                ExclusionParseErrorKind::EmptyName,
            ));
        }

        Ok(match level {
            ExclusionLevel::AnyDepth => Self::any_depth(name),
            ExclusionLevel::Depth(depth) => Self::at_depth(name, depth),
        })
    }
}

/// Parses a comma-delimited list of `name[:level]` exclusions.
///
/// An omitted level means the exclusion applies at every depth, as does any
/// negative level.
///
/// # Examples
///
/// ```
/// use filters::{ExclusionLevel, parse_exclusions};
///
/// let parsed = parse_exclusions("obj,bin:1").expect("valid list");
/// assert_eq!(parsed[0].level(), ExclusionLevel::AnyDepth);
/// assert_eq!(parsed[1].level(), ExclusionLevel::Depth(1));
/// ```
pub fn parse_exclusions(list: &str) -> Result<Vec<Exclusion>, ExclusionParseError> {
    list.split(',').map(str::parse).collect()
}
