//! crates/logging/src/config.rs
//! Verbosity configuration derived from `-v`/`-q` command-line switches.

use super::levels::{InfoFlag, InfoLevels};

/// Console verbosity configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerbosityConfig {
    /// Info flag levels.
    pub info: InfoLevels,
}

impl Default for VerbosityConfig {
    fn default() -> Self {
        Self::from_verbose_level(0)
    }
}

impl VerbosityConfig {
    /// Create a configuration from the number of `-v` switches.
    ///
    /// Level 0 reports pass banners, the items acted upon and statistics.
    /// Level 1 adds directory traversal and excluded directories. Level 2
    /// adds change detection results and items left untouched.
    pub fn from_verbose_level(level: u8) -> Self {
        let mut info = InfoLevels {
            misc: 1,
            stats: 1,
            copy: 1,
            del: 1,
            create: 1,
            ..InfoLevels::default()
        };

        if level >= 1 {
            info.walk = 1;
            info.skip = 1;
        }
        if level >= 2 {
            info.walk = 2;
            info.skip = 2;
            info.check = 1;
        }

        Self { info }
    }

    /// Configuration for `--quiet`: no informational output at all.
    ///
    /// Failures and the final status are reported regardless of verbosity.
    pub fn quiet() -> Self {
        Self {
            info: InfoLevels::default(),
        }
    }

    /// Apply a `FLAG` or `FLAGN` token, e.g. `copy0` or `walk2`.
    pub fn apply_info_flag(&mut self, token: &str) -> Result<(), String> {
        let split = token
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(token.len());
        let (name, digits) = token.split_at(split);
        let level = if digits.is_empty() {
            1
        } else {
            digits
                .parse::<u8>()
                .map_err(|_| format!("invalid info level: {token}"))?
        };

        if name.eq_ignore_ascii_case("all") {
            self.info.set_all(level);
            return Ok(());
        }

        let flag: InfoFlag = name.parse()?;
        self.info.set(flag, level);
        Ok(())
    }
}
