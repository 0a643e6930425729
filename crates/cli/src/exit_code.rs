//! Process exit statuses reported by the front-end.

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Outcome of a command-line invocation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(i32)]
pub enum ExitCode {
    /// Synchronization succeeded, or help/version output was requested.
    Ok = 0,
    /// The command line could not be parsed.
    Usage = 1,
    /// A fatal precondition stopped the run before any pass.
    Aborted = 3,
    /// The run completed but at least one operation failed.
    Failed = 4,
}

impl ExitCode {
    /// Numeric status handed to the operating system.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Short description used in diagnostics.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ok => "success",
            Self::Usage => "usage error",
            Self::Aborted => "synchronization aborted",
            Self::Failed => "some operations failed",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}

/// Converts a numeric status into [`std::process::ExitCode`].
///
/// Values outside `0..=255` are clamped so wrappers never wrap around to a
/// misleading success status.
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(u8::try_from(clamped).unwrap_or(u8::MAX))
}
