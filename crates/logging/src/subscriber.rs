//! crates/logging/src/subscriber.rs
//! Installation of the process-wide tracing subscriber.
//!
//! Diagnostics go to stderr through a `tracing-subscriber` fmt layer. The
//! [`EnvFilter`] directives are read from [`LOG_ENV_VAR`]; when the variable is
//! unset or invalid the filter falls back to [`DEFAULT_DIRECTIVES`].

use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::TryInitError;

/// Environment variable holding `EnvFilter` directives.
pub const LOG_ENV_VAR: &str = "DIRSYNC_LOG";

/// Filter used when [`LOG_ENV_VAR`] is absent.
pub const DEFAULT_DIRECTIVES: &str = "warn";

/// Builds the filter from [`LOG_ENV_VAR`], falling back to [`DEFAULT_DIRECTIVES`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Installs a stderr subscriber filtered by [`env_filter`].
///
/// Fails when a global subscriber is already installed, which happens when
/// the CLI entry point runs more than once in a process (tests).
pub fn init_tracing() -> Result<(), TryInitError> {
    init_tracing_with_writer(io::stderr)
}

/// Installs a subscriber that writes to `writer` instead of stderr.
pub fn init_tracing_with_writer<W>(writer: W) -> Result<(), TryInitError>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let fmt = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .without_time();

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt)
        .try_init()
}
