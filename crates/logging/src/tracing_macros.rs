//! crates/logging/src/tracing_macros.rs
//! Convenience macros for dirsync-specific tracing.
//!
//! These macros wrap the standard tracing macros with a fixed target per
//! synchronization concern so `DIRSYNC_LOG` filters can select them, e.g.
//! `DIRSYNC_LOG=dirsync::delete=debug`.

/// Emit a directory traversal trace.
///
/// # Example
/// ```ignore
/// trace_walk!(depth, "entering {}", path.display());
/// ```
#[macro_export]
macro_rules! trace_walk {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "dirsync::walk", $($arg)*);
    };
}

/// Emit a copy operation trace.
///
/// # Example
/// ```ignore
/// trace_copy!("copying {}", path.display());
/// ```
#[macro_export]
macro_rules! trace_copy {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "dirsync::copy", $($arg)*);
    };
}

/// Emit a deletion operation trace.
///
/// # Example
/// ```ignore
/// trace_del!("deleting {}", path.display());
/// ```
#[macro_export]
macro_rules! trace_del {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "dirsync::delete", $($arg)*);
    };
}

/// Emit a directory creation trace.
///
/// # Example
/// ```ignore
/// trace_create!("creating {}", path.display());
/// ```
#[macro_export]
macro_rules! trace_create {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "dirsync::create", $($arg)*);
    };
}

/// Emit a change detection trace.
///
/// # Example
/// ```ignore
/// trace_check!(needs_update, "compared {}", path.display());
/// ```
#[macro_export]
macro_rules! trace_check {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "dirsync::check", $($arg)*);
    };
}

/// Emit a statistics trace.
///
/// # Example
/// ```ignore
/// trace_stats!(files = count, "pass finished");
/// ```
#[macro_export]
macro_rules! trace_stats {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "dirsync::stats", $($arg)*);
    };
}

/// Emit a warning about a failed item under the target of its concern.
///
/// # Example
/// ```ignore
/// trace_failure!("dirsync::delete", "failed to delete {}: {}", path.display(), error);
/// ```
#[macro_export]
macro_rules! trace_failure {
    ($target:expr, $($arg:tt)*) => {
        ::tracing::warn!(target: $target, $($arg)*);
    };
}
