#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` holds the two output channels of dirsync. Console verbosity is a
//! per-category level table ([`VerbosityConfig`]) consulted through
//! [`info_gte`]; structured diagnostics are `tracing` events emitted through
//! the `trace_*` macros and rendered by the subscriber installed with
//! [`init_tracing`].
//!
//! # Design
//!
//! - [`InfoFlag`] names each console category. [`VerbosityConfig::from_verbose_level`]
//!   maps the number of `-v` switches onto per-flag levels and
//!   [`VerbosityConfig::quiet`] clears them all.
//! - The active configuration lives in a thread-local slot set by [`init`], so
//!   the reporter can ask [`info_gte`] without threading the configuration
//!   through every call.
//! - Tracing targets are fixed strings under `dirsync::` so `DIRSYNC_LOG`
//!   directives can select a single concern.
//!
//! # Examples
//!
//! ```
//! use logging::{InfoFlag, VerbosityConfig, info_gte, init};
//!
//! init(VerbosityConfig::from_verbose_level(1));
//! assert!(info_gte(InfoFlag::Walk, 1));
//! assert!(!info_gte(InfoFlag::Check, 1));
//! ```

mod config;
mod levels;
mod subscriber;
mod thread_local;
mod tracing_macros;

pub use config::VerbosityConfig;
pub use levels::{InfoFlag, InfoLevels};
pub use subscriber::{
    DEFAULT_DIRECTIVES, LOG_ENV_VAR, env_filter, init_tracing, init_tracing_with_writer,
};
pub use thread_local::{current, info_gte, init};
