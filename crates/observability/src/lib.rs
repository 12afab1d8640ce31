//! Tracing and logging (shared setup for binaries).
//!
//! Domain crates only emit `tracing` events; installing a subscriber is the
//! job of whichever binary embeds them.

pub mod config;

/// Tracing configuration (filters, formats).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig, UnknownLogFormat};

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&ObservabilityConfig::from_env());
}

pub use self::tracing::init_with;
