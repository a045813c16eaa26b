//! Tracing and logging setup shared by the valuekit crates and their hosts.

use crate::logging::LogConfig;

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops. An
/// unreadable configuration falls back to the defaults.
pub fn init() {
    tracing::init(&LogConfig::from_env().unwrap_or_default());
}

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Logging configuration.
pub mod logging;
