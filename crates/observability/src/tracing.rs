//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::logging::{LogConfig, LogFormat};

/// Initialize tracing/logging for the process with `config`.
///
/// Safe to call multiple times (subsequent calls are no-ops). Returns whether
/// this call installed the subscriber.
pub fn init(config: &LogConfig) -> bool {
    let filter = EnvFilter::try_new(config.filter())
        .unwrap_or_else(|_| EnvFilter::new(LogConfig::DEFAULT_FILTER));

    let installed = match config.format() {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .try_init()
            .is_ok(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .try_init()
            .is_ok(),
    };

    if installed {
        ::tracing::debug!(filter = config.filter(), format = ?config.format(), "tracing initialised");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_a_no_op() {
        let config = LogConfig::default();
        let _ = init(&config);
        assert!(!init(&config));
    }
}
