//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_FILTER, LogFormat, ObservabilityConfig};

/// Initialize tracing/logging for the process.
///
/// Logs go to stderr so stdout stays free for program output. Safe to call
/// multiple times (subsequent calls are no-ops). Returns whether this call
/// installed the global subscriber.
pub fn init_with(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init()
            .is_ok(),
        LogFormat::Pretty => builder.pretty().try_init().is_ok(),
        LogFormat::Compact => builder.compact().try_init().is_ok(),
    };

    if installed {
        for warning in &config.warnings {
            ::tracing::warn!("{warning}");
        }
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_a_no_op() {
        let config = ObservabilityConfig {
            filter: "not a [valid directive".to_string(),
            format: LogFormat::Compact,
            warnings: vec!["test warning".to_string()],
        };
        assert!(init_with(&config));
        assert!(::tracing::dispatcher::has_been_set());

        assert!(!init_with(&ObservabilityConfig::default()));
        assert!(::tracing::dispatcher::has_been_set());
    }
}
