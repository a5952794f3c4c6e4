//! Tracing and logging (shared setup for the demo binaries).

/// Environment-driven settings (`RUST_LOG`, `DEVICEKIT_LOG_FORMAT`).
pub mod config;

/// Subscriber installation (filters, layers).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig, UnknownLogFormat};

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    init_with(ObservabilityConfig::from_env());
}

/// Initialize process-wide observability from an explicit config.
pub fn init_with(config: ObservabilityConfig) {
    let installed = tracing::init(&config);

    if installed {
        if let Some(rejected) = &config.rejected_format {
            ::tracing::warn!("{rejected}; using compact output");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_a_no_op() {
        init_with(ObservabilityConfig::default());
        init_with(ObservabilityConfig::from_values(None, Some("json".to_string())));
        assert!(!crate::tracing::init(&ObservabilityConfig::default()));
    }
}
