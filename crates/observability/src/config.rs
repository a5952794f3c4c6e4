//! Environment-driven observability settings.

use core::str::FromStr;

use thiserror::Error;

/// Filter used when `RUST_LOG` is unset.
///
/// Narration owns stdout; diagnostics stay quiet unless asked for.
pub const DEFAULT_FILTER: &str = "warn";

/// Environment variable selecting the log line format.
pub const FORMAT_ENV: &str = "DEVICEKIT_LOG_FORMAT";

/// Log line format.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Structured JSON lines with timestamps.
    Json,
    /// Single-line human-readable output.
    #[default]
    Compact,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format `{0}` (expected `json` or `compact`)")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "compact" | "text" => Ok(LogFormat::Compact),
            _ => Err(UnknownLogFormat(s.to_string())),
        }
    }
}

/// Resolved observability configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive string.
    pub filter: String,
    pub format: LogFormat,
    /// Set when the requested format was not recognised; reported after init.
    pub rejected_format: Option<UnknownLogFormat>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            rejected_format: None,
        }
    }
}

impl ObservabilityConfig {
    /// Read `RUST_LOG` and `DEVICEKIT_LOG_FORMAT`.
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("RUST_LOG").ok(),
            std::env::var(FORMAT_ENV).ok(),
        )
    }

    /// Build from raw (possibly absent) values.
    pub fn from_values(filter: Option<String>, format: Option<String>) -> Self {
        let filter = filter
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let (format, rejected_format) = match format.as_deref().map(LogFormat::from_str) {
            None => (LogFormat::default(), None),
            Some(Ok(format)) => (format, None),
            Some(Err(e)) => (LogFormat::default(), Some(e)),
        };

        Self {
            filter,
            format,
            rejected_format,
        }
    }
}
