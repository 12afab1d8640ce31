//! Observability configuration, read from the environment.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Filter directive environment variable (standard `tracing` convention).
pub const FILTER_ENV: &str = "RUST_LOG";
/// Output format environment variable: `json`, `pretty` or `compact`.
pub const FORMAT_ENV: &str = "ACME_LOG_FORMAT";

pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log format {0:?} (expected json, pretty or compact)")]
pub struct UnknownLogFormat(pub String);

impl core::str::FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            _ => Err(UnknownLogFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive, e.g. `info` or `acme_sales=debug`.
    pub filter: String,
    pub format: LogFormat,
    /// Problems found while reading the environment. They are logged once a
    /// subscriber exists.
    #[serde(skip)]
    pub warnings: Vec<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            warnings: Vec::new(),
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (tests inject a map here).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(filter) = lookup(FILTER_ENV).filter(|f| !f.trim().is_empty()) {
            config.filter = filter;
        }

        if let Some(raw) = lookup(FORMAT_ENV) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.format = format,
                Err(e) => config
                    .warnings
                    .push(format!("{e}; falling back to {:?}", LogFormat::default())),
            }
        }

        config
    }
}
