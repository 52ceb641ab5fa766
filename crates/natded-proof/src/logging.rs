//! Structured logging setup for hosts embedding the engine.
//!
//! The engine itself only emits `tracing` events (`debug` for appended
//! lines, `warn` when a proof stops, `info` on completion, `trace` for calls
//! ignored after termination). Installing a subscriber is left to the host;
//! [`LoggerBuilder`] does it from a [`LoggingConfig`].
//!
//! ```no_run
//! use natded_proof::logging::{LogFormat, LoggerBuilder};
//!
//! LoggerBuilder::new()
//!     .with_format(LogFormat::Compact)
//!     .with_env_filter("natded_proof=debug")
//!     .init()
//!     .expect("tracing already initialised");
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, coloured.
    #[default]
    Pretty,
    /// Single line per event, no colours.
    Compact,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// The `[logging]` table of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: LogLevel,
    /// Overrides `level` when set, e.g. `natded_proof=trace`.
    pub env_filter: Option<String>,
    pub with_targets: bool,
    pub with_file_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            level: LogLevel::Info,
            env_filter: None,
            with_targets: true,
            with_file_location: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoggerBuilder {
    config: LoggingConfig,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &LoggingConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.config.format = format;
        self
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    pub fn with_targets(mut self, enabled: bool) -> Self {
        self.config.with_targets = enabled;
        self
    }

    pub fn with_file_location(mut self, enabled: bool) -> Self {
        self.config.with_file_location = enabled;
        self
    }

    /// Install the global subscriber. Fails if one is already installed.
    #[cfg(feature = "structured-logging")]
    pub fn init(self) -> anyhow::Result<()> {
        use anyhow::Context;
        use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

        let config = self.config;
        let env_filter = match &config.env_filter {
            Some(filter) => EnvFilter::try_new(filter)
                .with_context(|| format!("Invalid env filter: {}", filter))?,
            None => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.level.as_str())),
        };

        let registry = tracing_subscriber::registry().with(env_filter);
        let layer = fmt::layer()
            .with_target(config.with_targets)
            .with_file(config.with_file_location)
            .with_line_number(config.with_file_location);

        match config.format {
            LogFormat::Pretty => registry.with(layer.pretty()).try_init(),
            LogFormat::Compact => registry.with(layer.with_ansi(false).compact()).try_init(),
            LogFormat::Json => registry.with(layer.json()).try_init(),
        }
        .context("Failed to initialize tracing")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_configuration() {
        let builder = LoggerBuilder::new()
            .with_format(LogFormat::Json)
            .with_level(LogLevel::Debug)
            .with_targets(false)
            .with_file_location(true);

        assert_eq!(builder.config.format, LogFormat::Json);
        assert_eq!(builder.config.level, LogLevel::Debug);
        assert!(!builder.config.with_targets);
        assert!(builder.config.with_file_location);
    }

    #[test]
    fn test_log_level_as_str() {
        assert_eq!(LogLevel::Trace.as_str(), "trace");
        assert_eq!(LogLevel::Warn.as_str(), "warn");
    }

    #[test]
    fn test_custom_env_filter() {
        let builder = LoggerBuilder::new().with_env_filter("natded_proof=trace");
        assert_eq!(
            builder.config.env_filter.as_deref(),
            Some("natded_proof=trace")
        );
    }

    #[test]
    fn test_config_round_trip() {
        let config = LoggingConfig {
            format: LogFormat::Compact,
            ..LoggingConfig::default()
        };
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("format = \"compact\""));
        let back: LoggingConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
