//! Structured logging setup.
//!
//! Library code only emits `tracing` events. Binaries and test harnesses
//! that want to see them call [`init`] once with a [`TelemetryConfig`],
//! usually built from the environment:
//!
//! ```bash
//! TASK_SERVICE_LOG=task_service=debug TASK_SERVICE_LOG_FORMAT=json my-app
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

/// Environment variable holding the filter directives.
pub const LOG_FILTER_ENV: &str = "TASK_SERVICE_LOG";

/// Environment variable selecting the output format.
pub const LOG_FORMAT_ENV: &str = "TASK_SERVICE_LOG_FORMAT";

/// Filter applied when none is configured.
pub const DEFAULT_FILTER: &str = "task_service=info";

/// Output format for log events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Multi-line, human-oriented output.
    #[default]
    Pretty,
    /// Single-line output.
    Compact,
    /// Newline-delimited JSON for log shippers.
    Json,
}

impl LogFormat {
    /// Returns the canonical configuration value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Compact => "compact",
            Self::Json => "json",
        }
    }
}

impl TryFrom<&str> for LogFormat {
    type Error = ParseLogFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(ParseLogFormatError(value.to_owned())),
        }
    }
}

/// Error returned while parsing a log format name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown log format '{0}', expected pretty, compact or json")]
pub struct ParseLogFormatError(pub String);

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured filter directives could not be parsed.
    #[error("invalid log filter '{directives}': {source}")]
    InvalidFilter {
        /// Directives as configured.
        directives: String,
        /// Parser failure.
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    /// A global subscriber is already installed.
    #[error("tracing subscriber already initialised")]
    AlreadyInitialised(#[source] TryInitError),
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// `EnvFilter` directives, for example `task_service=debug`.
    pub filter: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_owned(),
            format: LogFormat::default(),
        }
    }
}

impl TelemetryConfig {
    /// Reads configuration from [`LOG_FILTER_ENV`] and [`LOG_FORMAT_ENV`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseLogFormatError`] when the format variable holds an
    /// unknown value.
    pub fn from_env() -> Result<Self, ParseLogFormatError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// unset or blank values.
    ///
    /// # Errors
    ///
    /// Returns [`ParseLogFormatError`] when the format value is unknown.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ParseLogFormatError> {
        let mut config = Self::default();
        if let Some(filter) = lookup(LOG_FILTER_ENV).filter(|value| !value.trim().is_empty()) {
            config.filter = filter;
        }
        if let Some(format) = lookup(LOG_FORMAT_ENV).filter(|value| !value.trim().is_empty()) {
            config.format = LogFormat::try_from(format.as_str())?;
        }
        Ok(config)
    }

    /// Sets the filter directives.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Sets the output format.
    #[must_use]
    pub const fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Builds the event filter described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::InvalidFilter`] when the directives do not
    /// parse.
    pub fn env_filter(&self) -> Result<EnvFilter, TelemetryError> {
        EnvFilter::try_new(&self.filter).map_err(|source| TelemetryError::InvalidFilter {
            directives: self.filter.clone(),
            source,
        })
    }
}

/// Installs a global `tracing` subscriber writing to stderr.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] for unparseable directives and
/// [`TelemetryError::AlreadyInitialised`] when a subscriber is already set.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = config.env_filter()?;
    let registry = tracing_subscriber::registry().with(filter);
    let installed = match config.format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr).pretty())
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().with_writer(std::io::stderr).compact())
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().with_writer(std::io::stderr).json())
            .try_init(),
    };
    installed.map_err(TelemetryError::AlreadyInitialised)
}
