use std::{env, str::FromStr};

use thiserror::Error;

/// Environment variable that sets the default log level.
pub const LOG_LEVEL_ENV: &str = "RPNCALC_LOG_LEVEL";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The log level string is not one of the known levels.
    #[error("unknown log level '{0}', expected one of: trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Log level, matching the `tracing` levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Every event, including per-stage pipeline diagnostics.
    Trace,
    /// Stage summaries such as token counts and postfix text.
    Debug,
    /// Informational messages.
    Info,
    /// Warnings only.
    #[default]
    Warn,
    /// Errors only.
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ConfigError::UnknownLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Converts to a `tracing` filter directive.
    #[must_use]
    pub const fn as_filter_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Settings for the command-line front end.
///
/// Values start from [`Config::default`], are overridden by the environment
/// ([`Config::from_env`]), and finally by command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Minimum level of log events written to stderr.
    pub log_level: LogLevel,
    /// Whether the read/print loop shows an input prompt.
    pub prompt:    bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { log_level: LogLevel::default(),
               prompt:    true, }
    }
}

impl Config {
    /// Builds a configuration from [`LOG_LEVEL_ENV`], falling back to the
    /// defaults when it is unset. A `log_level` given on the command line
    /// wins, and the environment is not read at all in that case.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownLogLevel`] if no `log_level` is given
    /// and the variable holds an unknown level.
    pub fn from_env(log_level: Option<LogLevel>) -> Result<Self, ConfigError> {
        Self::from_lookup(log_level, |key| env::var(key).ok())
    }

    /// Like [`Config::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownLogLevel`] for an unknown level.
    ///
    /// # Example
    /// ```
    /// use rpncalc::config::{Config, LogLevel};
    ///
    /// let config = Config::from_lookup(None, |_| Some("DEBUG".to_string())).unwrap();
    /// assert_eq!(config.log_level, LogLevel::Debug);
    ///
    /// let config = Config::from_lookup(Some(LogLevel::Error), |_| Some("bogus".to_string()))
    ///     .unwrap();
    /// assert_eq!(config.log_level, LogLevel::Error);
    /// ```
    pub fn from_lookup<F>(log_level: Option<LogLevel>, lookup: F) -> Result<Self, ConfigError>
        where F: Fn(&str) -> Option<String>
    {
        let config = Self::default();
        if let Some(level) = log_level {
            return Ok(config.with_log_level(level));
        }

        match lookup(LOG_LEVEL_ENV) {
            Some(level) => Ok(config.with_log_level(level.parse()?)),
            None => Ok(config),
        }
    }

    #[must_use]
    pub const fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    #[must_use]
    pub const fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }
}
