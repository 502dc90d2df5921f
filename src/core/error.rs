//! # Errors
//!
//! Clamped settings and unmapped keys are handled where they occur and never
//! show up here. What remains is fatal (the terminal or the config file is
//! unusable) or an action reporting that it failed.

use std::convert::Infallible;
use std::fmt;
use std::io;

use crate::core::config::ConfigError;

#[derive(Debug)]
pub enum ShellError {
    /// The render surface could not be drawn to or read from.
    Terminal(io::Error),
    /// The config file exists but could not be loaded.
    Config(ConfigError),
    /// An action ran but could not do its job. The loop survives this.
    Action { action: &'static str, reason: String },
}

impl ShellError {
    pub fn action(action: &'static str, reason: impl Into<String>) -> Self {
        ShellError::Action {
            action,
            reason: reason.into(),
        }
    }

    /// Whether the application loop has to stop because of this error.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ShellError::Action { .. })
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Terminal(e) => write!(f, "terminal error: {e}"),
            ShellError::Config(e) => write!(f, "{e}"),
            ShellError::Action { action, reason } => write!(f, "{action} failed: {reason}"),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Terminal(e) => Some(e),
            ShellError::Config(e) => Some(e),
            ShellError::Action { .. } => None,
        }
    }
}

impl From<io::Error> for ShellError {
    fn from(e: io::Error) -> Self {
        ShellError::Terminal(e)
    }
}

impl From<ConfigError> for ShellError {
    fn from(e: ConfigError) -> Self {
        ShellError::Config(e)
    }
}

// In-memory backends cannot fail.
impl From<Infallible> for ShellError {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}
