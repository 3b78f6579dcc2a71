//! Custom error types for the autoclicker.
//!
//! This module provides structured error types using `thiserror`. The binary
//! wraps them in `anyhow` at the top level.

use std::io;
use thiserror::Error;

use crate::keys::FunctionKey;

/// Main error type for autoclicker operations.
#[derive(Error, Debug)]
pub enum ClickerError {
    /// Clicks-per-second value is not a positive finite number.
    #[error("invalid clicks per second '{value}': {reason}")]
    InvalidCps { value: String, reason: String },

    /// Start and quit hotkeys are bound to the same key.
    #[error("start key and quit key are both {key}; pick two different keys")]
    ConflictingHotkeys { key: FunctionKey },

    /// Error creating the hotkey manager or registering a hotkey.
    #[error("hotkey error: {0}")]
    Hotkey(String),

    /// The input injection backend could not be initialised.
    #[error("failed to initialise input injection: {0}")]
    Injector(String),

    /// A single synthetic click could not be dispatched.
    #[error("failed to click {button} button: {reason}")]
    Injection { button: String, reason: String },

    /// The click worker thread failed to start or died before reporting ready.
    #[error("click worker failed to start: {0}")]
    WorkerStart(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for autoclicker operations.
pub type Result<T> = std::result::Result<T, ClickerError>;

impl ClickerError {
    /// Create a new InvalidCps error.
    pub fn invalid_cps(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCps {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a new Hotkey error.
    pub fn hotkey(message: impl Into<String>) -> Self {
        Self::Hotkey(message.into())
    }

    /// Create a new Injector error.
    pub fn injector(message: impl Into<String>) -> Self {
        Self::Injector(message.into())
    }

    /// Create a new Injection error.
    pub fn injection(button: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Injection {
            button: button.into(),
            reason: reason.into(),
        }
    }

    /// Create a new WorkerStart error.
    pub fn worker_start(message: impl Into<String>) -> Self {
        Self::WorkerStart(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClickerError::invalid_cps("-3", "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "invalid clicks per second '-3': must be greater than zero"
        );

        let err = ClickerError::ConflictingHotkeys {
            key: FunctionKey::F8,
        };
        assert_eq!(
            err.to_string(),
            "start key and quit key are both f8; pick two different keys"
        );

        let err = ClickerError::injection("right", "no display");
        assert_eq!(err.to_string(), "failed to click right button: no display");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::Other, "spawn failed");
        let err: ClickerError = io_err.into();
        assert!(matches!(err, ClickerError::Io(_)));
    }
}
