//! Shared error types for the calculator and its configuration layer

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for roughcut operations
#[derive(Debug, Error)]
pub enum Error {
    /// Input rejected before any metric is derived
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Configuration file problems
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        path: Option<PathBuf>,
    },

    /// TOML parse errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a configuration error tied to a file
    pub fn configuration_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Configuration {
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_prefixed() {
        let err = Error::validation("scenario list is empty");
        assert_eq!(err.to_string(), "Invalid input: scenario list is empty");
    }

    #[test]
    fn configuration_error_keeps_path() {
        let err = Error::configuration_with_path("cannot read roughcut.toml", "roughcut.toml");
        assert_eq!(err.to_string(), "Configuration error: cannot read roughcut.toml");
        assert!(matches!(
            err,
            Error::Configuration { path: Some(ref p), .. } if p.ends_with("roughcut.toml")
        ));
    }
}
