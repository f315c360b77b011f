//! Decoder error handling
//!
//! The decoding engine itself fails only on blank input. The other variants come from the
//! configuration layer and the outer surfaces.

use std::fmt;

use thiserror::Error;

use crate::env::EnvError;

/// Decoder error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Blank message text or an oversized request
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be loaded or failed validation
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// A configuration file or a tone pattern could not be parsed
    #[error("parse error: {0}")]
    ParseError(String),

    /// JSON encoding or decoding failed
    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl DecodeError {
    /// Nothing inside the decoder is transient, so nothing is worth retrying
    pub fn is_retryable(&self) -> bool {
        false
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DecodeError::InvalidInput(_) => ErrorCategory::Input,
            DecodeError::ConfigError(_) => ErrorCategory::Configuration,
            DecodeError::ParseError(_) => ErrorCategory::Parsing,
            DecodeError::SerializationError(_) => ErrorCategory::Serialization,
        }
    }

    /// Appends context to the message
    pub fn with_context<T: fmt::Display>(self, context: T) -> Self {
        match self {
            DecodeError::InvalidInput(msg) => {
                DecodeError::InvalidInput(format!("{} ({})", msg, context))
            }
            DecodeError::ConfigError(msg) => {
                DecodeError::ConfigError(format!("{} ({})", msg, context))
            }
            DecodeError::ParseError(msg) => {
                DecodeError::ParseError(format!("{} ({})", msg, context))
            }
            DecodeError::SerializationError(msg) => {
                DecodeError::SerializationError(format!("{} ({})", msg, context))
            }
        }
    }
}

/// Error category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Parsing,
    Serialization,
}

impl From<::config::ConfigError> for DecodeError {
    fn from(error: ::config::ConfigError) -> Self {
        DecodeError::ConfigError(error.to_string())
    }
}

impl From<toml::de::Error> for DecodeError {
    fn from(error: toml::de::Error) -> Self {
        DecodeError::ParseError(format!("TOML: {}", error))
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(error: serde_json::Error) -> Self {
        DecodeError::SerializationError(format!("JSON: {}", error))
    }
}

impl From<regex::Error> for DecodeError {
    fn from(error: regex::Error) -> Self {
        DecodeError::ParseError(format!("pattern: {}", error))
    }
}

impl From<EnvError> for DecodeError {
    fn from(error: EnvError) -> Self {
        DecodeError::ConfigError(error.to_string())
    }
}

pub type DecoderResult<T> = Result<T, DecodeError>;

pub mod helpers {
    use super::*;

    /// Logs the error at a level matching its category and returns it
    pub fn log_error<T>(error: DecodeError) -> DecoderResult<T> {
        match error.category() {
            ErrorCategory::Input => tracing::info!("rejected input: {}", error),
            ErrorCategory::Configuration | ErrorCategory::Parsing => {
                tracing::error!("{}", error)
            }
            ErrorCategory::Serialization => tracing::warn!("{}", error),
        }

        Err(error)
    }

    pub fn validation_error<T: fmt::Display>(msg: T) -> DecodeError {
        DecodeError::InvalidInput(msg.to_string())
    }

    pub fn config_error<T: fmt::Display>(msg: T) -> DecodeError {
        DecodeError::ConfigError(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::helpers::*;
    use super::*;

    #[test]
    fn test_nothing_is_retryable() {
        assert!(!validation_error("blank").is_retryable());
        assert!(!config_error("bad").is_retryable());
    }

    #[test]
    fn test_categories() {
        assert_eq!(validation_error("x").category(), ErrorCategory::Input);
        assert_eq!(config_error("x").category(), ErrorCategory::Configuration);

        let regex_error = regex::Regex::new("(").unwrap_err();
        assert_eq!(DecodeError::from(regex_error).category(), ErrorCategory::Parsing);

        let json_error = serde_json::from_str::<u32>("nope").unwrap_err();
        assert_eq!(
            DecodeError::from(json_error).category(),
            ErrorCategory::Serialization
        );
    }

    #[test]
    fn test_with_context() {
        let error = validation_error("message text is required").with_context("POST /api/decode");
        assert_eq!(
            error.to_string(),
            "invalid input: message text is required (POST /api/decode)"
        );
    }

    #[test]
    fn test_log_error_returns_err() {
        let result: DecoderResult<()> = log_error(validation_error("blank"));
        assert_eq!(result, Err(DecodeError::InvalidInput("blank".to_string())));
    }
}
