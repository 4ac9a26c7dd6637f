//! Error types for kamiyo-core
//!
//! Fetch failures are caught at the call site and degrade to an empty or
//! placeholder view, so most callers only need [`CoreError::class`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for kamiyo operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // Transport Errors
    // ===================
    #[error("Network error calling {endpoint}: {message}")]
    Network { endpoint: String, message: String },

    #[error("HTTP {status} from {endpoint}")]
    HttpStatus { endpoint: String, status: u16 },

    // ===================
    // Payload Errors
    // ===================
    #[error("Failed to decode response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    // ===================
    // Input Errors
    // ===================
    #[error("Invalid email address: {email:?}")]
    InvalidEmail { email: String },

    // ===================
    // Config Errors
    // ===================
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Coarse classification used by views to pick a fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Request never produced a usable response
    Transport,
    /// Response arrived but could not be decoded
    Payload,
    /// Caller supplied bad input
    Input,
    /// Local configuration problem
    Config,
}

impl CoreError {
    pub fn network(endpoint: impl Into<String>, message: impl ToString) -> Self {
        Self::Network {
            endpoint: endpoint.into(),
            message: message.to_string(),
        }
    }

    pub fn decode(endpoint: impl Into<String>, message: impl ToString) -> Self {
        Self::Decode {
            endpoint: endpoint.into(),
            message: message.to_string(),
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            CoreError::Network { .. } | CoreError::HttpStatus { .. } => ErrorClass::Transport,
            CoreError::Decode { .. } => ErrorClass::Payload,
            CoreError::InvalidEmail { .. } => ErrorClass::Input,
            CoreError::ConfigRead { .. }
            | CoreError::ConfigParse { .. }
            | CoreError::InvalidConfig { .. } => ErrorClass::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classes() {
        assert_eq!(
            CoreError::network("/api/usage", "connection refused").class(),
            ErrorClass::Transport
        );
        assert_eq!(
            CoreError::HttpStatus {
                endpoint: "/api/usage".into(),
                status: 502
            }
            .class(),
            ErrorClass::Transport
        );
        assert_eq!(
            CoreError::decode("/api/subscription/status", "EOF while parsing").class(),
            ErrorClass::Payload
        );
        assert_eq!(
            CoreError::InvalidEmail {
                email: "nope".into()
            }
            .class(),
            ErrorClass::Input
        );
    }

    #[test]
    fn test_error_messages_name_endpoint() {
        let err = CoreError::decode("/api/health", "expected value at line 1");
        assert_eq!(
            err.to_string(),
            "Failed to decode response from /api/health: expected value at line 1"
        );
    }
}
