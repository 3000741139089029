//! Error types for `MongoAuth`
//!
//! Each concern has its own `thiserror` enum; [`MongoAuthError`] wraps them
//! for callers that drive a whole connection setup.

use thiserror::Error;

use crate::config::MongoProp;

/// Errors raised while reading or interpreting connection properties
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A property key is not one of the recognised [`MongoProp`] names
    #[error("Unknown connection property: {0}")]
    UnknownProperty(String),

    /// A property value could not be interpreted
    #[error("Invalid value '{value}' for property {property}")]
    InvalidValue {
        /// Property whose value was rejected
        property: MongoProp,
        /// The offending value
        value: String,
    },

    /// The properties file could not be parsed
    #[error("Failed to parse properties: {0}")]
    Parse(String),

    /// IO error while reading a properties file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while deriving credentials from connection properties
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The username notation is malformed
    #[error("Illegal username '{principal}': {reason}")]
    InvalidConfiguration {
        /// The username exactly as configured
        principal: String,
        /// What is wrong with it
        reason: &'static str,
    },

    /// A property required by the selected strategy is absent or empty
    #[error("Missing required property: {0}")]
    MissingProperty(MongoProp),

    /// A supporting property has an invalid value
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Top-level error for a complete connection setup
#[derive(Debug, Error)]
pub enum MongoAuthError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Credential resolution error
    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for credential resolution
pub type CredentialResult<T> = Result<T, CredentialError>;

/// Result type for connection setup
pub type MongoAuthResult<T> = Result<T, MongoAuthError>;
