//! CLI error types and exit codes.

use mongoauth_core::error::{ConfigError, CredentialError, MongoAuthError};

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - unreadable or malformed configuration, IO
    pub const GENERAL_ERROR: i32 = 1;
    /// Credentials could not be derived - malformed or missing username
    pub const CREDENTIAL_ERROR: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Credential resolution error
    #[error("Credential error: {0}")]
    Credential(String),

    /// Output serialization error
    #[error("Output error: {0}")]
    Output(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<CredentialError> for CliError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::Config(e) => Self::from(e),
            other => Self::Credential(other.to_string()),
        }
    }
}

impl From<MongoAuthError> for CliError {
    fn from(err: MongoAuthError) -> Self {
        match err {
            MongoAuthError::Config(e) => Self::from(e),
            MongoAuthError::Credential(e) => Self::from(e),
        }
    }
}

impl CliError {
    /// Returns the process exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Credential(_) => exit_codes::CREDENTIAL_ERROR,
            Self::Config(_) | Self::Output(_) | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
