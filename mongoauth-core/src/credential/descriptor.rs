//! Resolved credentials handed to the database driver.

use secrecy::SecretString;

use super::AuthMechanism;

/// One set of credentials for authenticating a session
///
/// Produced fresh by each resolution; the caller owns it and passes it on
/// to the driver. `Debug` never shows the secret.
#[derive(Debug)]
pub struct CredentialDescriptor {
    principal_name: String,
    authentication_database: String,
    secret: SecretString,
    mechanism: AuthMechanism,
}

impl CredentialDescriptor {
    /// Creates a descriptor
    #[must_use]
    pub fn new(
        principal_name: impl Into<String>,
        authentication_database: impl Into<String>,
        secret: SecretString,
        mechanism: AuthMechanism,
    ) -> Self {
        Self {
            principal_name: principal_name.into(),
            authentication_database: authentication_database.into(),
            secret,
            mechanism,
        }
    }

    /// Account name presented to the server
    #[must_use]
    pub fn principal_name(&self) -> &str {
        &self.principal_name
    }

    /// Database the credentials are validated against
    #[must_use]
    pub fn authentication_database(&self) -> &str {
        &self.authentication_database
    }

    /// The password, empty for mechanisms that carry none
    #[must_use]
    pub const fn secret(&self) -> &SecretString {
        &self.secret
    }

    /// Mechanism to authenticate with
    #[must_use]
    pub const fn mechanism(&self) -> AuthMechanism {
        self.mechanism
    }

    /// Splits the descriptor for a driver call
    #[must_use]
    pub fn into_parts(self) -> (String, String, SecretString, AuthMechanism) {
        (
            self.principal_name,
            self.authentication_database,
            self.secret,
            self.mechanism,
        )
    }
}
