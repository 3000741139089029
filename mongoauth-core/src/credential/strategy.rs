//! Authentication strategies.

use std::fmt;

use secrecy::SecretString;

use super::{AuthMechanism, CredentialDescriptor, resolve_credentials};
use crate::config::{ConnectionProperties, MongoProp};
use crate::error::{ConfigResult, CredentialError, CredentialResult};

/// Authentication database for externally managed principals
pub const EXTERNAL_AUTH_DATABASE: &str = "$external";

/// How a connection authenticates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialStrategy {
    /// No credentials are sent
    NoAuth,
    /// Username and password, with optional `user@authDatabase` notation
    UsernamePassword,
    /// Kerberos via GSSAPI; the username is the full Kerberos principal
    Kerberos,
}

impl CredentialStrategy {
    /// Selects the strategy implied by the properties
    ///
    /// `useKerberos = true` selects Kerberos. Otherwise a non-empty
    /// username selects username/password, and anything else means no
    /// authentication.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `useKerberos` is not a boolean.
    pub fn from_properties(props: &ConnectionProperties) -> ConfigResult<Self> {
        if props.use_kerberos()? {
            return Ok(Self::Kerberos);
        }
        if props.username().is_some_and(|name| !name.is_empty()) {
            Ok(Self::UsernamePassword)
        } else {
            Ok(Self::NoAuth)
        }
    }

    /// Builds the credential list for this strategy
    ///
    /// # Errors
    ///
    /// Returns `CredentialError` if the properties do not satisfy the
    /// strategy; see [`resolve_credentials`] for the username/password
    /// rules.
    pub fn resolve(
        self,
        props: &ConnectionProperties,
    ) -> CredentialResult<Vec<CredentialDescriptor>> {
        match self {
            Self::NoAuth => Ok(Vec::new()),
            Self::UsernamePassword => resolve_credentials(props),
            Self::Kerberos => resolve_kerberos(props),
        }
    }

    /// Short name used in logs and CLI output
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NoAuth => "no-auth",
            Self::UsernamePassword => "username-password",
            Self::Kerberos => "kerberos",
        }
    }
}

impl fmt::Display for CredentialStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn resolve_kerberos(props: &ConnectionProperties) -> CredentialResult<Vec<CredentialDescriptor>> {
    // `user@REALM` is an ordinary Kerberos principal, so no splitting here
    let principal = props
        .username()
        .filter(|name| !name.is_empty())
        .ok_or(CredentialError::MissingProperty(MongoProp::Username))?;

    tracing::debug!(username = principal, "Resolved Kerberos credentials");

    Ok(vec![CredentialDescriptor::new(
        principal,
        EXTERNAL_AUTH_DATABASE,
        SecretString::from(String::new()),
        AuthMechanism::Gssapi,
    )])
}
