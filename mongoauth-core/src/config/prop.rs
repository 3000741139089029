//! Recognised connection property keys.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// A connection property key
///
/// The string form is the canonical key used in properties files and
/// error messages. Parsing matches it exactly, as TOML keys do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MongoProp {
    /// Server host name
    Host,
    /// Server port
    Port,
    /// Target database for queries
    DatabaseName,
    /// Account principal, optionally `user@authDatabase`
    Username,
    /// Account password (held as a secret)
    Password,
    /// Authenticate with Kerberos (GSSAPI) instead of a password
    UseKerberos,
    /// Explicit authentication mechanism
    AuthMechanism,
}

impl MongoProp {
    /// Every recognised property, in declaration order
    pub const ALL: [Self; 7] = [
        Self::Host,
        Self::Port,
        Self::DatabaseName,
        Self::Username,
        Self::Password,
        Self::UseKerberos,
        Self::AuthMechanism,
    ];

    /// Returns the canonical key name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::Port => "port",
            Self::DatabaseName => "databaseName",
            Self::Username => "username",
            Self::Password => "password",
            Self::UseKerberos => "useKerberos",
            Self::AuthMechanism => "authMechanism",
        }
    }

    /// Returns true if values of this property must never be logged
    #[must_use]
    pub const fn is_secret(self) -> bool {
        matches!(self, Self::Password)
    }
}

impl fmt::Display for MongoProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MongoProp {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|prop| prop.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownProperty(s.to_string()))
    }
}
