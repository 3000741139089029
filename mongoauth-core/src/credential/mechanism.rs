//! Authentication mechanism names.

use std::fmt;
use std::str::FromStr;

/// Authentication mechanism requested from the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuthMechanism {
    /// Let the driver negotiate with the server
    #[default]
    Default,
    /// SCRAM with SHA-1
    ScramSha1,
    /// SCRAM with SHA-256
    ScramSha256,
    /// Legacy challenge-response
    MongoDbCr,
    /// LDAP via SASL PLAIN
    Plain,
    /// Kerberos via GSSAPI
    Gssapi,
}

impl AuthMechanism {
    /// Wire name understood by MongoDB drivers, `None` for [`Self::Default`]
    #[must_use]
    pub const fn wire_name(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::ScramSha1 => Some("SCRAM-SHA-1"),
            Self::ScramSha256 => Some("SCRAM-SHA-256"),
            Self::MongoDbCr => Some("MONGODB-CR"),
            Self::Plain => Some("PLAIN"),
            Self::Gssapi => Some("GSSAPI"),
        }
    }
}

impl FromStr for AuthMechanism {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "" | "DEFAULT" => Ok(Self::Default),
            "SCRAM-SHA-1" => Ok(Self::ScramSha1),
            "SCRAM-SHA-256" => Ok(Self::ScramSha256),
            "MONGODB-CR" => Ok(Self::MongoDbCr),
            "PLAIN" => Ok(Self::Plain),
            "GSSAPI" => Ok(Self::Gssapi),
            _ => Err(()),
        }
    }
}

impl fmt::Display for AuthMechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name().unwrap_or("DEFAULT"))
    }
}
