//! The `username[@authDatabase]` notation.
//!
//! An account created in one database (typically `admin`) and granted
//! access to others is written as `user@sourceDb`. The suffix names the
//! database the server authenticates against, independent of the database
//! the connection later queries.

use crate::error::{CredentialError, CredentialResult};

/// Separator between username and source database
pub const PRINCIPAL_SEPARATOR: char = '@';

/// Authentication database used when neither the principal nor the
/// properties name one
pub const DEFAULT_AUTH_DATABASE: &str = "admin";

/// A parsed principal borrowed from the configured username
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal<'a> {
    username: &'a str,
    source: Option<&'a str>,
}

impl<'a> Principal<'a> {
    /// Parses a configured username
    ///
    /// A trailing `@` carries no source, so the whole string stays the
    /// username. A leading `@` yields an empty username.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::InvalidConfiguration` if the string holds
    /// more than one `@`.
    pub fn parse(principal: &'a str) -> CredentialResult<Self> {
        let mut segments = principal.split(PRINCIPAL_SEPARATOR);
        let username = segments.next().unwrap_or_default();

        match (segments.next(), segments.next()) {
            (None, _) | (Some(""), None) => Ok(Self {
                username: principal,
                source: None,
            }),
            (Some(source), None) => Ok(Self {
                username,
                source: Some(source),
            }),
            (Some(_), Some(_)) => Err(CredentialError::InvalidConfiguration {
                principal: principal.to_string(),
                reason: "it should either have one '@' or none",
            }),
        }
    }

    /// The account name without any source suffix
    #[must_use]
    pub const fn username(&self) -> &'a str {
        self.username
    }

    /// The source database encoded after `@`, if any
    #[must_use]
    pub const fn source(&self) -> Option<&'a str> {
        self.source
    }

    /// Picks the database to authenticate against
    ///
    /// An encoded source always wins over `configured`; with neither,
    /// [`DEFAULT_AUTH_DATABASE`] is used. An explicitly empty `configured`
    /// value is returned unchanged.
    #[must_use]
    pub fn authentication_database(&self, configured: Option<&'a str>) -> &'a str {
        self.source.or(configured).unwrap_or(DEFAULT_AUTH_DATABASE)
    }
}
