//! Connection setup for `MongoAuth`
//!
//! [`ConnectionPlan::prepare`] is the one setup routine for every
//! authentication mode: it selects the [`CredentialStrategy`], resolves its
//! credentials and captures where to connect. Opening the connection is
//! left to the driver.

use crate::config::ConnectionProperties;
use crate::credential::{CredentialDescriptor, CredentialStrategy};
use crate::error::MongoAuthResult;
use crate::tracing::span_names;

/// Everything a driver needs to open an authenticated session
#[derive(Debug)]
pub struct ConnectionPlan {
    /// Selected authentication strategy
    pub strategy: CredentialStrategy,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database queried after authentication; not affected by a
    /// `user@authDatabase` suffix
    pub database: Option<String>,
    /// Credentials to authenticate with, empty for [`CredentialStrategy::NoAuth`]
    pub credentials: Vec<CredentialDescriptor>,
}

impl ConnectionPlan {
    /// Prepares a connection from properties
    ///
    /// # Errors
    ///
    /// Returns `MongoAuthError::Config` for invalid `port`, `useKerberos`
    /// values and `MongoAuthError::Credential` if credentials cannot be
    /// resolved.
    pub fn prepare(props: &ConnectionProperties) -> MongoAuthResult<Self> {
        let strategy = CredentialStrategy::from_properties(props)?;
        let host = props.host().to_string();
        let port = props.port()?;

        let _span = tracing::info_span!(
            span_names::CONNECTION_PREPARE,
            host = %host,
            port,
            strategy = %strategy
        )
        .entered();

        let credentials = strategy.resolve(props)?;
        tracing::info!(credential_count = credentials.len(), "Connection prepared");

        Ok(Self {
            strategy,
            host,
            port,
            database: props.database_name().map(String::from),
            credentials,
        })
    }

    /// `host:port` address of the server
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
