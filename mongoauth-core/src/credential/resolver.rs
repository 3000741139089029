//! Username/password credential resolution.

use secrecy::{ExposeSecret, SecretString};

use super::{CredentialDescriptor, Principal};
use crate::config::{ConnectionProperties, MongoProp};
use crate::error::{CredentialError, CredentialResult};
use crate::tracing::span_names;

/// Builds the credentials for username/password authentication
///
/// The username may carry its source database as `user@authDatabase`; the
/// suffix then overrides `databaseName` as the authentication database.
/// Without a suffix the authentication database is `databaseName`, or
/// `admin` when that is absent. An absent password becomes an empty secret.
///
/// Always returns exactly one descriptor on success.
///
/// # Errors
///
/// - `CredentialError::MissingProperty` if the username is absent or empty
/// - `CredentialError::InvalidConfiguration` if the username contains more
///   than one `@`
/// - `CredentialError::Config` if `authMechanism` is not recognised
pub fn resolve_credentials(
    props: &ConnectionProperties,
) -> CredentialResult<Vec<CredentialDescriptor>> {
    let raw = props
        .username()
        .filter(|name| !name.is_empty())
        .ok_or(CredentialError::MissingProperty(MongoProp::Username))?;

    let principal = Principal::parse(raw).inspect_err(|e| {
        tracing::warn!(error = %e, "Rejected username notation");
    })?;
    let database = principal.authentication_database(props.database_name());
    let mechanism = props.auth_mechanism()?;

    let _span = tracing::debug_span!(
        span_names::CREDENTIAL_RESOLVE,
        username = principal.username(),
        auth_database = database
    )
    .entered();

    let secret = props
        .password()
        .map_or_else(String::new, |p| p.expose_secret().to_owned());

    tracing::debug!(%mechanism, "Resolved username/password credentials");

    Ok(vec![CredentialDescriptor::new(
        principal.username(),
        database,
        SecretString::from(secret),
        mechanism,
    )])
}
