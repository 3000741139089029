//! Validate command: checks the `user[@authDatabase]` notation.

use mongoauth_core::config::MongoProp;
use mongoauth_core::credential::Principal;
use mongoauth_core::error::CredentialError;

use crate::error::CliError;
use crate::util::load_base_properties;

/// Parses the username and prints the account name and the database it
/// authenticates against.
pub fn cmd_validate(
    config: Option<&str>,
    username: Option<&str>,
    database: Option<&str>,
) -> Result<(), CliError> {
    let props = load_base_properties(config)?;

    let raw = username
        .or_else(|| props.username())
        .filter(|name| !name.is_empty())
        .ok_or(CredentialError::MissingProperty(MongoProp::Username))?;
    let principal = Principal::parse(raw)?;
    let auth_database =
        principal.authentication_database(database.or_else(|| props.database_name()));

    println!("Username:                {}", principal.username());
    println!("Authentication database: {auth_database}");
    Ok(())
}
